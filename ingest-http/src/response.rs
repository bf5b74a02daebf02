//! Response types

use aws_lambda_events::encodings::Body;
use aws_lambda_events::event::alb::AlbTargetGroupResponse;
use aws_lambda_events::event::apigw::{ApiGatewayProxyResponse, ApiGatewayV2httpResponse};
use http::{
    header::{HeaderValue, CONTENT_TYPE},
    HeaderMap, StatusCode,
};
use serde::Serialize;
use student_ingest::{response::encode_message, Outcome};

use crate::request::RequestOrigin;

/// Representation of Lambda response
#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum LambdaResponse {
    ApiGatewayV2(ApiGatewayV2httpResponse),
    ApiGatewayV1(ApiGatewayProxyResponse),
    Alb(AlbTargetGroupResponse),
}

/// tranformation from an ingestion outcome to the origin's response type
impl LambdaResponse {
    pub fn from_outcome(request_origin: &RequestOrigin, outcome: Outcome) -> Self {
        let status_code = outcome.status.status_code();
        let body = Some(Body::Text(encode_message(&outcome.message)));

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        match request_origin {
            RequestOrigin::ApiGatewayV2 => LambdaResponse::ApiGatewayV2(ApiGatewayV2httpResponse {
                body,
                status_code: status_code as i64,
                is_base64_encoded: Some(false),
                cookies: Vec::new(),
                headers: headers.clone(),
                multi_value_headers: headers,
            }),
            RequestOrigin::ApiGatewayV1 => LambdaResponse::ApiGatewayV1(ApiGatewayProxyResponse {
                body,
                status_code: status_code as i64,
                is_base64_encoded: Some(false),
                headers: headers.clone(),
                multi_value_headers: headers,
            }),
            RequestOrigin::Alb => LambdaResponse::Alb(AlbTargetGroupResponse {
                body,
                status_code: status_code as i64,
                is_base64_encoded: false,
                headers: headers.clone(),
                multi_value_headers: headers,
                status_description: Some(format!(
                    "{} {}",
                    status_code,
                    StatusCode::from_u16(status_code)
                        .ok()
                        .and_then(|s| s.canonical_reason())
                        .unwrap_or_default()
                )),
            }),
        }
    }
}
