//! ALB and API Gateway request adaptations
//!
//! Proxy events wrap the student mapping in their `body`, possibly base64
//! encoded. This module unwraps it into the plain event the ingestor expects.

use aws_lambda_events::event::alb::AlbTargetGroupRequest;
use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayV2httpRequest};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

/// Internal representation of an Lambda http event from
/// ALB, API Gateway REST and HTTP API proxy event perspectives
///
/// The order of the variants is notable. Serde will try to deserialize in
/// this order.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum LambdaRequest {
    ApiGatewayV1(ApiGatewayProxyRequest),
    ApiGatewayV2(ApiGatewayV2httpRequest),
    Alb(AlbTargetGroupRequest),
}

impl LambdaRequest {
    /// Return the `RequestOrigin` of the request, so that the response can be
    /// shaped the way that origin expects.
    pub fn request_origin(&self) -> RequestOrigin {
        match self {
            LambdaRequest::ApiGatewayV1 { .. } => RequestOrigin::ApiGatewayV1,
            LambdaRequest::ApiGatewayV2 { .. } => RequestOrigin::ApiGatewayV2,
            LambdaRequest::Alb { .. } => RequestOrigin::Alb,
        }
    }

    /// The student mapping carried in the request body.
    pub fn payload(&self) -> Value {
        let (body, base64) = match self {
            LambdaRequest::ApiGatewayV1(ag) => (ag.body.as_deref(), ag.is_base64_encoded.unwrap_or_default()),
            LambdaRequest::ApiGatewayV2(ag) => (ag.body.as_deref(), ag.is_base64_encoded),
            LambdaRequest::Alb(alb) => (alb.body.as_deref(), alb.is_base64_encoded),
        };
        payload_from_body(body, base64)
    }
}

/// Represents the origin from which the lambda was requested from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOrigin {
    /// API Gateway proxy request origin
    ApiGatewayV1,
    /// API Gateway v2 request origin
    ApiGatewayV2,
    /// ALB request origin
    Alb,
}

/// Decode a proxy body into a JSON value.
///
/// A missing, undecodable or non-JSON body yields an empty mapping, which the
/// ingestor then rejects as incomplete.
pub fn payload_from_body(body: Option<&str>, is_base64_encoded: bool) -> Value {
    let empty = || Value::Object(Map::new());

    let raw = match body {
        Some(b) if !b.trim().is_empty() => b,
        _ => return empty(),
    };

    let decoded = if is_base64_encoded {
        match base64::decode(raw) {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!(error = %e, "body is not valid base64");
                return empty();
            }
        }
    } else {
        raw.as_bytes().to_vec()
    };

    serde_json::from_slice(&decoded).unwrap_or_else(|e| {
        debug!(error = %e, "body is not valid JSON");
        empty()
    })
}
