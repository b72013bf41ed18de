//! API middleware and request extractors

use axum::{
    async_trait,
    body::Body,
    extract::FromRequestParts,
    http::{request::Parts, HeaderName, Request},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tracing::info;

use core_kernel::OperationMetadata;

/// Header carrying the request identifier
pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Header naming the operator at the desk
pub const OPERATOR_HEADER: HeaderName = HeaderName::from_static("x-operator");

fn header_value(headers: &axum::http::HeaderMap, name: &HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|h| h.to_str().ok())
        .map(str::to_string)
}

/// Request logging middleware
///
/// Logs every API request with its outcome and duration
pub async fn request_logging_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let request_id = header_value(request.headers(), &REQUEST_ID_HEADER)
        .unwrap_or_else(|| "-".to_string());

    let start = Utc::now();

    let response = next.run(request).await;

    let duration = Utc::now() - start;
    let status = response.status();

    info!(
        method = %method,
        uri = %uri,
        request_id = %request_id,
        status = %status.as_u16(),
        duration_ms = duration.num_milliseconds(),
        "API request"
    );

    response
}

/// Operation metadata built from request headers
///
/// The request id becomes the correlation id and `x-operator`, when
/// present, the initiating user.
#[derive(Debug, Clone, Default)]
pub struct RequestMetadata(pub OperationMetadata);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for RequestMetadata {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let metadata = OperationMetadata {
            correlation_id: header_value(&parts.headers, &REQUEST_ID_HEADER),
            initiated_by: header_value(&parts.headers, &OPERATOR_HEADER),
            ..Default::default()
        };
        Ok(RequestMetadata(metadata))
    }
}

impl RequestMetadata {
    pub fn into_inner(self) -> Option<OperationMetadata> {
        Some(self.0)
    }
}
