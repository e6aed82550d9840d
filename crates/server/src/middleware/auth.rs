use crate::api::ErrorResponse;
use crate::config::AppState;
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

/// Extract the bearer token from the authorization header
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let auth_header = headers.get(header::AUTHORIZATION)?;
    let auth_str = auth_header.to_str().ok()?;

    let (scheme, token) = auth_str.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("Bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Bearer token enforcement middleware
pub async fn require_bearer(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let rejection = match extract_bearer_token(req.headers()) {
        Some(token) if token == state.auth_token => None,
        Some(_) => Some("Invalid bearer token"),
        None => Some("Missing bearer token"),
    };

    match rejection {
        None => next.run(req).await,
        Some(reason) => {
            tracing::warn!(path = %req.uri().path(), reason, "Rejected unauthenticated request");
            unauthorized(reason)
        }
    }
}

fn unauthorized(reason: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, "Bearer")],
        Json(ErrorResponse::new(reason)),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_extract_bearer_token() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "Authorization",
            HeaderValue::from_static("Bearer token123"),
        );

        assert_eq!(extract_bearer_token(&headers), Some("token123"));
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert("Authorization", HeaderValue::from_static("bearer abc"));
        assert_eq!(extract_bearer_token(&headers), Some("abc"));
    }

    #[test]
    fn test_rejects_other_schemes() {
        let mut headers = HeaderMap::new();
        assert_eq!(extract_bearer_token(&headers), None);

        headers.insert("Authorization", HeaderValue::from_static("Basic dXNlcjpwYXNz"));
        assert_eq!(extract_bearer_token(&headers), None);

        headers.insert("Authorization", HeaderValue::from_static("Bearer "));
        assert_eq!(extract_bearer_token(&headers), None);
    }
}
