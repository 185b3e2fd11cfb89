//! Owner identification
//!
//! Every dataset route is scoped to an owner taken from the
//! `Authorization: Bearer <owner-id>` header. The token is an opaque owner
//! identifier; requests without one are rejected with 401 before any handler
//! logic runs.

use crate::api::response::ErrorResponse;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, StatusCode},
    Json,
};

/// Authenticated owner of the datasets touched by a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner(pub String);

impl Owner {
    pub fn id(&self) -> &str {
        &self.0
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for Owner
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(unauthorized)?;

        let token = header_value.strip_prefix("Bearer ").ok_or_else(unauthorized)?.trim();

        if token.is_empty() {
            return Err(unauthorized());
        }

        Ok(Owner(token.to_string()))
    }
}

fn unauthorized() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse::new(
            "UNAUTHORIZED",
            "Missing or malformed Authorization header",
        )),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(auth: Option<&str>) -> Result<Owner, StatusCode> {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = auth {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let request = builder.body(()).unwrap();
        let (mut parts, _) = request.into_parts();

        Owner::from_request_parts(&mut parts, &())
            .await
            .map_err(|(status, _)| status)
    }

    #[tokio::test]
    async fn test_bearer_token_becomes_owner_id() {
        let owner = extract(Some("Bearer alice")).await.unwrap();
        assert_eq!(owner.id(), "alice");
    }

    #[tokio::test]
    async fn test_missing_header_is_unauthorized() {
        assert_eq!(extract(None).await.unwrap_err(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_empty_token_is_unauthorized() {
        assert_eq!(
            extract(Some("Bearer ")).await.unwrap_err(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[tokio::test]
    async fn test_non_bearer_scheme_is_unauthorized() {
        assert_eq!(
            extract(Some("Basic alice")).await.unwrap_err(),
            StatusCode::UNAUTHORIZED
        );
    }
}
