//! Explicit bearer credential for hotel backend calls.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::error::AppError;

/// Bearer credential forwarded on every hotel backend call.
///
/// The caller's token travels through request handlers as a value; this
/// service never stores or refreshes credentials.
#[derive(Debug, Clone)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Value for the `Authorization` header on outgoing backend requests.
    pub fn authorization_value(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AppError::MissingToken)?;

        let token = header.strip_prefix("Bearer ").ok_or(AppError::MissingToken)?;
        if token.is_empty() {
            return Err(AppError::MissingToken);
        }

        Ok(Session::new(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_value() {
        let session = Session::new("abc123");
        assert_eq!(session.authorization_value(), "Bearer abc123");
    }
}
