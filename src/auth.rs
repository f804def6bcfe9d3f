//! Bearer token authentication for the API routes

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use crate::{error::AppError, routes::AppState};

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Expiration timestamp
    pub exp: u64,
}

#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: String,
}

pub fn validate_token(token: &str, secret: &str) -> anyhow::Result<AuthUser> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;

    if token_data.claims.sub.is_empty() {
        anyhow::bail!("token without subject");
    }

    Ok(AuthUser {
        id: token_data.claims.sub,
    })
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Ok(TypedHeader(Authorization(bearer))) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await
        else {
            tracing::debug!("missing bearer token");
            return Err(AppError::Unauthorized);
        };

        validate_token(bearer.token(), &state.config.jwt.secret).map_err(|e| {
            tracing::warn!(error = %e, "invalid or expired token");
            AppError::Unauthorized
        })
    }
}
