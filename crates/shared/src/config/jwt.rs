use crate::{abstract_trait::JwtServiceTrait, errors::ServiceError};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const ACCESS_TOKEN: &str = "access";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    pub id: i32,
    pub email: String,
    pub role: Role,
    pub exp: usize,
    pub iat: usize,
    pub token_type: String,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub jwt_secret: String,
    pub ttl_minutes: i64,
}

impl JwtConfig {
    pub fn new(jwt_secret: &str, ttl_minutes: i64) -> Self {
        JwtConfig {
            jwt_secret: jwt_secret.to_string(),
            ttl_minutes,
        }
    }
}

impl JwtServiceTrait for JwtConfig {
    fn generate_token(
        &self,
        id: i32,
        email: &str,
        role: Role,
        token_type: &str,
    ) -> Result<String, ServiceError> {
        if token_type != ACCESS_TOKEN {
            return Err(ServiceError::InvalidTokenType);
        }

        let now = Utc::now();
        let iat = now.timestamp() as usize;
        let exp = (now + Duration::minutes(self.ttl_minutes)).timestamp() as usize;

        let claims = Claims {
            id,
            email: email.to_string(),
            role,
            exp,
            iat,
            token_type: token_type.to_string(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )
        .map_err(ServiceError::Jwt)
    }

    fn verify_token(&self, token: &str, expected_type: &str) -> Result<Claims, ServiceError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_ref());
        let token_data = decode::<Claims>(token, &decoding_key, &Validation::default())
            .map_err(|err| match err.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => ServiceError::TokenExpired,
                _ => ServiceError::Jwt(err),
            })?;

        let current_time = Utc::now().timestamp() as usize;

        if token_data.claims.exp < current_time {
            return Err(ServiceError::TokenExpired);
        }

        if token_data.claims.token_type != expected_type {
            return Err(ServiceError::InvalidTokenType);
        }

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_verifies_with_same_secret() {
        let jwt = JwtConfig::new("test-secret", 60);
        let token = jwt
            .generate_token(42, "jan@example.com", Role::User, ACCESS_TOKEN)
            .unwrap();

        let claims = jwt.verify_token(&token, ACCESS_TOKEN).unwrap();
        assert_eq!(claims.id, 42);
        assert_eq!(claims.email, "jan@example.com");
        assert_eq!(claims.role, Role::User);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let issuer = JwtConfig::new("secret-a", 60);
        let verifier = JwtConfig::new("secret-b", 60);
        let token = issuer
            .generate_token(1, "admin", Role::Admin, ACCESS_TOKEN)
            .unwrap();

        assert!(matches!(
            verifier.verify_token(&token, ACCESS_TOKEN),
            Err(ServiceError::Jwt(_))
        ));
    }

    #[test]
    fn expired_token_is_rejected() {
        let jwt = JwtConfig::new("test-secret", -10);
        let token = jwt
            .generate_token(7, "old@example.com", Role::User, ACCESS_TOKEN)
            .unwrap();

        assert!(matches!(
            jwt.verify_token(&token, ACCESS_TOKEN),
            Err(ServiceError::TokenExpired)
        ));
    }

    #[test]
    fn unknown_token_type_is_not_issued() {
        let jwt = JwtConfig::new("test-secret", 60);
        assert!(matches!(
            jwt.generate_token(1, "a@b.c", Role::User, "refresh"),
            Err(ServiceError::InvalidTokenType)
        ));
    }
}
