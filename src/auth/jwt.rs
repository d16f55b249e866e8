use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    auth::claims::Claims,
    errors::{AppError, AppResult},
    models::domain::user::UserRole,
};

/// Signs and verifies the `auth_token` cookie payload. The secret is injected
/// from [`crate::config::Config`] at startup; nothing here reads the process
/// environment.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiration_hours: i64,
}

impl JwtService {
    pub fn new(secret: &SecretString, expiration_hours: i64) -> Self {
        let secret_bytes = secret.expose_secret().as_bytes();

        Self {
            encoding_key: EncodingKey::from_secret(secret_bytes),
            decoding_key: DecodingKey::from_secret(secret_bytes),
            validation: Validation::default(),
            expiration_hours,
        }
    }

    pub fn issue(&self, user_id: i64, role: UserRole) -> AppResult<String> {
        let claims = Claims::new(user_id, role, self.expiration_hours);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to create JWT: {}", e)))
    }

    /// Callers treat every failure mode the same way: the request is
    /// unauthenticated.
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AppError::Unauthorized("Token inválido ou expirado".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_issue_and_verify() {
        let config = Config::test_config();
        let jwt_service = JwtService::new(&config.jwt_secret, 2);

        let token = jwt_service.issue(42, UserRole::Student).unwrap();
        assert!(!token.is_empty());

        let claims = jwt_service.verify(&token).unwrap();
        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.role, UserRole::Student);
    }

    #[test]
    fn test_verify_garbage_token() {
        let config = Config::test_config();
        let jwt_service = JwtService::new(&config.jwt_secret, 2);

        let result = jwt_service.verify("invalid.token.here");
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn test_verify_wrong_secret() {
        let config = Config::test_config();
        let issuer = JwtService::new(&config.jwt_secret, 2);
        let verifier = JwtService::new(&SecretString::from("another_secret".to_string()), 2);

        let token = issuer.issue(1, UserRole::Mentor).unwrap();
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn test_verify_expired_token() {
        let config = Config::test_config();
        let jwt_service = JwtService::new(&config.jwt_secret, -1);

        let token = jwt_service.issue(1, UserRole::Student).unwrap();
        assert!(jwt_service.verify(&token).is_err());
    }
}
