use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::config::jwt::JwtSettings;

/// Token claims. The subject is the account email; the account row is
/// re-resolved on every request, so the token itself carries no role data.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    pub iat: usize,
}

pub fn generate_token(
    email: &str,
    jwt_settings: &JwtSettings,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(jwt_settings.expiration_hours);

    let claims = Claims {
        sub: email.to_string(),
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_settings.secret.expose_secret().as_bytes()),
    )
}

pub fn decode_token(
    token: &str,
    jwt_settings: &JwtSettings,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_settings.secret.expose_secret().as_bytes()),
        &Validation::new(Algorithm::HS256),
    )?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(hours: i64) -> JwtSettings {
        JwtSettings::new("test-secret".to_string(), hours)
    }

    #[test]
    fn token_round_trip_preserves_subject() {
        let jwt_settings = settings(24);
        let token = generate_token("trainer@example.com", &jwt_settings).unwrap();
        let claims = decode_token(&token, &jwt_settings).unwrap();
        assert_eq!(claims.sub, "trainer@example.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn expired_token_is_rejected() {
        let jwt_settings = settings(-1);
        let token = generate_token("trainer@example.com", &jwt_settings).unwrap();
        assert!(decode_token(&token, &jwt_settings).is_err());
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = generate_token("trainer@example.com", &settings(24)).unwrap();
        let other = JwtSettings::new("other-secret".to_string(), 24);
        assert!(decode_token(&token, &other).is_err());
    }
}
