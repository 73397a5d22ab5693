//! Utilidades JWT
//!
//! Validação de tokens JWT com o papel do usuário embutido nas claims.
//! A emissão de tokens fica fora deste serviço.

use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::utils::errors::AppError;

/// Claims do token JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,  // email do usuário
    pub role: String, // papel: Gestor, Tecnico ou Agricultor
    pub exp: usize,   // expiration timestamp
    pub iat: usize,   // issued at timestamp
}

/// Validar token JWT e extrair as claims
pub fn validate_token(token: &str, secret: &str) -> Result<JwtClaims, AppError> {
    decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::Unauthorized("Token inválido ou expirado".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn token_for(email: &str, role: &str, secret: &str, expires_in_secs: i64) -> String {
        let now = chrono::Utc::now();
        let claims = JwtClaims {
            sub: email.to_string(),
            role: role.to_string(),
            exp: (now + chrono::Duration::seconds(expires_in_secs)).timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_ref()),
        )
        .unwrap()
    }

    #[test]
    fn test_valid_token_yields_claims() {
        let token = token_for("maria@fazenda.com", "Agricultor", "segredo-de-teste", 3600);

        let claims = validate_token(&token, "segredo-de-teste").expect("token should be valid");
        assert_eq!(claims.sub, "maria@fazenda.com");
        assert_eq!(claims.role, "Agricultor");
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = token_for("maria@fazenda.com", "Gestor", "segredo-de-teste", 3600);

        assert!(validate_token(&token, "outro-segredo").is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        // expirado há duas horas, bem além da tolerância do validador
        let token = token_for("maria@fazenda.com", "Gestor", "segredo-de-teste", -7200);

        assert!(validate_token(&token, "segredo-de-teste").is_err());
    }
}
