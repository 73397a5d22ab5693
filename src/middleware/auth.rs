//! Middleware de autenticação JWT
//!
//! Extrai o bearer token, valida as claims e injeta o usuário autenticado
//! nas extensions da request. A verificação de papel é feita nos handlers.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::models::auth::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt;

/// Usuário autenticado injetado nas requests
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub email: String,
    pub role: UserRole,
}

impl AuthenticatedUser {
    /// Verificar se o usuário tem um dos papéis exigidos
    pub fn require_any_role(&self, allowed: &[UserRole]) -> Result<(), AppError> {
        if allowed.contains(&self.role) {
            Ok(())
        } else {
            Err(AppError::Forbidden(format!(
                "Papel {} não tem acesso a este recurso",
                self.role.as_str()
            )))
        }
    }
}

/// Middleware de autenticação JWT
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Extrair token do header Authorization
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_str| auth_str.to_str().ok())
        .and_then(|auth_str| auth_str.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("Token de autorização requerido".to_string()))?;

    let claims = jwt::validate_token(token, &state.config.jwt_secret)?;

    let role = UserRole::parse(&claims.role)
        .ok_or_else(|| AppError::Unauthorized(format!("Papel desconhecido: {}", claims.role)))?;

    let user = AuthenticatedUser {
        email: claims.sub,
        role,
    };

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_any_role_allows_listed_role() {
        let user = AuthenticatedUser {
            email: "gestor@sprig.com".to_string(),
            role: UserRole::Gestor,
        };

        assert!(user
            .require_any_role(&[UserRole::Gestor, UserRole::Tecnico])
            .is_ok());
    }

    #[test]
    fn test_require_any_role_rejects_other_role() {
        let user = AuthenticatedUser {
            email: "maria@fazenda.com".to_string(),
            role: UserRole::Agricultor,
        };

        let result = user.require_any_role(&[UserRole::Gestor, UserRole::Tecnico]);
        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }
}
