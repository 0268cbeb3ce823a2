//! Sesión de autenticación
//!
//! Este módulo define el objeto de sesión explícito que se inyecta en el
//! cliente HTTP. El token lo emite la API remota (el protocolo de emisión
//! no es asunto de este componente); aquí solo se guarda como valor opaco
//! con su expiración y un ciclo de vida explícito de login/logout, en
//! lugar de leerse de forma ambiental dentro de la lógica de negocio.

use chrono::{DateTime, Duration, Utc};
use tracing::info;

/// Sesión autenticada contra la API remota de flota
#[derive(Clone, Debug)]
pub struct AuthSession {
    pub token: String,
    pub username: String,
    pub unit: String,
    pub expires_at: DateTime<Utc>,
}

impl AuthSession {
    pub fn new(token: String, username: String, unit: String, expires_in_hours: i64) -> Self {
        info!("🔑 Sesión iniciada para '{}' ({})", username, unit);
        Self {
            token,
            username,
            unit,
            expires_at: Utc::now() + Duration::hours(expires_in_hours),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Valor del header Authorization para las requests a la API.
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_is_not_expired() {
        let session = AuthSession::new(
            "token-abc".to_string(),
            "budi".to_string(),
            "Bagian Umum".to_string(),
            8,
        );
        assert!(!session.is_expired());
        assert_eq!(session.authorization_header(), "Bearer token-abc");
    }

    #[test]
    fn session_with_negative_ttl_is_expired() {
        let session = AuthSession::new(
            "token-abc".to_string(),
            "budi".to_string(),
            "Bagian Umum".to_string(),
            -1,
        );
        assert!(session.is_expired());
    }
}
