//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno: URL base de la API
//! remota de flota, timeout de requests y ancho de la ventana de consulta
//! de reservas.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    /// URL base de la API remota de flota
    pub fleet_api_base_url: String,
    /// Timeout de cada request HTTP, en segundos
    pub request_timeout_secs: u64,
    /// Meses que se amplía la ventana de reservas a cada lado del rango
    /// consultado. La API remota es quien pagina de verdad.
    pub booking_window_months: u32,
}

impl EnvironmentConfig {
    /// Cargar la configuración desde variables de entorno, con soporte
    /// para un archivo `.env` local.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            fleet_api_base_url: env::var("FLEET_API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            request_timeout_secs: env::var("FLEET_API_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            booking_window_months: env::var("BOOKING_WINDOW_MONTHS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1),
        }
    }
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
