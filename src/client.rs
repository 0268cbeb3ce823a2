//! Cliente HTTP para la API remota de flota
//!
//! Este módulo contiene el cliente HTTP que consume la API JSON del
//! backend de reservas: listado de vehículos, listado de reservas por
//! ventana y transiciones de estado. La sesión se inyecta explícitamente
//! (ver `session`); ninguna request sale sin token vigente.
//!
//! Semántica de fallo: los errores de lectura se mapean a
//! `DataUnavailable` para que el resolver degrade a "ningún vehículo
//! disponible" (fail-closed); los de escritura a `ExternalApi`.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use crate::clients::{BookingSink, BookingSource, VehicleSource};
use crate::config::EnvironmentConfig;
use crate::dto::{ApiEnvelope, BookingDto, SubmitBookingRequest, VehicleDto};
use crate::models::{Booking, BookingStatus, DateRange, Vehicle};
use crate::session::AuthSession;
use crate::utils::errors::{AppError, AppResult};

/// Cliente HTTP de la API de flota
pub struct FleetApiClient {
    client: Client,
    base_url: String,
    session: RwLock<Option<AuthSession>>,
}

impl FleetApiClient {
    /// Crear el cliente con el timeout configurado. La sesión arranca
    /// vacía; el caller hace login contra la API y la inyecta con
    /// `set_session`.
    pub fn new(config: &EnvironmentConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::ExternalApi(format!("failed to build HTTP client: {}", e)))?;

        info!("🌐 Cliente de flota apuntando a {}", config.fleet_api_base_url);
        Ok(Self {
            client,
            base_url: config.fleet_api_base_url.trim_end_matches('/').to_string(),
            session: RwLock::new(None),
        })
    }

    /// Inyectar la sesión emitida por la API (login).
    pub async fn set_session(&self, session: AuthSession) {
        let mut guard = self.session.write().await;
        *guard = Some(session);
    }

    /// Descartar la sesión (logout). Las siguientes requests fallan con
    /// `Unauthorized` hasta un nuevo login.
    pub async fn clear_session(&self) {
        let mut guard = self.session.write().await;
        if let Some(session) = guard.take() {
            info!("👋 Sesión cerrada para '{}'", session.username);
        }
    }

    async fn auth_header(&self) -> AppResult<String> {
        let guard = self.session.read().await;
        match guard.as_ref() {
            Some(session) if !session.is_expired() => Ok(session.authorization_header()),
            Some(_) => Err(AppError::Unauthorized("session expired".to_string())),
            None => Err(AppError::Unauthorized("no active session".to_string())),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl VehicleSource for FleetApiClient {
    async fn list_vehicles(&self) -> AppResult<Vec<Vehicle>> {
        let auth = self.auth_header().await?;

        let response = self
            .client
            .get(self.url("/api/vehicles"))
            .header("Accept", "application/json")
            .header("Authorization", auth)
            .send()
            .await
            .map_err(|e| {
                warn!("❌ Fallo de red listando vehículos: {}", e);
                AppError::DataUnavailable(format!("vehicle listing: {}", e))
            })?;

        if !response.status().is_success() {
            return Err(AppError::DataUnavailable(format!(
                "vehicle listing: HTTP {}",
                response.status()
            )));
        }

        let envelope: ApiEnvelope<Vec<VehicleDto>> = response
            .json()
            .await
            .map_err(|e| AppError::DataUnavailable(format!("vehicle listing: {}", e)))?;

        envelope
            .into_data("vehicle listing")
            // Un envelope con success=false también es feed caído: el
            // resolver degrada a "ningún vehículo disponible".
            .map_err(|e| AppError::DataUnavailable(e.to_string()))?
            .into_iter()
            .map(Vehicle::try_from)
            .collect()
    }
}

#[async_trait]
impl BookingSource for FleetApiClient {
    async fn list_bookings(
        &self,
        window: DateRange,
        status: Option<BookingStatus>,
    ) -> AppResult<Vec<Booking>> {
        let auth = self.auth_header().await?;

        let mut request = self
            .client
            .get(self.url("/api/bookings"))
            .header("Accept", "application/json")
            .header("Authorization", auth)
            .query(&[
                ("start_date", window.start.to_string()),
                ("end_date", window.end.to_string()),
            ]);

        if let Some(status) = status {
            request = request.query(&[("status", status.to_string())]);
        }

        let response = request.send().await.map_err(|e| {
            warn!("❌ Fallo de red listando reservas: {}", e);
            AppError::DataUnavailable(format!("booking listing: {}", e))
        })?;

        if !response.status().is_success() {
            return Err(AppError::DataUnavailable(format!(
                "booking listing: HTTP {}",
                response.status()
            )));
        }

        let envelope: ApiEnvelope<Vec<BookingDto>> = response
            .json()
            .await
            .map_err(|e| AppError::DataUnavailable(format!("booking listing: {}", e)))?;

        envelope
            .into_data("booking listing")
            .map_err(|e| AppError::DataUnavailable(e.to_string()))?
            .into_iter()
            .map(Booking::try_from)
            .collect()
    }

    async fn get_booking(&self, id: Uuid) -> AppResult<Booking> {
        let auth = self.auth_header().await?;

        let response = self
            .client
            .get(self.url(&format!("/api/bookings/{}", id)))
            .header("Accept", "application/json")
            .header("Authorization", auth)
            .send()
            .await
            .map_err(|e| AppError::DataUnavailable(format!("get booking: {}", e)))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("booking '{}' not found", id)));
        }
        if !response.status().is_success() {
            return Err(AppError::DataUnavailable(format!(
                "get booking: HTTP {}",
                response.status()
            )));
        }

        let envelope: ApiEnvelope<BookingDto> = response
            .json()
            .await
            .map_err(|e| AppError::DataUnavailable(format!("get booking: {}", e)))?;

        Booking::try_from(envelope.into_data("get booking")?)
    }
}

#[async_trait]
impl BookingSink for FleetApiClient {
    async fn submit_booking(&self, request: SubmitBookingRequest) -> AppResult<Booking> {
        let auth = self.auth_header().await?;

        let response = self
            .client
            .post(self.url("/api/bookings"))
            .header("Accept", "application/json")
            .header("Authorization", auth)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("submit booking: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "submit booking: HTTP {}",
                response.status()
            )));
        }

        let envelope: ApiEnvelope<BookingDto> = response
            .json()
            .await
            .map_err(|e| AppError::BadResponse(format!("submit booking: {}", e)))?;

        Booking::try_from(envelope.into_data("submit booking")?)
    }

    async fn set_booking_status(&self, id: Uuid, status: BookingStatus) -> AppResult<Booking> {
        let auth = self.auth_header().await?;

        let response = self
            .client
            .put(self.url(&format!("/api/bookings/{}/status", id)))
            .header("Accept", "application/json")
            .header("Authorization", auth)
            .json(&json!({ "status": status.to_string() }))
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("set booking status: {}", e)))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("booking '{}' not found", id)));
        }
        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "set booking status: HTTP {}",
                response.status()
            )));
        }

        let envelope: ApiEnvelope<BookingDto> = response
            .json()
            .await
            .map_err(|e| AppError::BadResponse(format!("set booking status: {}", e)))?;

        Booking::try_from(envelope.into_data("set booking status")?)
    }
}
