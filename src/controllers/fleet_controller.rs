//! Controller de flota
//!
//! Orquesta las consultas de solo lectura que alimentan la UI: listado de
//! vehículos, disponibilidad para un rango y vista de calendario. Todas
//! las lecturas son fail-closed: si el feed remoto falla, se devuelve
//! `DataUnavailable` y ningún vehículo se ofrece, nunca una lista vieja.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::warn;
use uuid::Uuid;

use crate::clients::FleetDataSource;
use crate::models::{BookingStatus, DateRange, Vehicle};
use crate::services::{availability_service, calendar_service};
use crate::utils::errors::{AppError, AppResult};

pub struct FleetController {
    source: Arc<dyn FleetDataSource>,
    /// Ancho de la ventana de consulta, en meses a cada lado.
    window_months: u32,
}

impl FleetController {
    pub fn new(source: Arc<dyn FleetDataSource>, window_months: u32) -> Self {
        Self {
            source,
            window_months,
        }
    }

    /// Listado completo de la flota.
    pub async fn list_vehicles(&self) -> AppResult<Vec<Vehicle>> {
        self.source.list_vehicles().await.map_err(fail_closed)
    }

    /// Vehículos disponibles para `range`. El rango llega ya validado por
    /// la frontera del formulario (`DateRange::new`); aquí solo se filtra.
    /// Flota y reservas se piden en paralelo a la API remota.
    pub async fn available_vehicles(&self, range: DateRange) -> AppResult<Vec<Vehicle>> {
        let (vehicles, approved) = futures::future::try_join(
            self.source.list_vehicles(),
            self.source.list_bookings(
                range.widened_by_months(self.window_months),
                Some(BookingStatus::Approved),
            ),
        )
        .await
        .map_err(fail_closed)?;

        Ok(availability_service::query_available_vehicles(
            &vehicles, &approved, &range,
        ))
    }

    /// Días bloqueados de un vehículo en el mes que contiene a `month`.
    pub async fn month_calendar(
        &self,
        vehicle_id: Uuid,
        month: NaiveDate,
    ) -> AppResult<Vec<NaiveDate>> {
        let window = DateRange::single_day(month).widened_by_months(self.window_months);
        let approved = self
            .source
            .list_bookings(window, Some(BookingStatus::Approved))
            .await
            .map_err(fail_closed)?;

        Ok(calendar_service::blocked_days_for_vehicle(
            vehicle_id, &approved, month,
        ))
    }

    /// Vehículos bloqueados en un día concreto, para la vista diaria.
    pub async fn vehicles_blocked_on(&self, day: NaiveDate) -> AppResult<Vec<Uuid>> {
        let window = DateRange::single_day(day).widened_by_months(self.window_months);
        let approved = self
            .source
            .list_bookings(window, Some(BookingStatus::Approved))
            .await
            .map_err(fail_closed)?;

        Ok(calendar_service::vehicles_blocked_on(&approved, day))
    }
}

/// Cualquier error de lectura degrada a `DataUnavailable`: preferimos no
/// ofrecer vehículos a ofrecer un resultado viejo que permita un doble
/// booking. Los errores de autenticación sí se preservan para que la UI
/// redirija al login.
fn fail_closed(err: AppError) -> AppError {
    match err {
        AppError::DataUnavailable(_) | AppError::Unauthorized(_) => err,
        other => {
            warn!("⚠️ Feed de flota degradado a fail-closed: {}", other);
            AppError::DataUnavailable(other.to_string())
        }
    }
}
