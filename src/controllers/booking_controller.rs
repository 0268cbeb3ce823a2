//! Controller de reservas
//!
//! Orquesta el ciclo de vida de una reserva: envío del formulario,
//! aprobación, rechazo y devolución. La guardia de admisión se ejecuta en
//! cada intento de aprobación contra el conjunto aprobado actual; la
//! serialización frente a aprobaciones concurrentes la aplica la API
//! remota en su capa de datos.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::clients::FleetDataSource;
use crate::dto::SubmitBookingRequest;
use crate::models::{Booking, BookingStatus};
use crate::services::{admission_service, availability_service, AdmissionDecision};
use crate::utils::errors::{AppError, AppResult};

pub struct BookingController {
    source: Arc<dyn FleetDataSource>,
    window_months: u32,
}

impl BookingController {
    pub fn new(source: Arc<dyn FleetDataSource>, window_months: u32) -> Self {
        Self {
            source,
            window_months,
        }
    }

    /// Enviar una solicitud de reserva. Valida el formulario (incluido el
    /// orden estricto de fechas) y re-comprueba la disponibilidad en el
    /// momento del submit: la lista que vio el usuario pudo quedarse
    /// vieja entre listar y enviar.
    pub async fn submit(&self, request: SubmitBookingRequest) -> AppResult<Booking> {
        request.validate()?;
        let range = request.range()?;

        let approved = self
            .source
            .list_bookings(
                range.widened_by_months(self.window_months),
                Some(BookingStatus::Approved),
            )
            .await
            .map_err(|e| AppError::DataUnavailable(e.to_string()))?;

        if !availability_service::is_vehicle_available(request.vehicle_id, &approved, &range) {
            return Err(AppError::Conflict(format!(
                "vehicle '{}' is no longer available for {}",
                request.vehicle_id, range
            )));
        }

        let booking = self.source.submit_booking(request).await?;
        info!(
            "📋 Solicitud {} registrada para el vehículo {} en {}",
            booking.id, booking.vehicle_id, booking.range
        );
        Ok(booking)
    }

    /// Aprobar una reserva. Ejecuta la guardia de admisión contra el
    /// conjunto aprobado *actual* del vehículo; si otra reserva en
    /// conflicto fue aprobada entre medias, esta se rechaza con el id de
    /// la que bloquea.
    pub async fn approve(&self, booking_id: Uuid) -> AppResult<Booking> {
        let candidate = self.source.get_booking(booking_id).await?;

        match candidate.status {
            BookingStatus::Pending | BookingStatus::Approved => {}
            other => {
                return Err(AppError::InvalidTransition(format!(
                    "cannot approve booking '{}' in status '{}'",
                    booking_id, other
                )))
            }
        }

        let current = self
            .source
            .list_bookings(
                candidate.range.widened_by_months(self.window_months),
                Some(BookingStatus::Approved),
            )
            .await?;

        match admission_service::can_approve(&candidate, &current) {
            AdmissionDecision::Admit => {
                let approved = self
                    .source
                    .set_booking_status(booking_id, BookingStatus::Approved)
                    .await?;
                info!("✅ Reserva {} aprobada", booking_id);
                Ok(approved)
            }
            AdmissionDecision::Reject {
                conflicting_booking_id,
            } => Err(AppError::OverlapConflict {
                booking_id,
                conflicting_booking_id,
            }),
        }
    }

    /// Rechazar una solicitud pendiente. Rechazar dos veces es no-op.
    pub async fn reject(&self, booking_id: Uuid) -> AppResult<Booking> {
        let booking = self.source.get_booking(booking_id).await?;

        match booking.status {
            BookingStatus::Pending => {
                self.source
                    .set_booking_status(booking_id, BookingStatus::Rejected)
                    .await
            }
            BookingStatus::Rejected => Ok(booking),
            other => Err(AppError::InvalidTransition(format!(
                "cannot reject booking '{}' in status '{}'",
                booking_id, other
            ))),
        }
    }

    /// Marcar el vehículo como devuelto. Solo desde `Approved`; marcar
    /// dos veces es no-op.
    pub async fn mark_returned(&self, booking_id: Uuid) -> AppResult<Booking> {
        let booking = self.source.get_booking(booking_id).await?;

        match booking.status {
            BookingStatus::Approved => {
                self.source
                    .set_booking_status(booking_id, BookingStatus::Returned)
                    .await
            }
            BookingStatus::Returned => Ok(booking),
            other => Err(AppError::InvalidTransition(format!(
                "cannot mark booking '{}' returned from status '{}'",
                booking_id, other
            ))),
        }
    }
}
