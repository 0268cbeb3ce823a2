//! DTOs de reservas
//!
//! Las fechas viajan como fechas ISO y el estado como string; el parseo de
//! vocabulario de estados sucede exclusivamente aquí, en la conversión
//! DTO → modelo. El resto del crate solo ve `BookingStatus`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{Booking, BookingStatus, DateRange};
use crate::utils::errors::AppError;
use crate::utils::validation::validate_booking_dates;

// Reserva tal y como la sirve la API remota
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDto {
    pub id: String,
    pub requester_name: String,
    pub requester_id: String,
    pub unit: String,
    pub vehicle_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub purpose: String,
    pub status: String,
}

/// Request de creación de reserva que se envía a la API remota
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_submit_dates"))]
pub struct SubmitBookingRequest {
    #[validate(length(min = 3, max = 100))]
    pub requester_name: String,

    #[validate(length(min = 3, max = 30))]
    pub requester_id: String,

    #[validate(length(min = 2, max = 100))]
    pub unit: String,

    pub vehicle_id: Uuid,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    #[validate(length(min = 5, max = 500))]
    pub purpose: String,
}

fn validate_submit_dates(req: &SubmitBookingRequest) -> Result<(), validator::ValidationError> {
    validate_booking_dates(req.start_date, req.end_date)
}

impl SubmitBookingRequest {
    /// Rango validado del formulario. `DateRange::new` repite la regla de
    /// orden estricto y devuelve `InvalidRange` tipado para el caller.
    pub fn range(&self) -> Result<DateRange, AppError> {
        DateRange::new(self.start_date, self.end_date)
    }
}

impl TryFrom<BookingDto> for Booking {
    type Error = AppError;

    fn try_from(dto: BookingDto) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&dto.id)
            .map_err(|_| AppError::BadResponse(format!("invalid booking id '{}'", dto.id)))?;
        let vehicle_id = Uuid::parse_str(&dto.vehicle_id).map_err(|_| {
            AppError::BadResponse(format!("invalid vehicle id '{}'", dto.vehicle_id))
        })?;
        let status: BookingStatus = dto.status.parse()?;
        let range = DateRange::new(dto.start_date, dto.end_date)?;

        Ok(Booking {
            id,
            requester_name: dto.requester_name,
            requester_id: dto.requester_id,
            unit: dto.unit,
            vehicle_id,
            range,
            purpose: dto.purpose,
            status,
        })
    }
}

impl From<Booking> for BookingDto {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id.to_string(),
            requester_name: booking.requester_name,
            requester_id: booking.requester_id,
            unit: booking.unit,
            vehicle_id: booking.vehicle_id.to_string(),
            start_date: booking.range.start,
            end_date: booking.range.end,
            purpose: booking.purpose,
            status: booking.status.to_string(),
        }
    }
}

// Envelope genérico de la API remota
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Extraer los datos del envelope o convertir el fallo declarado por
    /// la API en un error tipado.
    pub fn into_data(self, context: &str) -> Result<T, AppError> {
        if !self.success {
            return Err(AppError::ExternalApi(format!(
                "{}: {}",
                context,
                self.message.unwrap_or_else(|| "unknown error".to_string())
            )));
        }
        self.data
            .ok_or_else(|| AppError::BadResponse(format!("{}: missing data field", context)))
    }
}
