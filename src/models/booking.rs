//! Modelo de Booking
//!
//! Este módulo contiene el struct Booking (peminjaman) y la enumeración
//! canónica de estados. La API remota mezcla dos vocabularios de estado
//! ("menunggu/disetujui/ditolak/dikembalikan" en los módulos antiguos,
//! "pending/approved/rejected/terbit" en los nuevos); aquí se define un
//! único mapeo explícito y cualquier string fuera de él es un error,
//! nunca se infiere.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::date_range::DateRange;
use crate::utils::errors::AppError;

/// Estado canónico de una reserva
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Solicitud enviada, pendiente de aprobación. No bloquea el vehículo.
    Pending,
    /// Aprobada por un administrador. El único estado que bloquea.
    Approved,
    /// Rechazada. No bloquea el vehículo.
    Rejected,
    /// Vehículo devuelto tras pasar la fecha de fin. Ya no bloquea.
    Returned,
}

impl BookingStatus {
    /// True solo para `Approved`: el único estado que participa en el
    /// cálculo de solape y disponibilidad.
    pub fn blocks_vehicle(&self) -> bool {
        matches!(self, BookingStatus::Approved)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Approved => "approved",
            BookingStatus::Rejected => "rejected",
            BookingStatus::Returned => "returned",
        }
    }
}

impl FromStr for BookingStatus {
    type Err = AppError;

    /// Mapeo único de ambos vocabularios de la API. "terbit" (surat de
    /// préstamo emitido) implica que el admin ya firmó, así que mapea a
    /// `Approved`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" | "menunggu" => Ok(BookingStatus::Pending),
            "approved" | "disetujui" | "terbit" => Ok(BookingStatus::Approved),
            "rejected" | "ditolak" => Ok(BookingStatus::Rejected),
            "returned" | "dikembalikan" => Ok(BookingStatus::Returned),
            other => Err(AppError::InvalidStatus(other.to_string())),
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reserva de vehículo para un rango de fechas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub requester_name: String,
    /// Número de empleado del solicitante
    pub requester_id: String,
    /// Unidad organizacional del solicitante
    pub unit: String,
    pub vehicle_id: Uuid,
    pub range: DateRange,
    pub purpose: String,
    pub status: BookingStatus,
}

impl Booking {
    /// Crear una solicitud nueva, siempre en estado `Pending`.
    pub fn new_pending(
        requester_name: impl Into<String>,
        requester_id: impl Into<String>,
        unit: impl Into<String>,
        vehicle_id: Uuid,
        range: DateRange,
        purpose: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            requester_name: requester_name.into(),
            requester_id: requester_id.into(),
            unit: unit.into(),
            vehicle_id,
            range,
            purpose: purpose.into(),
            status: BookingStatus::Pending,
        }
    }

    /// True si esta reserva bloquea el vehículo frente a otro rango.
    pub fn blocks(&self, range: &DateRange) -> bool {
        self.status.blocks_vehicle() && self.range.overlaps(range)
    }
}
