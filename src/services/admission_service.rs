//! Guardia de admisión de aprobaciones
//!
//! Este módulo decide si una reserva puede pasar a `Approved`. La guardia
//! se ejecuta en cada intento de aprobación contra el conjunto aprobado
//! *actual* del vehículo, no contra el que existía cuando se envió el
//! formulario: entre medias otro admin pudo aprobar una reserva en
//! conflicto. Aprobar en cualquier orden nunca debe dejar dos reservas
//! aprobadas solapadas para el mismo vehículo.
//!
//! La serialización de aprobaciones concurrentes sobre el mismo vehículo
//! es responsabilidad de la API remota (lock o transacción en su capa de
//! datos); este módulo solo aporta el predicado.

use tracing::{debug, warn};
use uuid::Uuid;

use crate::models::Booking;

/// Decisión de la guardia de admisión
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdmissionDecision {
    /// La aprobación no viola el invariante de no-solape.
    Admit,
    /// La aprobación crearía dos reservas aprobadas solapadas.
    Reject { conflicting_booking_id: Uuid },
}

impl AdmissionDecision {
    pub fn is_admitted(&self) -> bool {
        matches!(self, AdmissionDecision::Admit)
    }
}

/// Evaluar si `candidate` puede aprobarse dado el conjunto aprobado actual
/// del mismo vehículo. Ignora reservas de otros vehículos, reservas no
/// aprobadas y la propia reserva candidata (re-aprobar es idempotente).
pub fn can_approve(candidate: &Booking, current_bookings: &[Booking]) -> AdmissionDecision {
    let conflict = current_bookings.iter().find(|existing| {
        existing.id != candidate.id
            && existing.vehicle_id == candidate.vehicle_id
            && existing.blocks(&candidate.range)
    });

    match conflict {
        Some(existing) => {
            warn!(
                "⛔ Aprobación rechazada: {} solapa la reserva aprobada {} del vehículo {}",
                candidate.range, existing.id, candidate.vehicle_id
            );
            AdmissionDecision::Reject {
                conflicting_booking_id: existing.id,
            }
        }
        None => {
            debug!(
                "✅ Reserva {} admitida para el vehículo {} en {}",
                candidate.id, candidate.vehicle_id, candidate.range
            );
            AdmissionDecision::Admit
        }
    }
}
