//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del componente de reservas
//! y el alias de resultado que usan los demás módulos. Ningún error se
//! reintenta internamente: todos se devuelven tipados al caller.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// Errores principales del componente de reservas
#[derive(Error, Debug)]
pub enum AppError {
    /// La fecha de fin no es estrictamente posterior a la fecha de inicio.
    /// Se rechaza en la frontera del formulario, antes de calcular solapes.
    #[error("Invalid range: end date {end} must be after start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// La aprobación violaría el invariante de no-solape para el vehículo.
    /// Incluye la reserva aprobada que entra en conflicto.
    #[error("Overlap conflict: booking {booking_id} overlaps approved booking {conflicting_booking_id}")]
    OverlapConflict {
        booking_id: Uuid,
        conflicting_booking_id: Uuid,
    },

    /// La fuente de datos remota falló o no devolvió nada. El resolver
    /// degrada a "ningún vehículo disponible" (fail-closed), nunca a un
    /// resultado optimista.
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// Estado de reserva fuera del vocabulario mapeado.
    #[error("Invalid booking status: '{0}'")]
    InvalidStatus(String),

    /// Transición de estado no permitida (p. ej. devolver una reserva
    /// que nunca fue aprobada).
    #[error("Invalid status transition: {0}")]
    InvalidTransition(String),

    /// El vehículo dejó de estar disponible entre listar y enviar el
    /// formulario.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Bad response from fleet API: {0}")]
    BadResponse(String),
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// Función helper para crear errores de fuente de datos caída
pub fn data_unavailable_error(source: &str, detail: &str) -> AppError {
    AppError::DataUnavailable(format!("{}: {}", source, detail))
}

/// Función helper para crear errores de validación de campo
pub fn validation_error(field: &'static str, message: &'static str) -> AppError {
    use validator::ValidationError;

    let mut error = ValidationError::new("custom");
    error.add_param("field".into(), &field);
    error.add_param("message".into(), &message);

    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);

    AppError::Validation(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_range_message_names_both_dates() {
        let err = AppError::InvalidRange {
            start: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
        };
        let msg = err.to_string();
        assert!(msg.contains("2025-01-10"));
        assert!(msg.contains("must be after"));
    }

    #[test]
    fn overlap_conflict_carries_conflicting_id() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let err = AppError::OverlapConflict {
            booking_id: a,
            conflicting_booking_id: b,
        };
        assert!(err.to_string().contains(&b.to_string()));
    }
}
