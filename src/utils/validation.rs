//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos en la frontera de formularios.

use chrono::NaiveDate;
use uuid::Uuid;
use validator::ValidationError;

/// Validar y convertir string a UUID
pub fn validate_uuid(value: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(value).map_err(|_| {
        let mut error = ValidationError::new("uuid");
        error.add_param("value".into(), &value.to_string());
        error
    })
}

/// Validar y convertir string a fecha
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que la fecha de fin sea estrictamente posterior a la de inicio.
/// La misma regla que aplica `DateRange::new`; aquí en forma de
/// `ValidationError` para los formularios con derive de validator.
pub fn validate_booking_dates(start: NaiveDate, end: NaiveDate) -> Result<(), ValidationError> {
    if end <= start {
        let mut error = ValidationError::new("date_order");
        error.add_param("start".into(), &start.to_string());
        error.add_param("end".into(), &end.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_parsing_accepts_iso_dates() {
        assert_eq!(
            validate_date("2025-01-10").unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
        );
        assert!(validate_date("10/01/2025").is_err());
    }

    #[test]
    fn equal_dates_are_rejected() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert!(validate_booking_dates(day, day).is_err());
    }

    #[test]
    fn later_end_is_accepted() {
        let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
        assert!(validate_booking_dates(start, end).is_ok());
    }
}
