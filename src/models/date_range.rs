//! Rango de fechas inclusivo
//!
//! Este módulo define el tipo `DateRange` y el predicado `overlaps`,
//! la única implementación del test de solape en todo el crate.
//! Disponibilidad, guardia de aprobación y calendario delegan aquí;
//! nunca se duplica la comparación en los call sites.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::utils::errors::{AppError, AppResult};

/// Rango de fechas de calendario, ambos extremos inclusivos.
/// Sin granularidad de hora: una reserva ocupa días completos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Crear un rango validado: `end` debe ser estrictamente posterior a
    /// `start`. La frontera del formulario rechaza con `InvalidRange`
    /// antes de que se ejecute ningún cálculo de solape.
    pub fn new(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        if end <= start {
            return Err(AppError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Rango de un solo día, para el resaltado de calendario. No pasa por
    /// la validación estricta: un día consigo mismo es un rango bien
    /// formado para el predicado de solape.
    pub fn single_day(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// Predicado de solape inclusivo: `[s1,e1]` y `[s2,e2]` se solapan
    /// si `s1 <= e2 && s2 <= e1`. Compartir un único día de frontera
    /// cuenta como solape.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// True si el rango contiene el día dado.
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.overlaps(&DateRange::single_day(day))
    }

    /// Cantidad de días de calendario ocupados (inclusivo).
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Rango expandido `months` meses hacia cada lado, la ventana que se
    /// pide a la API remota al consultar un mes visible. Aproximación de
    /// 31 días por mes; la API remota es quien acota de verdad.
    pub fn widened_by_months(&self, months: u32) -> Self {
        let pad = Duration::days(31 * months as i64);
        Self {
            start: self.start - pad,
            end: self.end + pad,
        }
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}..{}]", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn range(s: (i32, u32, u32), e: (i32, u32, u32)) -> DateRange {
        DateRange::new(date(s.0, s.1, s.2), date(e.0, e.1, e.2)).unwrap()
    }

    #[test]
    fn end_must_be_strictly_after_start() {
        let day = date(2025, 1, 10);
        assert!(matches!(
            DateRange::new(day, day),
            Err(AppError::InvalidRange { .. })
        ));
        assert!(DateRange::new(day, date(2025, 1, 9)).is_err());
        assert!(DateRange::new(day, date(2025, 1, 11)).is_ok());
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = range((2025, 1, 10), (2025, 1, 12));
        let b = range((2025, 1, 12), (2025, 1, 14));
        let c = range((2025, 1, 13), (2025, 1, 15));
        assert_eq!(a.overlaps(&b), b.overlaps(&a));
        assert_eq!(a.overlaps(&c), c.overlaps(&a));
    }

    #[test]
    fn range_overlaps_itself() {
        let a = range((2025, 1, 10), (2025, 1, 12));
        assert!(a.overlaps(&a));
        let single = DateRange::single_day(date(2025, 1, 10));
        assert!(single.overlaps(&single));
    }

    #[test]
    fn adjacent_ranges_do_not_overlap() {
        // [2025-01-10..2025-01-12] vs [2025-01-13..2025-01-15]
        let a = range((2025, 1, 10), (2025, 1, 12));
        let b = range((2025, 1, 13), (2025, 1, 15));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn shared_boundary_day_counts_as_overlap() {
        // Comparten el día 2025-01-12: semántica inclusiva.
        let a = range((2025, 1, 10), (2025, 1, 12));
        let b = range((2025, 1, 12), (2025, 1, 14));
        assert!(a.overlaps(&b));
    }

    #[test]
    fn contains_covers_both_endpoints() {
        let a = range((2025, 1, 10), (2025, 1, 12));
        assert!(a.contains(date(2025, 1, 10)));
        assert!(a.contains(date(2025, 1, 11)));
        assert!(a.contains(date(2025, 1, 12)));
        assert!(!a.contains(date(2025, 1, 13)));
        assert!(!a.contains(date(2025, 1, 9)));
    }

    #[test]
    fn num_days_is_inclusive() {
        let a = range((2025, 1, 10), (2025, 1, 12));
        assert_eq!(a.num_days(), 3);
    }

    #[test]
    fn widened_window_contains_original() {
        let a = range((2025, 6, 10), (2025, 6, 12));
        let window = a.widened_by_months(1);
        assert!(window.start < a.start);
        assert!(window.end > a.end);
        assert!(window.overlaps(&a));
    }
}
