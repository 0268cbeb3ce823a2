//! Resaltado de calendario
//!
//! Este módulo calcula los días bloqueados que pintan las vistas de
//! calendario del portal. Delegan en el mismo predicado `overlaps` que la
//! disponibilidad y la guardia de aprobación: un día de frontera que
//! bloquea el formulario también se pinta bloqueado en el calendario.

use chrono::{Datelike, Duration, NaiveDate};
use uuid::Uuid;

use crate::models::{Booking, DateRange};

/// Días de `month` (cualquier día dentro del mes sirve de ancla) en los
/// que el vehículo tiene una reserva aprobada.
pub fn blocked_days_for_vehicle(
    vehicle_id: Uuid,
    bookings: &[Booking],
    month: NaiveDate,
) -> Vec<NaiveDate> {
    days_of_month(month)
        .filter(|day| {
            bookings
                .iter()
                .any(|b| b.vehicle_id == vehicle_id && b.blocks(&DateRange::single_day(*day)))
        })
        .collect()
}

/// Ids de vehículos con alguna reserva aprobada que cubra `day`.
pub fn vehicles_blocked_on(bookings: &[Booking], day: NaiveDate) -> Vec<Uuid> {
    let single = DateRange::single_day(day);
    let mut blocked: Vec<Uuid> = bookings
        .iter()
        .filter(|b| b.blocks(&single))
        .map(|b| b.vehicle_id)
        .collect();
    blocked.sort();
    blocked.dedup();
    blocked
}

/// Iterador sobre todos los días del mes que contiene a `anchor`.
fn days_of_month(anchor: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let first = anchor.with_day(1).unwrap_or(anchor);
    let mut day = first;
    std::iter::from_fn(move || {
        if day.month() == first.month() {
            let current = day;
            day = day + Duration::days(1);
            Some(current)
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Booking, BookingStatus};

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    fn approved(vehicle_id: Uuid, start: NaiveDate, end: NaiveDate) -> Booking {
        let range = DateRange::new(start, end).unwrap();
        let mut b = Booking::new_pending("Dewi", "200103", "Humas", vehicle_id, range, "acara");
        b.status = BookingStatus::Approved;
        b
    }

    #[test]
    fn blocked_days_cover_the_whole_inclusive_range() {
        let vehicle = Uuid::new_v4();
        let bookings = vec![approved(vehicle, date(1, 10), date(1, 12))];

        let blocked = blocked_days_for_vehicle(vehicle, &bookings, date(1, 1));
        assert_eq!(blocked, vec![date(1, 10), date(1, 11), date(1, 12)]);
    }

    #[test]
    fn pending_bookings_paint_nothing() {
        let vehicle = Uuid::new_v4();
        let range = DateRange::new(date(1, 10), date(1, 12)).unwrap();
        let bookings = vec![Booking::new_pending(
            "Dewi", "200103", "Humas", vehicle, range, "acara",
        )];

        assert!(blocked_days_for_vehicle(vehicle, &bookings, date(1, 1)).is_empty());
    }

    #[test]
    fn booking_spanning_months_only_paints_days_inside_the_month() {
        let vehicle = Uuid::new_v4();
        let bookings = vec![approved(vehicle, date(1, 30), date(2, 2))];

        let january = blocked_days_for_vehicle(vehicle, &bookings, date(1, 15));
        assert_eq!(january, vec![date(1, 30), date(1, 31)]);

        let february = blocked_days_for_vehicle(vehicle, &bookings, date(2, 15));
        assert_eq!(february, vec![date(2, 1), date(2, 2)]);
    }

    #[test]
    fn vehicles_blocked_on_a_day_dedups_per_vehicle() {
        let v1 = Uuid::new_v4();
        let v2 = Uuid::new_v4();
        let bookings = vec![
            approved(v1, date(1, 10), date(1, 12)),
            approved(v1, date(1, 13), date(1, 14)),
            approved(v2, date(1, 10), date(1, 11)),
        ];

        let blocked = vehicles_blocked_on(&bookings, date(1, 11));
        assert_eq!(blocked.len(), 2);
        assert!(blocked.contains(&v1));
        assert!(blocked.contains(&v2));

        assert_eq!(vehicles_blocked_on(&bookings, date(1, 13)), vec![v1]);

        assert!(vehicles_blocked_on(&bookings, date(1, 15)).is_empty());
    }
}
