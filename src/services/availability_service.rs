//! Resolver de disponibilidad
//!
//! Este módulo responde "¿qué vehículos están libres para [start, end]?"
//! y "¿está libre el vehículo V?". Son filtros puros y síncronos sobre
//! colecciones ya materializadas en memoria; la API remota es quien acota
//! la ventana de consulta. A la escala de la flota (decenas de vehículos,
//! cientos de reservas) un escaneo lineal es suficiente y auditable; si
//! algún día creciera, el upgrade natural sería una lista de intervalos
//! ordenada por vehículo o un interval tree.
//!
//! La validación del rango (fin estrictamente posterior al inicio) es
//! responsabilidad del caller en la frontera del formulario; aquí los
//! rangos llegan ya construidos vía `DateRange::new`.

use tracing::debug;
use uuid::Uuid;

use crate::models::{Booking, DateRange, Vehicle};

/// Subconjunto de vehículos sin ninguna reserva aprobada que solape
/// `range`. Función pura: mismas entradas, mismo resultado.
pub fn query_available_vehicles(
    vehicles: &[Vehicle],
    bookings: &[Booking],
    range: &DateRange,
) -> Vec<Vehicle> {
    let available: Vec<Vehicle> = vehicles
        .iter()
        .filter(|v| is_vehicle_available(v.id, bookings, range))
        .cloned()
        .collect();

    debug!(
        "🚗 Disponibilidad para {}: {}/{} vehículos libres",
        range,
        available.len(),
        vehicles.len()
    );
    available
}

/// True si ninguna reserva aprobada del vehículo solapa `range`.
/// Se usa para poblar la lista de selección y se vuelve a ejecutar en el
/// momento del submit, para cerrar la ventana entre listar y enviar.
/// Las reservas no aprobadas se ignoran aunque el caller no haya
/// pre-filtrado.
pub fn is_vehicle_available(vehicle_id: Uuid, bookings: &[Booking], range: &DateRange) -> bool {
    !bookings
        .iter()
        .any(|b| b.vehicle_id == vehicle_id && b.blocks(range))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookingStatus;
    use chrono::NaiveDate;

    fn range(s: u32, e: u32) -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2025, 1, s).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, e).unwrap(),
        )
        .unwrap()
    }

    fn booking(vehicle_id: Uuid, r: DateRange, status: BookingStatus) -> Booking {
        let mut b = Booking::new_pending("Siti", "199001", "Sekretariat", vehicle_id, r, "rapat");
        b.status = status;
        b
    }

    fn fleet() -> Vec<Vehicle> {
        vec![
            Vehicle::new("Innova 1", "B 1234 ABC", "minibus", 7, "bensin"),
            Vehicle::new("Hiace", "B 5678 DEF", "bus", 15, "solar"),
        ]
    }

    #[test]
    fn vehicle_with_overlapping_approved_booking_is_not_listed() {
        let vehicles = fleet();
        let bookings = vec![booking(vehicles[0].id, range(10, 12), BookingStatus::Approved)];

        // Comparte el día de frontera 12: solape inclusivo.
        let available = query_available_vehicles(&vehicles, &bookings, &range(12, 14));
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].id, vehicles[1].id);
    }

    #[test]
    fn adjacent_booking_leaves_vehicle_available() {
        let vehicles = fleet();
        let bookings = vec![booking(vehicles[0].id, range(10, 12), BookingStatus::Approved)];

        let available = query_available_vehicles(&vehicles, &bookings, &range(13, 15));
        assert_eq!(available.len(), 2);
    }

    #[test]
    fn pending_and_rejected_bookings_do_not_block() {
        let vehicles = fleet();
        let bookings = vec![
            booking(vehicles[0].id, range(10, 12), BookingStatus::Pending),
            booking(vehicles[0].id, range(10, 12), BookingStatus::Rejected),
            booking(vehicles[0].id, range(10, 12), BookingStatus::Returned),
        ];

        assert!(is_vehicle_available(vehicles[0].id, &bookings, &range(11, 13)));
    }

    #[test]
    fn bookings_for_other_vehicles_are_ignored() {
        let vehicles = fleet();
        let bookings = vec![booking(vehicles[1].id, range(10, 12), BookingStatus::Approved)];

        assert!(is_vehicle_available(vehicles[0].id, &bookings, &range(10, 12)));
        assert!(!is_vehicle_available(vehicles[1].id, &bookings, &range(10, 12)));
    }

    #[test]
    fn query_is_idempotent() {
        let vehicles = fleet();
        let bookings = vec![booking(vehicles[0].id, range(10, 12), BookingStatus::Approved)];
        let r = range(11, 13);

        let first = query_available_vehicles(&vehicles, &bookings, &r);
        let second = query_available_vehicles(&vehicles, &bookings, &r);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_fleet_yields_empty_result() {
        let available = query_available_vehicles(&[], &[], &range(10, 12));
        assert!(available.is_empty());
    }
}
