//! Interfaces hacia la fuente de datos de flota
//!
//! Este módulo define los seams que consumen los controllers: listado de
//! vehículos, listado de reservas por ventana y el sink de transiciones
//! de estado. `FleetApiClient` los implementa sobre HTTP; los tests de
//! integración los implementan en memoria.

use async_trait::async_trait;
use uuid::Uuid;

use crate::dto::SubmitBookingRequest;
use crate::models::{Booking, BookingStatus, DateRange, Vehicle};
use crate::utils::errors::AppResult;

/// Fuente de vehículos de la flota
#[async_trait]
pub trait VehicleSource: Send + Sync {
    async fn list_vehicles(&self) -> AppResult<Vec<Vehicle>>;
}

/// Fuente de reservas, consultable por ventana de fechas y filtrable por
/// estado. El alcance real de la ventana lo decide la API remota.
#[async_trait]
pub trait BookingSource: Send + Sync {
    async fn list_bookings(
        &self,
        window: DateRange,
        status: Option<BookingStatus>,
    ) -> AppResult<Vec<Booking>>;

    async fn get_booking(&self, id: Uuid) -> AppResult<Booking>;
}

/// Sink de escritura de reservas. La API remota DEBE aplicar la guardia
/// de admisión de forma atómica respecto a otras aprobaciones
/// concurrentes del mismo vehículo (lock o transacción en su capa de
/// datos); este crate solo aporta el predicado.
#[async_trait]
pub trait BookingSink: Send + Sync {
    async fn submit_booking(&self, request: SubmitBookingRequest) -> AppResult<Booking>;

    async fn set_booking_status(&self, id: Uuid, status: BookingStatus) -> AppResult<Booking>;
}

/// Fuente de datos completa que necesitan los controllers
pub trait FleetDataSource: VehicleSource + BookingSource + BookingSink {}

impl<T> FleetDataSource for T where T: VehicleSource + BookingSource + BookingSink {}
