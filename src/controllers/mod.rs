//! Controllers del componente de reservas
//!
//! Orquestación entre la fuente de datos remota y los servicios puros.

pub mod booking_controller;
pub mod fleet_controller;

pub use booking_controller::BookingController;
pub use fleet_controller::FleetController;
