//! Modelos del sistema
//!
//! Este módulo contiene los modelos de dominio del componente de reservas:
//! vehículos, reservas (peminjaman) y rangos de fechas.

pub mod booking;
pub mod date_range;
pub mod vehicle;

pub use booking::{Booking, BookingStatus};
pub use date_range::DateRange;
pub use vehicle::Vehicle;
