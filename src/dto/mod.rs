//! DTOs de la API remota de flota
//!
//! Este módulo contiene las formas de wire de la API remota y su
//! conversión a modelos de dominio. El vocabulario de estados se parsea
//! solo aquí.

pub mod booking_dto;
pub mod vehicle_dto;

pub use booking_dto::{ApiEnvelope, BookingDto, SubmitBookingRequest};
pub use vehicle_dto::VehicleDto;
