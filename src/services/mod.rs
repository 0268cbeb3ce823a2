//! Services module
//!
//! Este módulo contiene la lógica de negocio del componente de reservas.
//! Los tres servicios son funciones puras que delegan en el único
//! predicado de solape de `models::date_range`.

pub mod admission_service;
pub mod availability_service;
pub mod calendar_service;

pub use admission_service::{can_approve, AdmissionDecision};
pub use availability_service::{is_vehicle_available, query_available_vehicles};
pub use calendar_service::{blocked_days_for_vehicle, vehicles_blocked_on};
