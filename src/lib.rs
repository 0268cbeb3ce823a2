//! 🚙 Fleet Booking — núcleo de disponibilidad y reservas de flota
//!
//! Componente de dominio del portal institucional de préstamo de
//! vehículos. Dada la flota y el conjunto de reservas existentes,
//! resuelve qué vehículos están libres para un rango de fechas y hace
//! cumplir el invariante de no-solape: por vehículo, nunca dos reservas
//! aprobadas con rangos solapados.
//!
//! La persistencia y la serialización de aprobaciones concurrentes viven
//! en la API remota (ver `clients`); este crate es la capa que consume la
//! UI: cliente HTTP con sesión explícita, DTOs con mapeo de vocabulario
//! de estados, y los servicios puros de disponibilidad, admisión y
//! calendario, todos sobre un único predicado de solape.

pub mod client;
pub mod clients;
pub mod config;
pub mod controllers;
pub mod dto;
pub mod models;
pub mod services;
pub mod session;
pub mod utils;

pub use client::FleetApiClient;
pub use config::EnvironmentConfig;
pub use controllers::{BookingController, FleetController};
pub use models::{Booking, BookingStatus, DateRange, Vehicle};
pub use services::{can_approve, is_vehicle_available, query_available_vehicles, AdmissionDecision};
pub use session::AuthSession;
pub use utils::errors::{AppError, AppResult};
