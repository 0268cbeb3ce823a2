//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle de la flota institucional.
//! Los vehículos los administra la API remota; desde este componente
//! son de solo lectura y la disponibilidad se deriva, nunca se almacena.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Vehículo de la flota
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: Uuid,
    pub name: String,
    pub license_plate: String,
    pub category: String,
    pub capacity: i32,
    pub fuel_type: String,
}

impl Vehicle {
    pub fn new(
        name: impl Into<String>,
        license_plate: impl Into<String>,
        category: impl Into<String>,
        capacity: i32,
        fuel_type: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            license_plate: license_plate.into(),
            category: category.into(),
            capacity,
            fuel_type: fuel_type.into(),
        }
    }
}
