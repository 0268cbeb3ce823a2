use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Vehicle;
use crate::utils::errors::AppError;

// Vehículo tal y como lo sirve la API remota de flota
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleDto {
    pub id: String,
    pub name: String,
    pub license_plate: String,
    pub category: String,
    pub capacity: i32,
    pub fuel_type: String,
}

impl TryFrom<VehicleDto> for Vehicle {
    type Error = AppError;

    fn try_from(dto: VehicleDto) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&dto.id)
            .map_err(|_| AppError::BadResponse(format!("invalid vehicle id '{}'", dto.id)))?;
        Ok(Vehicle {
            id,
            name: dto.name,
            license_plate: dto.license_plate,
            category: dto.category,
            capacity: dto.capacity,
            fuel_type: dto.fuel_type,
        })
    }
}

impl From<Vehicle> for VehicleDto {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id.to_string(),
            name: vehicle.name,
            license_plate: vehicle.license_plate,
            category: vehicle.category,
            capacity: vehicle.capacity,
            fuel_type: vehicle.fuel_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_vehicle_id_is_a_bad_response() {
        let dto = VehicleDto {
            id: "not-a-uuid".to_string(),
            name: "Avanza".to_string(),
            license_plate: "B 1111 XYZ".to_string(),
            category: "mpv".to_string(),
            capacity: 7,
            fuel_type: "bensin".to_string(),
        };
        assert!(matches!(
            Vehicle::try_from(dto),
            Err(AppError::BadResponse(_))
        ));
    }
}
