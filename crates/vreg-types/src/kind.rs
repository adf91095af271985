//! Vehicle kind tag

use serde::{Deserialize, Serialize};

/// The closed set of vehicle variants the registry knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleKind {
    Car,
    ElectricCar,
    FlyingCar,
    SportsCar,
    Sedan,
    Suv,
}

impl VehicleKind {
    /// All kinds in menu order
    pub const ALL: [VehicleKind; 6] = [
        VehicleKind::Car,
        VehicleKind::ElectricCar,
        VehicleKind::FlyingCar,
        VehicleKind::SportsCar,
        VehicleKind::Sedan,
        VehicleKind::Suv,
    ];

    /// Map a 1-based menu selection to a kind
    pub fn from_menu_number(n: i32) -> Option<Self> {
        usize::try_from(n)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Human-readable label used in the type menu
    pub fn label(&self) -> &'static str {
        match self {
            VehicleKind::Car => "Car",
            VehicleKind::ElectricCar => "Electric Car",
            VehicleKind::FlyingCar => "Flying Car",
            VehicleKind::SportsCar => "Sports Car",
            VehicleKind::Sedan => "Sedan",
            VehicleKind::Suv => "SUV",
        }
    }

    /// Whether records of this kind carry a battery capacity
    pub fn has_battery(&self) -> bool {
        matches!(self, VehicleKind::ElectricCar | VehicleKind::SportsCar)
    }
}

impl std::fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
