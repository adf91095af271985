//! Vehicle variant definitions
//!
//! Each variant nests the record of the variant it extends, and renders by
//! writing that record first and appending its own lines.

use std::fmt;

use serde::Serialize;
use vreg_types::VehicleKind;

/// Identity fields shared by every vehicle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommonFields {
    pub id: i32,
    pub manufacturer: String,
    pub model: String,
    pub year: i32,
}

impl CommonFields {
    pub fn new(id: i32, manufacturer: impl Into<String>, model: impl Into<String>, year: i32) -> Self {
        Self {
            id,
            manufacturer: manufacturer.into(),
            model: model.into(),
            year,
        }
    }
}

impl fmt::Display for CommonFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "ID: {}, Manufacturer: {}, Model: {}, Year: {}",
            self.id, self.manufacturer, self.model, self.year
        )
    }
}

/// Type-specific inputs for [`VehicleVariant::create`]
///
/// A kind only reads the fields it carries; the rest are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantFields {
    pub fuel_type: String,
    pub battery_capacity_kwh: i32,
    pub flight_range_km: i32,
    pub top_speed_kmh: i32,
}

impl VariantFields {
    pub fn fuel(fuel_type: impl Into<String>) -> Self {
        Self {
            fuel_type: fuel_type.into(),
            ..Default::default()
        }
    }

    pub fn with_battery(mut self, kwh: i32) -> Self {
        self.battery_capacity_kwh = kwh;
        self
    }

    pub fn with_flight_range(mut self, km: i32) -> Self {
        self.flight_range_km = km;
        self
    }

    pub fn with_top_speed(mut self, kmh: i32) -> Self {
        self.top_speed_kmh = kmh;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Car {
    #[serde(flatten)]
    pub common: CommonFields,
    pub fuel_type: String,
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.common)?;
        writeln!(f, "Fuel Type: {}", self.fuel_type)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElectricCar {
    #[serde(flatten)]
    pub car: Car,
    pub battery_capacity_kwh: i32,
}

impl fmt::Display for ElectricCar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.car)?;
        writeln!(f, "Battery Capacity: {} kWh", self.battery_capacity_kwh)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlyingCar {
    #[serde(flatten)]
    pub car: Car,
    pub flight_range_km: i32,
}

impl fmt::Display for FlyingCar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.car)?;
        writeln!(f, "Flight Range: {} km", self.flight_range_km)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SportsCar {
    #[serde(flatten)]
    pub electric: ElectricCar,
    pub top_speed_kmh: i32,
}

impl fmt::Display for SportsCar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.electric)?;
        writeln!(f, "Top Speed: {} km/h", self.top_speed_kmh)
    }
}

/// A vehicle record of one concrete kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VehicleVariant {
    Car(Car),
    ElectricCar(ElectricCar),
    FlyingCar(FlyingCar),
    SportsCar(SportsCar),
    Sedan(Car),
    Suv(Car),
}

impl VehicleVariant {
    /// Build a record of the given kind. Never fails.
    pub fn create(kind: VehicleKind, common: CommonFields, fields: VariantFields) -> Self {
        let car = Car {
            common,
            fuel_type: fields.fuel_type,
        };

        match kind {
            VehicleKind::Car => VehicleVariant::Car(car),
            VehicleKind::ElectricCar => VehicleVariant::ElectricCar(ElectricCar {
                car,
                battery_capacity_kwh: fields.battery_capacity_kwh,
            }),
            VehicleKind::FlyingCar => VehicleVariant::FlyingCar(FlyingCar {
                car,
                flight_range_km: fields.flight_range_km,
            }),
            VehicleKind::SportsCar => VehicleVariant::SportsCar(SportsCar {
                electric: ElectricCar {
                    car,
                    battery_capacity_kwh: fields.battery_capacity_kwh,
                },
                top_speed_kmh: fields.top_speed_kmh,
            }),
            VehicleKind::Sedan => VehicleVariant::Sedan(car),
            VehicleKind::Suv => VehicleVariant::Suv(car),
        }
    }

    pub fn kind(&self) -> VehicleKind {
        match self {
            VehicleVariant::Car(_) => VehicleKind::Car,
            VehicleVariant::ElectricCar(_) => VehicleKind::ElectricCar,
            VehicleVariant::FlyingCar(_) => VehicleKind::FlyingCar,
            VehicleVariant::SportsCar(_) => VehicleKind::SportsCar,
            VehicleVariant::Sedan(_) => VehicleKind::Sedan,
            VehicleVariant::Suv(_) => VehicleKind::Suv,
        }
    }

    /// The car record every variant is built on
    pub fn car(&self) -> &Car {
        match self {
            VehicleVariant::Car(car) | VehicleVariant::Sedan(car) | VehicleVariant::Suv(car) => car,
            VehicleVariant::ElectricCar(e) => &e.car,
            VehicleVariant::FlyingCar(fc) => &fc.car,
            VehicleVariant::SportsCar(s) => &s.electric.car,
        }
    }

    pub fn common(&self) -> &CommonFields {
        &self.car().common
    }

    pub fn id(&self) -> i32 {
        self.common().id
    }

    pub fn fuel_type(&self) -> &str {
        &self.car().fuel_type
    }

    /// Multi-line description, one `\n`-terminated line per field group
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for VehicleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleVariant::Car(car) => write!(f, "{}", car),
            VehicleVariant::ElectricCar(e) => write!(f, "{}", e),
            VehicleVariant::FlyingCar(fc) => write!(f, "{}", fc),
            VehicleVariant::SportsCar(s) => write!(f, "{}", s),
            VehicleVariant::Sedan(car) => write!(f, "Sedan - {}", car),
            VehicleVariant::Suv(car) => write!(f, "SUV - {}", car),
        }
    }
}
