//! Vehicle registry domain
//!
//! The variant model and the ordered in-memory registry that owns it.

pub mod model;
pub mod registry;

pub use model::{Car, CommonFields, ElectricCar, FlyingCar, SportsCar, VariantFields, VehicleVariant};
pub use registry::{VehicleRegistry, DEFAULT_SEPARATOR};
