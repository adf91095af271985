//! Domain model types

pub mod vehicle;

pub use vehicle::{Car, CommonFields, ElectricCar, FlyingCar, SportsCar, VariantFields, VehicleVariant};
