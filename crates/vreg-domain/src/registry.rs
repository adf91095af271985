//! In-memory vehicle registry

use tracing::debug;

use crate::model::VehicleVariant;

/// Line printed after every record in a full listing
pub const DEFAULT_SEPARATOR: &str = "-------------------------";

/// Ordered registry of vehicle records
///
/// Records are kept in insertion order and only handed out by shared
/// reference, so nothing can change a record once it has been added.
#[derive(Debug, Clone)]
pub struct VehicleRegistry {
    vehicles: Vec<VehicleVariant>,
    separator: String,
}

impl Default for VehicleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl VehicleRegistry {
    pub fn new() -> Self {
        Self::with_separator(DEFAULT_SEPARATOR)
    }

    /// Create an empty registry whose listing uses a custom separator line
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            vehicles: Vec::new(),
            separator: separator.into(),
        }
    }

    /// Append a vehicle. Duplicate IDs are accepted.
    pub fn add(&mut self, vehicle: VehicleVariant) {
        debug!(
            id = vehicle.id(),
            kind = %vehicle.kind(),
            total = self.vehicles.len() + 1,
            "vehicle added"
        );
        self.vehicles.push(vehicle);
    }

    /// Render every vehicle in insertion order, each followed by the separator
    pub fn list_all(&self) -> Vec<String> {
        self.vehicles
            .iter()
            .map(|v| format!("{}{}\n", v.render(), self.separator))
            .collect()
    }

    /// First vehicle with the given ID, in insertion order
    pub fn find_by_id(&self, id: i32) -> Option<&VehicleVariant> {
        let found = self.vehicles.iter().find(|v| v.id() == id);
        debug!(id, found = found.is_some(), "vehicle lookup");
        found
    }

    /// Get total vehicle count
    pub fn count(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VehicleVariant> {
        self.vehicles.iter()
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CommonFields, VariantFields};
    use vreg_types::VehicleKind;

    fn car(id: i32, manufacturer: &str, model: &str) -> VehicleVariant {
        VehicleVariant::create(
            VehicleKind::Car,
            CommonFields::new(id, manufacturer, model, 2020),
            VariantFields::fuel("Petrol"),
        )
    }

    #[test]
    fn test_find_by_id() {
        let mut registry = VehicleRegistry::new();
        registry.add(car(1, "Toyota", "Corolla"));

        let found = registry.find_by_id(1).expect("vehicle 1 should be found");
        assert_eq!(found.common().model, "Corolla");
        assert!(registry.find_by_id(2).is_none());
    }

    #[test]
    fn test_empty_registry() {
        let registry = VehicleRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.count(), 0);
        assert!(registry.list_all().is_empty());
        assert!(registry.find_by_id(0).is_none());
    }

    #[test]
    fn test_list_all_preserves_insertion_order() {
        let mut registry = VehicleRegistry::new();
        registry.add(car(3, "Honda", "Civic"));
        registry.add(car(1, "Toyota", "Corolla"));
        registry.add(car(2, "Mazda", "3"));

        let listing = registry.list_all();
        assert_eq!(listing.len(), 3);
        assert!(listing[0].starts_with("ID: 3,"));
        assert!(listing[1].starts_with("ID: 1,"));
        assert!(listing[2].starts_with("ID: 2,"));
    }

    #[test]
    fn test_list_entry_ends_with_separator() {
        let mut registry = VehicleRegistry::new();
        let vehicle = car(1, "Toyota", "Corolla");
        let rendered = vehicle.render();
        registry.add(vehicle);

        let listing = registry.list_all();
        assert_eq!(listing[0], format!("{}-------------------------\n", rendered));
    }

    #[test]
    fn test_custom_separator() {
        let mut registry = VehicleRegistry::with_separator("===");
        registry.add(car(1, "Toyota", "Corolla"));
        assert_eq!(registry.separator(), "===");
        assert!(registry.list_all()[0].ends_with("Fuel Type: Petrol\n===\n"));
    }

    #[test]
    fn test_duplicate_id_returns_first_added() {
        let mut registry = VehicleRegistry::new();
        registry.add(car(7, "Ford", "Focus"));
        registry.add(car(7, "Kia", "Ceed"));

        assert_eq!(registry.count(), 2);
        assert_eq!(registry.find_by_id(7).map(|v| v.common().manufacturer.as_str()), Some("Ford"));
    }

    #[test]
    fn test_list_all_is_idempotent() {
        let mut registry = VehicleRegistry::new();
        registry.add(car(1, "Toyota", "Corolla"));
        registry.add(VehicleVariant::create(
            VehicleKind::ElectricCar,
            CommonFields::new(2, "Nissan", "Leaf", 2021),
            VariantFields::fuel("Electric").with_battery(75),
        ));

        assert_eq!(registry.list_all(), registry.list_all());
    }

    #[test]
    fn test_electric_listing_contains_battery_line() {
        let mut registry = VehicleRegistry::new();
        registry.add(VehicleVariant::create(
            VehicleKind::ElectricCar,
            CommonFields::new(2, "Nissan", "Leaf", 2021),
            VariantFields::fuel("Electric").with_battery(75),
        ));

        let entry = &registry.list_all()[0];
        let lines: Vec<_> = entry.lines().collect();
        assert_eq!(lines[0], "ID: 2, Manufacturer: Nissan, Model: Leaf, Year: 2021");
        assert_eq!(lines[1], "Fuel Type: Electric");
        assert!(lines[2].contains("75") && lines[2].contains("kWh"));
    }

    #[test]
    fn test_count_tracks_adds() {
        let mut registry = VehicleRegistry::new();
        for id in 0..5 {
            registry.add(car(id, "Make", "Model"));
            assert_eq!(registry.count(), (id + 1) as usize);
        }
        assert_eq!(registry.iter().map(|v| v.id()).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }
}
