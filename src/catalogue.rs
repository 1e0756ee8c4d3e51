//! Catalogue: the materialized vehicle collection handed to the query engine.
//!
//! How the records were obtained (network fetch, static seed, simulated
//! delay) is the host's business; the core only sees the finished sequence.
//! Assembly is the one place the id-uniqueness invariant is checked.

use crate::query::QueryError;
use crate::types::{Money, VehicleId};
use crate::vehicle::VehicleRecord;
use rust_decimal::Decimal;
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    vehicles: Vec<VehicleRecord>,
}

impl Catalogue {
    /// Build from an already-materialized record sequence. Fails if two
    /// records share an id.
    pub fn new(vehicles: Vec<VehicleRecord>) -> Result<Self, QueryError> {
        let mut seen: HashSet<&VehicleId> = HashSet::new();
        for vehicle in &vehicles {
            if !seen.insert(&vehicle.id) {
                return Err(QueryError::DuplicateVehicleId(vehicle.id.as_str().to_string()));
            }
        }
        Ok(Self { vehicles })
    }

    pub fn vehicles(&self) -> &[VehicleRecord] {
        &self.vehicles
    }

    pub fn vehicle_by_id(&self, id: &VehicleId) -> Option<&VehicleRecord> {
        self.vehicles.iter().find(|v| &v.id == id)
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// A canned forecourt for the sim binary and tests.
    pub fn demo_stock() -> Self {
        let seed = [
            ("v-001", "Volkswagen", "Golf", 2021, 18995, 23410, "Moss Green"),
            ("v-002", "Ford", "Fiesta", 2019, 11495, 34120, "Race Red"),
            ("v-003", "BMW", "3 Series", 2022, 28750, 12080, "Alpine White"),
            ("v-004", "Audi", "A3", 2020, 21990, 26540, "Mythos Black"),
            ("v-005", "Toyota", "Corolla", 2023, 24495, 6210, "Platinum White"),
            ("v-006", "Ford", "Focus", 2021, 17295, 22400, "Moondust Silver"),
            ("v-007", "Mercedes-Benz", "A-Class", 2022, 27450, 14890, "Cosmos Black"),
            ("v-008", "Vauxhall", "Corsa", 2018, 8995, 41230, "Power Orange"),
            ("v-009", "Nissan", "Qashqai", 2020, 19750, 28910, "Gun Metallic"),
            ("v-010", "Kia", "Sportage", 2023, 29995, 4350, "Blue Flame"),
        ];

        let vehicles = seed
            .into_iter()
            .map(|(id, make, model, year, price, mileage, colour)| VehicleRecord {
                id: VehicleId::new(id),
                make: make.to_string(),
                model: model.to_string(),
                year,
                price: Money::new(Decimal::from(price)),
                mileage,
                colour: colour.to_string(),
            })
            .collect();

        // the seed above has unique ids
        Self { vehicles }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_stock_has_unique_ids() {
        let catalogue = Catalogue::demo_stock();
        let rebuilt = Catalogue::new(catalogue.vehicles().to_vec());
        assert!(rebuilt.is_ok());
        assert_eq!(catalogue.len(), 10);
    }

    #[test]
    fn lookup_by_id() {
        let catalogue = Catalogue::demo_stock();
        let golf = catalogue.vehicle_by_id(&VehicleId::new("v-001")).unwrap();
        assert_eq!(golf.model, "Golf");
        assert!(catalogue.vehicle_by_id(&VehicleId::new("v-999")).is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut vehicles = Catalogue::demo_stock().vehicles().to_vec();
        vehicles.push(vehicles[0].clone());
        let err = Catalogue::new(vehicles).unwrap_err();
        assert_eq!(err, QueryError::DuplicateVehicleId("v-001".to_string()));
    }

    #[test]
    fn empty_catalogue_is_fine() {
        let catalogue = Catalogue::new(Vec::new()).unwrap();
        assert!(catalogue.is_empty());
        assert_eq!(catalogue.len(), 0);
    }
}
