//! Vehicle record and sort specification.
//!
//! A record is one vehicle's immutable attribute set. The query engine only
//! ever copies and reorders records; nothing in this crate mutates one after
//! construction.

use crate::types::{Money, SortDirection, VehicleId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub id: VehicleId,
    pub make: String,
    pub model: String,
    pub year: u32,
    pub price: Money,
    pub mileage: u32,
    pub colour: String,
}

impl VehicleRecord {
    /// Every field rendered to its decimal textual form, lower-cased, in
    /// declaration order. This is the haystack the free-text filter scans.
    pub fn searchable_fields(&self) -> [String; 7] {
        [
            self.id.as_str().to_lowercase(),
            self.make.to_lowercase(),
            self.model.to_lowercase(),
            self.year.to_string(),
            self.price.value().to_string().to_lowercase(),
            self.mileage.to_string(),
            self.colour.to_lowercase(),
        ]
    }

    /// True if any field's textual form contains `needle`.
    /// `needle` must already be trimmed and lower-cased by the caller so the
    /// term is normalized once per filter call, not once per record.
    pub fn matches(&self, needle: &str) -> bool {
        self.searchable_fields()
            .iter()
            .any(|field| field.contains(needle))
    }
}

impl fmt::Display for VehicleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({}, {} miles, {})",
            self.year, self.make, self.model, self.price, self.mileage, self.colour
        )
    }
}

/// Which attribute governs ordering. A closed set: an unsupported field
/// cannot be constructed in typed code, and a textual value arriving from an
/// untyped boundary fails at parse time rather than falling through to a
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Make,
    Model,
    Year,
    Price,
    Mileage,
    Colour,
}

impl SortField {
    pub const ALL: [SortField; 6] = [
        SortField::Make,
        SortField::Model,
        SortField::Year,
        SortField::Price,
        SortField::Mileage,
        SortField::Colour,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Make => "make",
            SortField::Model => "model",
            SortField::Year => "year",
            SortField::Price => "price",
            SortField::Mileage => "mileage",
            SortField::Colour => "colour",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortField {
    type Err = crate::query::QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "make" => Ok(SortField::Make),
            "model" => Ok(SortField::Model),
            "year" => Ok(SortField::Year),
            "price" => Ok(SortField::Price),
            "mileage" => Ok(SortField::Mileage),
            "colour" => Ok(SortField::Colour),
            other => Err(crate::query::QueryError::UnknownSortField(other.to_string())),
        }
    }
}

/// Field plus direction, replaced wholesale on each interaction. The engine
/// holds no copy of it; the host passes it in on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn golf() -> VehicleRecord {
        VehicleRecord {
            id: VehicleId::new("v-001"),
            make: "Volkswagen".to_string(),
            model: "Golf".to_string(),
            year: 2021,
            price: Money::new(dec!(18995)),
            mileage: 23410,
            colour: "Moss Green".to_string(),
        }
    }

    #[test]
    fn matches_text_fields_case_insensitively() {
        let v = golf();
        assert!(v.matches("volks"));
        assert!(v.matches("golf"));
        assert!(v.matches("moss"));
        assert!(!v.matches("fiesta"));
    }

    #[test]
    fn matches_numeric_fields_by_decimal_text() {
        let v = golf();
        assert!(v.matches("2021"));
        assert!(v.matches("18995"));
        assert!(v.matches("2341")); // substring of the mileage
    }

    #[test]
    fn sort_field_parses_known_names() {
        for field in SortField::ALL {
            assert_eq!(field.as_str().parse::<SortField>().unwrap(), field);
        }
        assert_eq!(" Price ".parse::<SortField>().unwrap(), SortField::Price);
    }

    #[test]
    fn sort_field_rejects_unknown_names() {
        assert!("horsepower".parse::<SortField>().is_err());
        assert!("".parse::<SortField>().is_err());
    }
}
