use serde::{Deserialize, Serialize};

/// A bookable service is exactly one of a flight or a hotel. The variant
/// carries the extension data that lives in the side table for that kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ServiceKind {
    Flight { airline: String },
    Hotel { stars: i32 },
}

impl ServiceKind {
    /// Identifiers of the inventory units created alongside a new service:
    /// four seats for a flight, four rooms for a hotel.
    pub fn initial_unit_labels(&self) -> &'static [&'static str] {
        match self {
            Self::Flight { .. } => &["1A", "1B", "2A", "2B"],
            Self::Hotel { .. } => &["101", "102", "201", "202"],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Flight { .. } => "Flight",
            Self::Hotel { .. } => "Hotel",
        }
    }

    pub fn is_flight(&self) -> bool {
        matches!(self, Self::Flight { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_inventory_labels() {
        let flight = ServiceKind::Flight {
            airline: "TK".to_string(),
        };
        assert_eq!(flight.initial_unit_labels(), &["1A", "1B", "2A", "2B"]);

        let hotel = ServiceKind::Hotel { stars: 5 };
        assert_eq!(hotel.initial_unit_labels(), &["101", "102", "201", "202"]);
    }

    #[test]
    fn test_serde_tagging() {
        let flight = ServiceKind::Flight {
            airline: "TK".to_string(),
        };
        let json = serde_json::to_string(&flight).unwrap();
        assert_eq!(json, r#"{"type":"flight","airline":"TK"}"#);

        let hotel: ServiceKind = serde_json::from_str(r#"{"type":"hotel","stars":4}"#).unwrap();
        assert_eq!(hotel, ServiceKind::Hotel { stars: 4 });
        assert_eq!(hotel.label(), "Hotel");
    }
}
