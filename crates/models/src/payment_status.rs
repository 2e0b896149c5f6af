use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use strum::EnumIter;

#[cfg(feature = "database")]
use sea_orm::Value;

/// Settlement state of a booking, derived from its payments and the price
/// of the booked package. Stored denormalized on the booking row and
/// recomputed whenever either input changes, never set by hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumIter)]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    Partial,
    Paid,
}

impl PaymentStatus {
    /// Derive the status from the total amount paid and the package price.
    ///
    /// Paying the price exactly counts as fully paid; a non-positive total
    /// is unpaid regardless of price.
    pub fn for_amounts(total_paid: f64, package_price: f64) -> Self {
        if total_paid <= 0.0 {
            Self::Unpaid
        } else if total_paid < package_price {
            Self::Partial
        } else {
            Self::Paid
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unpaid => "Unpaid",
            Self::Partial => "Partial",
            Self::Paid => "Paid",
        }
    }
}

impl Display for PaymentStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Error returned when a stored status string is not one of the three states
#[derive(Debug)]
pub struct ParseStatusError(pub String);

impl FromStr for PaymentStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Unpaid" => Ok(Self::Unpaid),
            "Partial" => Ok(Self::Partial),
            "Paid" => Ok(Self::Paid),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

#[cfg(feature = "database")]
impl sea_orm::sea_query::ValueType for PaymentStatus {
    fn try_from(v: Value) -> Result<Self, sea_orm::sea_query::ValueTypeErr> {
        match v {
            Value::String(Some(s)) => s.parse().map_err(|_| sea_orm::sea_query::ValueTypeErr),
            _ => Err(sea_orm::sea_query::ValueTypeErr),
        }
    }

    fn type_name() -> String {
        "PaymentStatus".to_string()
    }

    fn array_type() -> sea_orm::sea_query::ArrayType {
        sea_orm::sea_query::ArrayType::String
    }

    fn column_type() -> sea_orm::sea_query::ColumnType {
        sea_orm::sea_query::ColumnType::Text
    }
}

#[cfg(feature = "database")]
impl From<PaymentStatus> for Value {
    fn from(status: PaymentStatus) -> Self {
        Value::String(Some(Box::new(status.as_str().to_string())))
    }
}

#[cfg(feature = "database")]
impl sea_orm::TryGetable for PaymentStatus {
    fn try_get_by<I: sea_orm::ColIdx>(
        res: &sea_orm::QueryResult,
        index: I,
    ) -> Result<Self, sea_orm::TryGetError> {
        let val: String = res.try_get_by(index)?;

        val.parse().map_err(|ParseStatusError(s)| {
            sea_orm::TryGetError::DbErr(sea_orm::DbErr::Type(format!(
                "unknown payment status: {s}"
            )))
        })
    }
}

#[cfg(feature = "database")]
impl sea_orm::sea_query::Nullable for PaymentStatus {
    fn null() -> Value {
        Value::String(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_nothing_paid_is_unpaid() {
        assert_eq!(PaymentStatus::for_amounts(0.0, 5000.0), PaymentStatus::Unpaid);
        assert_eq!(PaymentStatus::for_amounts(0.0, 1.0), PaymentStatus::Unpaid);
    }

    #[test]
    fn test_negative_total_is_unpaid() {
        // A refund can push the sum below zero
        assert_eq!(
            PaymentStatus::for_amounts(-250.0, 5000.0),
            PaymentStatus::Unpaid
        );
    }

    #[test]
    fn test_partial_range() {
        assert_eq!(
            PaymentStatus::for_amounts(0.01, 5000.0),
            PaymentStatus::Partial
        );
        assert_eq!(
            PaymentStatus::for_amounts(2500.0, 5000.0),
            PaymentStatus::Partial
        );
        assert_eq!(
            PaymentStatus::for_amounts(4999.99, 5000.0),
            PaymentStatus::Partial
        );
    }

    #[test]
    fn test_exact_price_is_paid() {
        // Boundary: equal-to-price counts as fully paid
        assert_eq!(PaymentStatus::for_amounts(5000.0, 5000.0), PaymentStatus::Paid);
    }

    #[test]
    fn test_overpayment_is_paid() {
        assert_eq!(PaymentStatus::for_amounts(9000.0, 5000.0), PaymentStatus::Paid);
    }

    #[test]
    fn test_string_round_trip() {
        for status in PaymentStatus::iter() {
            assert_eq!(status.as_str().parse::<PaymentStatus>().unwrap(), status);
        }

        assert!("paid".parse::<PaymentStatus>().is_err());
        assert!("".parse::<PaymentStatus>().is_err());
    }
}
