//! Dashboard statistics snapshot.
//!
//! Deprecated since 1.14; kept for the administrative dashboard until the
//! statistics endpoint replaces it in 2.0.

use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, value_objects::ChannelCode};

/// Pre-computed sales figures for the dashboard, optionally per channel.
///
/// Immutable once built. Monetary values are in minor units (cents).
///
/// Deprecated since 1.14 and removed in 2.0; new dashboards read the
/// statistics endpoint instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStatistics {
    total_sales: i64,
    number_of_new_orders: u64,
    number_of_new_customers: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    channel: Option<ChannelCode>,
}

impl DashboardStatistics {
    /// Store the given figures verbatim.
    pub fn new(
        total_sales: i64,
        number_of_new_orders: u64,
        number_of_new_customers: u64,
        channel: Option<ChannelCode>,
    ) -> Self {
        Self {
            total_sales,
            number_of_new_orders,
            number_of_new_customers,
            channel,
        }
    }

    /// Build from signed counts, e.g. values read back from an aggregate
    /// query. Negative counts are rejected.
    pub fn try_from_signed(
        total_sales: i64,
        number_of_new_orders: i64,
        number_of_new_customers: i64,
        channel: Option<ChannelCode>,
    ) -> Result<Self, DomainError> {
        let orders = u64::try_from(number_of_new_orders).map_err(|_| DomainError::NegativeCount {
            field: "number_of_new_orders",
            value: number_of_new_orders,
        })?;
        let customers =
            u64::try_from(number_of_new_customers).map_err(|_| DomainError::NegativeCount {
                field: "number_of_new_customers",
                value: number_of_new_customers,
            })?;

        Ok(Self::new(total_sales, orders, customers, channel))
    }

    pub fn channel(&self) -> Option<&ChannelCode> {
        self.channel.as_ref()
    }

    pub fn total_sales(&self) -> i64 {
        self.total_sales
    }

    pub fn number_of_new_orders(&self) -> u64 {
        self.number_of_new_orders
    }

    pub fn number_of_new_customers(&self) -> u64 {
        self.number_of_new_customers
    }

    /// Total sales divided by new orders, rounded half away from zero.
    ///
    /// Zero when there are no new orders.
    pub fn average_order_value(&self) -> i64 {
        if self.number_of_new_orders == 0 {
            return 0;
        }

        rounded_quotient(self.total_sales, self.number_of_new_orders)
    }
}

/// `numerator / denominator` rounded half away from zero. `denominator > 0`.
fn rounded_quotient(numerator: i64, denominator: u64) -> i64 {
    let n = i128::from(numerator);
    let d = i128::from(denominator);

    let quotient = n / d;
    let remainder = n % d;

    // |result| <= |numerator|, so the cast cannot truncate
    if 2 * remainder.abs() >= d {
        (quotient + n.signum()) as i64
    } else {
        quotient as i64
    }
}
