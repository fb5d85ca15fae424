//! # Rate Catalog
//!
//! The fixed, published price list: tier rates and add-on rates.
//!
//! ## Catalog Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Published Price List                             │
//! │                                                                         │
//! │  Tier           Monthly     Hourly rate    Included hours               │
//! │  ─────────────  ──────────  ─────────────  ──────────────               │
//! │  starter        €999.00     €100.00        40                           │
//! │  professional   €2499.00    €100.00        100                          │
//! │  enterprise     €4999.00    (none)         Unlimited                    │
//! │                                                                         │
//! │  Add-on         Unit price                                              │
//! │  ─────────────  ──────────                                              │
//! │  maintenance    €299.00                                                 │
//! │  training       €150.00                                                 │
//! │  urgentDev      €200.00                                                 │
//! │  audit          €999.00                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both tables are process-wide immutable constants baked into the binary.
//! There is no dynamic dispatch and no runtime configuration: a price change
//! is a code change, reviewed like one.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;
use crate::types::{IncludedHours, TierId};

// =============================================================================
// Tier Pricing
// =============================================================================

/// The published rate card for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TierPricing {
    /// Monthly base price in cents.
    pub monthly_cents: i64,
    /// Overage rate per development hour, in cents. Zero for the
    /// unlimited tier, which never bills overage anyway.
    pub hourly_rate_cents: i64,
    /// Development hours included in the monthly price.
    pub included_hours: IncludedHours,
}

impl TierPricing {
    /// Returns the monthly base price as Money.
    #[inline]
    pub const fn monthly(&self) -> Money {
        Money::from_cents(self.monthly_cents)
    }

    /// Returns the hourly overage rate as Money.
    #[inline]
    pub const fn hourly_rate(&self) -> Money {
        Money::from_cents(self.hourly_rate_cents)
    }
}

impl TierId {
    /// The published rate card for this tier.
    ///
    /// ## Example
    /// ```rust
    /// use neoforge_core::types::{IncludedHours, TierId};
    ///
    /// let rates = TierId::Starter.pricing();
    /// assert_eq!(rates.monthly().cents(), 99_900);
    /// assert_eq!(rates.included_hours, IncludedHours::Hours(40));
    /// ```
    pub const fn pricing(&self) -> TierPricing {
        match self {
            TierId::Starter => TierPricing {
                monthly_cents: 99_900,
                hourly_rate_cents: 10_000,
                included_hours: IncludedHours::Hours(40),
            },
            TierId::Professional => TierPricing {
                monthly_cents: 249_900,
                hourly_rate_cents: 10_000,
                included_hours: IncludedHours::Hours(100),
            },
            TierId::Enterprise => TierPricing {
                monthly_cents: 499_900,
                hourly_rate_cents: 0,
                included_hours: IncludedHours::Unlimited,
            },
        }
    }
}

// =============================================================================
// Add-On Services
// =============================================================================

/// One of the fixed optional services billed per unit quantity.
///
/// Add-on ids use the published camelCase form on the wire ("urgentDev"),
/// matching the price list the website shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum AddOnId {
    /// Ongoing maintenance retainer.
    Maintenance,
    /// Team training session.
    Training,
    /// Urgent development intervention.
    UrgentDev,
    /// Code / security audit.
    Audit,
}

impl AddOnId {
    /// All add-ons, in price-list order.
    pub const ALL: [AddOnId; 4] = [
        AddOnId::Maintenance,
        AddOnId::Training,
        AddOnId::UrgentDev,
        AddOnId::Audit,
    ];

    /// The canonical identifier string for this add-on.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            AddOnId::Maintenance => "maintenance",
            AddOnId::Training => "training",
            AddOnId::UrgentDev => "urgentDev",
            AddOnId::Audit => "audit",
        }
    }

    /// Parses an add-on identifier string.
    pub fn parse(id: &str) -> Option<AddOnId> {
        match id {
            "maintenance" => Some(AddOnId::Maintenance),
            "training" => Some(AddOnId::Training),
            "urgentDev" => Some(AddOnId::UrgentDev),
            "audit" => Some(AddOnId::Audit),
            _ => None,
        }
    }

    /// The published per-unit price for this add-on.
    ///
    /// ## Example
    /// ```rust
    /// use neoforge_core::catalog::AddOnId;
    ///
    /// assert_eq!(AddOnId::Maintenance.unit_price().cents(), 29_900);
    /// ```
    pub const fn unit_price(&self) -> Money {
        match self {
            AddOnId::Maintenance => Money::from_euros(299),
            AddOnId::Training => Money::from_euros(150),
            AddOnId::UrgentDev => Money::from_euros(200),
            AddOnId::Audit => Money::from_euros(999),
        }
    }
}

impl fmt::Display for AddOnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_rate_card() {
        let starter = TierId::Starter.pricing();
        assert_eq!(starter.monthly().cents(), 99_900);
        assert_eq!(starter.hourly_rate().cents(), 10_000);
        assert_eq!(starter.included_hours, IncludedHours::Hours(40));

        let professional = TierId::Professional.pricing();
        assert_eq!(professional.monthly().cents(), 249_900);
        assert_eq!(professional.included_hours, IncludedHours::Hours(100));

        let enterprise = TierId::Enterprise.pricing();
        assert_eq!(enterprise.monthly().cents(), 499_900);
        assert!(enterprise.hourly_rate().is_zero());
        assert!(enterprise.included_hours.is_unlimited());
    }

    #[test]
    fn test_addon_price_list() {
        assert_eq!(AddOnId::Maintenance.unit_price().cents(), 29_900);
        assert_eq!(AddOnId::Training.unit_price().cents(), 15_000);
        assert_eq!(AddOnId::UrgentDev.unit_price().cents(), 20_000);
        assert_eq!(AddOnId::Audit.unit_price().cents(), 99_900);
    }

    #[test]
    fn test_addon_parse_roundtrip() {
        for addon in AddOnId::ALL {
            assert_eq!(AddOnId::parse(addon.as_str()), Some(addon));
        }
        assert_eq!(AddOnId::parse("bogus"), None);
        // Published ids are camelCase; other casings are unknown ids
        assert_eq!(AddOnId::parse("urgentdev"), None);
    }

    #[test]
    fn test_addon_wire_format() {
        // The wire id is the published camelCase form
        let json = serde_json::to_string(&AddOnId::UrgentDev).unwrap();
        assert_eq!(json, "\"urgentDev\"");
    }
}
