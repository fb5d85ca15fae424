//! # Domain Types
//!
//! Core domain types used throughout the NeoForge pricing engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     TierId      │   │  BillingPeriod  │   │  DiscountRate   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Starter        │   │  Monthly  (×1)  │   │  bps (u32)      │       │
//! │  │  Professional   │   │  Quarterly(×3)  │   │  1500 = 15%     │       │
//! │  │  Enterprise     │   │  Annual   (×12) │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                              │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │  IncludedHours  │   │    Currency     │                              │
//! │  │  ─────────────  │   │  ─────────────  │                              │
//! │  │  Hours(n)       │   │  Eur  ("€")     │                              │
//! │  │  Unlimited      │   └─────────────────┘                              │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Sentinel-Free Unlimited
//! The enterprise tier has no overage billing. Rather than encoding that as
//! `included_hours = i64::MAX` (a magic sentinel that silently participates
//! in arithmetic), `IncludedHours` is an explicit tagged option.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Tier Identifier
// =============================================================================

/// One of the three fixed service tiers.
///
/// The set is closed: pricing is a fixed published table, not user data.
/// String input from callers goes through [`TierId::parse`]; everything
/// past that boundary is typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TierId {
    /// Entry tier for startups and small projects.
    Starter,
    /// Mid tier for growing businesses.
    Professional,
    /// Top tier with unlimited development hours.
    Enterprise,
}

impl TierId {
    /// All tiers, in ascending price order.
    pub const ALL: [TierId; 3] = [TierId::Starter, TierId::Professional, TierId::Enterprise];

    /// The canonical identifier string for this tier.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            TierId::Starter => "starter",
            TierId::Professional => "professional",
            TierId::Enterprise => "enterprise",
        }
    }

    /// Parses a tier identifier string.
    ///
    /// ## Example
    /// ```rust
    /// use neoforge_core::types::TierId;
    ///
    /// assert_eq!(TierId::parse("professional"), Some(TierId::Professional));
    /// assert_eq!(TierId::parse("platinum"), None);
    /// ```
    pub fn parse(id: &str) -> Option<TierId> {
        match id {
            "starter" => Some(TierId::Starter),
            "professional" => Some(TierId::Professional),
            "enterprise" => Some(TierId::Enterprise),
            _ => None,
        }
    }
}

impl fmt::Display for TierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Billing Period
// =============================================================================

/// Billing cadence: determines the month multiplier and the discount rate.
///
/// An unrecognized period cannot exist here - the enum is the validation.
/// Callers holding strings decide at their own boundary what to do with
/// unknown input (the quote CLI falls back to the default, monthly).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BillingPeriod {
    /// Pay every month. No discount.
    Monthly,
    /// Pay every 3 months. 5% discount on the subtotal.
    Quarterly,
    /// Pay every 12 months. 15% discount on the subtotal.
    Annual,
}

impl BillingPeriod {
    /// Number of months covered by one payment.
    #[inline]
    pub const fn months(&self) -> i64 {
        match self {
            BillingPeriod::Monthly => 1,
            BillingPeriod::Quarterly => 3,
            BillingPeriod::Annual => 12,
        }
    }

    /// Discount rate applied to the multiplied subtotal.
    ///
    /// ## Example
    /// ```rust
    /// use neoforge_core::types::BillingPeriod;
    ///
    /// assert_eq!(BillingPeriod::Annual.discount().percent(), 15);
    /// assert_eq!(BillingPeriod::Quarterly.discount().percent(), 5);
    /// assert!(BillingPeriod::Monthly.discount().is_zero());
    /// ```
    #[inline]
    pub const fn discount(&self) -> DiscountRate {
        match self {
            BillingPeriod::Monthly => DiscountRate::zero(),
            BillingPeriod::Quarterly => DiscountRate::from_bps(500),
            BillingPeriod::Annual => DiscountRate::from_bps(1500),
        }
    }

    /// The canonical identifier string for this period.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "monthly",
            BillingPeriod::Quarterly => "quarterly",
            BillingPeriod::Annual => "annual",
        }
    }

    /// Parses a billing period string.
    pub fn parse(period: &str) -> Option<BillingPeriod> {
        match period {
            "monthly" => Some(BillingPeriod::Monthly),
            "quarterly" => Some(BillingPeriod::Quarterly),
            "annual" => Some(BillingPeriod::Annual),
            _ => None,
        }
    }
}

impl Default for BillingPeriod {
    fn default() -> Self {
        BillingPeriod::Monthly
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1500 bps = 15% (annual billing discount)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a whole percentage (for display).
    ///
    /// The catalog only carries whole-percent rates (0, 5, 15), so this
    /// truncating division is lossless in practice.
    #[inline]
    pub const fn percent(&self) -> u32 {
        self.0 / 100
    }

    /// Zero discount rate.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

// =============================================================================
// Included Hours
// =============================================================================

/// Development hours included in a tier's monthly price.
///
/// `Unlimited` means the tier never bills overage, no matter how many
/// hours are requested. Serialized as `{"hours": 40}` or `"unlimited"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum IncludedHours {
    /// A finite monthly allotment.
    Hours(i64),
    /// No cap, and no overage billing.
    Unlimited,
}

impl IncludedHours {
    /// Whether this tier bills overage at all.
    #[inline]
    pub const fn is_unlimited(&self) -> bool {
        matches!(self, IncludedHours::Unlimited)
    }
}

impl fmt::Display for IncludedHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IncludedHours::Hours(n) => write!(f, "{}", n),
            IncludedHours::Unlimited => f.write_str("Unlimited"),
        }
    }
}

// =============================================================================
// Currency
// =============================================================================

/// Currency tag carried on every breakdown.
///
/// All published prices are in euros today; the tag exists so the wire
/// shape doesn't change if another price list is ever added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Currency {
    /// Euro.
    Eur,
}

impl Currency {
    /// Display symbol ("€").
    #[inline]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Currency::Eur => "€",
        }
    }

    /// ISO 4217 code.
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Eur
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_parse_roundtrip() {
        for tier in TierId::ALL {
            assert_eq!(TierId::parse(tier.as_str()), Some(tier));
        }
        assert_eq!(TierId::parse("platinum"), None);
        assert_eq!(TierId::parse(""), None);
        // Identifiers are case-sensitive, matching the published ids
        assert_eq!(TierId::parse("Starter"), None);
    }

    #[test]
    fn test_billing_period_months() {
        assert_eq!(BillingPeriod::Monthly.months(), 1);
        assert_eq!(BillingPeriod::Quarterly.months(), 3);
        assert_eq!(BillingPeriod::Annual.months(), 12);
    }

    #[test]
    fn test_billing_period_discounts() {
        assert_eq!(BillingPeriod::Monthly.discount().bps(), 0);
        assert_eq!(BillingPeriod::Quarterly.discount().bps(), 500);
        assert_eq!(BillingPeriod::Annual.discount().bps(), 1500);
    }

    #[test]
    fn test_billing_period_default_is_monthly() {
        assert_eq!(BillingPeriod::default(), BillingPeriod::Monthly);
        // The boundary idiom for untyped input:
        let period = BillingPeriod::parse("weekly").unwrap_or_default();
        assert_eq!(period, BillingPeriod::Monthly);
    }

    #[test]
    fn test_discount_rate_percent() {
        assert_eq!(DiscountRate::from_bps(1500).percent(), 15);
        assert_eq!(DiscountRate::from_bps(500).percent(), 5);
        assert_eq!(DiscountRate::zero().percent(), 0);
    }

    #[test]
    fn test_included_hours_display() {
        assert_eq!(IncludedHours::Hours(40).to_string(), "40");
        assert_eq!(IncludedHours::Unlimited.to_string(), "Unlimited");
        assert!(IncludedHours::Unlimited.is_unlimited());
        assert!(!IncludedHours::Hours(100).is_unlimited());
    }

    #[test]
    fn test_currency_symbol() {
        assert_eq!(Currency::Eur.symbol(), "€");
        assert_eq!(Currency::Eur.code(), "EUR");
    }
}
