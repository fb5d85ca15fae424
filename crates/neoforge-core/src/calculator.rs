//! # Price Calculator
//!
//! Pure functions mapping (tier, billing period, overage hours, add-ons)
//! to an immutable cost breakdown.
//!
//! ## Computation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Breakdown Computation                              │
//! │                                                                         │
//! │  tier id (&str) ──► TierId::parse ──► InvalidTier? ──► Err(...)         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  overage cost = hours × hourly rate   (0 if unlimited or hours ≤ 0)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  monthly total = base + overage cost                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  subtotal = monthly total × months(period)                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  discount = subtotal × rate(period)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  total = subtotal − discount                                            │
//! │       │                                                                 │
//! │       ▼ (optional)                                                      │
//! │  grand total = total + Σ add-on lines   (no discount on add-ons)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every call is independent and side-effect-free; a breakdown is produced
//! fresh per invocation and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

use crate::catalog::AddOnId;
use crate::error::{PricingError, PricingResult};
use crate::money::Money;
use crate::types::{BillingPeriod, Currency, IncludedHours, TierId};

// =============================================================================
// Price Breakdown
// =============================================================================

/// The full computed cost structure for one tier/period/overage request.
///
/// All monetary fields are in cents with [`Money`] accessors, so the JSON
/// shape stays flat integers while Rust callers get typed arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceBreakdown {
    /// The selected tier.
    pub tier: TierId,
    /// The billing cadence the quote was computed for.
    pub billing_period: BillingPeriod,
    /// Monthly base price in cents.
    pub base_price_cents: i64,
    /// Hours included in the monthly price.
    pub included_hours: IncludedHours,
    /// Overage hours requested by the caller, recorded as given.
    pub overage_hours: i64,
    /// Cost of the requested overage hours. Always 0 for the unlimited
    /// tier, and 0 whenever `overage_hours <= 0`.
    pub overage_cost_cents: i64,
    /// Base price plus overage cost.
    pub monthly_total_cents: i64,
    /// Months covered by one payment (1, 3 or 12).
    pub months: i64,
    /// Monthly total multiplied by the month count, before discount.
    pub subtotal_cents: i64,
    /// Discount amount subtracted from the subtotal.
    pub discount_cents: i64,
    /// Discount as a whole percentage (0, 5 or 15).
    pub discount_percent: u32,
    /// Subtotal minus discount.
    pub total_cents: i64,
    /// Currency tag for every monetary field in this breakdown.
    pub currency: Currency,
}

impl PriceBreakdown {
    /// Returns the monthly base price as Money.
    #[inline]
    pub const fn base_price(&self) -> Money {
        Money::from_cents(self.base_price_cents)
    }

    /// Returns the overage cost as Money.
    #[inline]
    pub const fn overage_cost(&self) -> Money {
        Money::from_cents(self.overage_cost_cents)
    }

    /// Returns the monthly total as Money.
    #[inline]
    pub const fn monthly_total(&self) -> Money {
        Money::from_cents(self.monthly_total_cents)
    }

    /// Returns the pre-discount subtotal as Money.
    #[inline]
    pub const fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }

    /// Returns the discount amount as Money.
    #[inline]
    pub const fn discount(&self) -> Money {
        Money::from_cents(self.discount_cents)
    }

    /// Returns the payable total as Money.
    #[inline]
    pub const fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Service Lines
// =============================================================================

/// One billed add-on line, frozen at the unit price in effect when the
/// quote was computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ServiceLine {
    /// Which add-on this line bills.
    pub service: AddOnId,
    /// Unit price in cents at quote time.
    pub unit_price_cents: i64,
    /// Units requested (always > 0; zero/negative requests produce no line).
    pub quantity: i64,
    /// Unit price × quantity.
    pub line_total_cents: i64,
}

impl ServiceLine {
    /// Returns the unit price as Money.
    #[inline]
    pub const fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Returns the line total as Money.
    #[inline]
    pub const fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents)
    }
}

/// A breakdown extended with add-on service lines.
///
/// The base breakdown is flattened into the JSON object, so the extended
/// shape is a strict superset of [`PriceBreakdown`] on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BreakdownWithServices {
    /// The underlying tier/period breakdown.
    #[serde(flatten)]
    #[ts(flatten)]
    pub breakdown: PriceBreakdown,
    /// One line per recognized, positive-quantity add-on request, in
    /// request order.
    pub services: Vec<ServiceLine>,
    /// Sum of all service line totals.
    pub services_total_cents: i64,
    /// Breakdown total plus services total. Billing-period discounts do
    /// not compound onto add-ons.
    pub grand_total_cents: i64,
}

impl BreakdownWithServices {
    /// Returns the services subtotal as Money.
    #[inline]
    pub const fn services_total(&self) -> Money {
        Money::from_cents(self.services_total_cents)
    }

    /// Returns the grand total as Money.
    #[inline]
    pub const fn grand_total(&self) -> Money {
        Money::from_cents(self.grand_total_cents)
    }
}

// =============================================================================
// Savings Report
// =============================================================================

/// What switching from monthly to annual billing saves over a year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SavingsReport {
    /// The tier the comparison was computed for.
    pub tier: TierId,
    /// One month of monthly billing, in cents.
    pub monthly_payment_cents: i64,
    /// Twelve months of monthly billing, in cents.
    pub monthly_yearly_cost_cents: i64,
    /// One annual payment, in cents.
    pub annual_payment_cents: i64,
    /// Yearly cost difference, in cents.
    pub savings_cents: i64,
    /// Savings as a percentage of the monthly-billing yearly cost,
    /// rendered to one decimal place ("15.0"). A display figure, not an
    /// input to further arithmetic.
    pub savings_percent: String,
}

impl SavingsReport {
    /// Returns the yearly savings as Money.
    #[inline]
    pub const fn savings(&self) -> Money {
        Money::from_cents(self.savings_cents)
    }
}

// =============================================================================
// Operations
// =============================================================================

/// Computes a breakdown for a typed tier. Infallible: every input in the
/// type is in the catalog.
///
/// ## Example
/// ```rust
/// use neoforge_core::calculator::breakdown_for;
/// use neoforge_core::types::{BillingPeriod, TierId};
///
/// let quote = breakdown_for(TierId::Starter, BillingPeriod::Annual, 0);
/// assert_eq!(quote.total_cents, 1_018_980); // €10189.80
/// ```
pub fn breakdown_for(tier: TierId, period: BillingPeriod, overage_hours: i64) -> PriceBreakdown {
    let rates = tier.pricing();

    // Overage is only billed for finite-hours tiers and positive requests.
    let overage_cost = if overage_hours > 0 && !rates.included_hours.is_unlimited() {
        rates.hourly_rate().multiply_quantity(overage_hours)
    } else {
        Money::zero()
    };

    let monthly_total = rates.monthly() + overage_cost;
    let months = period.months();
    let subtotal = monthly_total * months;
    let rate = period.discount();
    let discount = subtotal.discount_amount(rate);
    let total = subtotal - discount;

    PriceBreakdown {
        tier,
        billing_period: period,
        base_price_cents: rates.monthly_cents,
        included_hours: rates.included_hours,
        overage_hours,
        overage_cost_cents: overage_cost.cents(),
        monthly_total_cents: monthly_total.cents(),
        months,
        subtotal_cents: subtotal.cents(),
        discount_cents: discount.cents(),
        discount_percent: rate.percent(),
        total_cents: total.cents(),
        currency: crate::QUOTE_CURRENCY,
    }
}

/// Computes a breakdown from an untyped tier identifier.
///
/// This is the string boundary: an unknown id yields
/// [`PricingError::InvalidTier`] as a returned value, never a panic.
/// `overage_hours` is recorded as given; values ≤ 0 simply bill no
/// overage.
pub fn compute_breakdown(
    tier_id: &str,
    period: BillingPeriod,
    overage_hours: i64,
) -> PricingResult<PriceBreakdown> {
    let tier = TierId::parse(tier_id).ok_or_else(|| PricingError::invalid_tier(tier_id))?;
    Ok(breakdown_for(tier, period, overage_hours))
}

/// Computes a breakdown extended with add-on service lines.
///
/// Requests are processed in the order given. Unknown add-on ids and
/// non-positive quantities are silently skipped - no line item, no error.
/// An invalid tier propagates unchanged and no add-on processing happens.
///
/// ## Example
/// ```rust
/// use neoforge_core::calculator::compute_breakdown_with_services;
/// use neoforge_core::types::BillingPeriod;
///
/// let quote = compute_breakdown_with_services(
///     "starter",
///     BillingPeriod::Monthly,
///     0,
///     &[("maintenance", 2), ("bogus", 5), ("training", 0)],
/// )
/// .unwrap();
/// assert_eq!(quote.services.len(), 1);
/// assert_eq!(quote.services_total_cents, 59_800);
/// ```
pub fn compute_breakdown_with_services(
    tier_id: &str,
    period: BillingPeriod,
    overage_hours: i64,
    add_ons: &[(&str, i64)],
) -> PricingResult<BreakdownWithServices> {
    let breakdown = compute_breakdown(tier_id, period, overage_hours)?;

    let mut services = Vec::new();
    let mut services_total = Money::zero();

    for &(id, quantity) in add_ons {
        let Some(service) = AddOnId::parse(id) else {
            continue;
        };
        if quantity <= 0 {
            continue;
        }

        let unit_price = service.unit_price();
        let line_total = unit_price.multiply_quantity(quantity);
        services_total += line_total;
        services.push(ServiceLine {
            service,
            unit_price_cents: unit_price.cents(),
            quantity,
            line_total_cents: line_total.cents(),
        });
    }

    let grand_total = breakdown.total() + services_total;

    Ok(BreakdownWithServices {
        breakdown,
        services,
        services_total_cents: services_total.cents(),
        grand_total_cents: grand_total.cents(),
    })
}

/// Computes a zero-overage breakdown for every tier at the given period.
///
/// Used by the comparison page: same cadence, all three price points.
pub fn compare_packages(period: BillingPeriod) -> BTreeMap<TierId, PriceBreakdown> {
    TierId::ALL
        .iter()
        .map(|&tier| (tier, breakdown_for(tier, period, 0)))
        .collect()
}

/// Computes what a year of annual billing saves over monthly billing.
///
/// Both comparison quotes are at zero overage. An unknown tier id yields
/// the invalid-tier error directly.
pub fn compute_annual_savings(tier_id: &str) -> PricingResult<SavingsReport> {
    let tier = TierId::parse(tier_id).ok_or_else(|| PricingError::invalid_tier(tier_id))?;

    let monthly = breakdown_for(tier, BillingPeriod::Monthly, 0);
    let annual = breakdown_for(tier, BillingPeriod::Annual, 0);

    let monthly_yearly_cost = monthly.total() * 12i64;
    let savings = monthly_yearly_cost - annual.total();
    let savings_percent = savings.cents() as f64 / monthly_yearly_cost.cents() as f64 * 100.0;

    Ok(SavingsReport {
        tier,
        monthly_payment_cents: monthly.total_cents,
        monthly_yearly_cost_cents: monthly_yearly_cost.cents(),
        annual_payment_cents: annual.total_cents,
        savings_cents: savings.cents(),
        savings_percent: format!("{:.1}", savings_percent),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_identity_all_tiers_all_periods() {
        // total = base × months × (1 − discount), exact in cents
        let periods = [
            BillingPeriod::Monthly,
            BillingPeriod::Quarterly,
            BillingPeriod::Annual,
        ];
        for tier in TierId::ALL {
            for period in periods {
                let quote = breakdown_for(tier, period, 0);
                let base = tier.pricing().monthly_cents;
                let bps = period.discount().bps() as i64;
                let expected = base * period.months() * (10_000 - bps) / 10_000;
                assert_eq!(quote.total_cents, expected, "{tier} {period}");
                assert_eq!(quote.subtotal_cents, base * period.months());
                assert_eq!(quote.overage_cost_cents, 0);
            }
        }
    }

    #[test]
    fn test_starter_annual_worked_example() {
        let quote = breakdown_for(TierId::Starter, BillingPeriod::Annual, 0);
        assert_eq!(quote.base_price_cents, 99_900); // €999
        assert_eq!(quote.months, 12);
        assert_eq!(quote.subtotal_cents, 1_198_800); // €11988
        assert_eq!(quote.discount_cents, 179_820); // €1798.20 (15%)
        assert_eq!(quote.discount_percent, 15);
        assert_eq!(quote.total_cents, 1_018_980); // €10189.80
        assert_eq!(quote.currency, Currency::Eur);
    }

    #[test]
    fn test_professional_quarterly_with_overage() {
        let quote = breakdown_for(TierId::Professional, BillingPeriod::Quarterly, 10);
        assert_eq!(quote.overage_cost_cents, 100_000); // 10h × €100
        assert_eq!(quote.monthly_total_cents, 349_900); // €3499
        assert_eq!(quote.subtotal_cents, 1_049_700); // €10497
        assert_eq!(quote.discount_cents, 52_485); // €524.85 (5%)
        assert_eq!(quote.discount_percent, 5);
        assert_eq!(quote.total_cents, 997_215); // €9972.15
    }

    #[test]
    fn test_enterprise_never_bills_overage() {
        for hours in [0, 1, 40, 1000] {
            let quote = breakdown_for(TierId::Enterprise, BillingPeriod::Monthly, hours);
            assert_eq!(quote.overage_cost_cents, 0, "hours = {hours}");
            assert_eq!(quote.monthly_total_cents, 499_900);
            assert_eq!(quote.overage_hours, hours);
            assert_eq!(quote.included_hours, IncludedHours::Unlimited);
        }
    }

    #[test]
    fn test_negative_overage_hours_bill_nothing() {
        // Hours ≤ 0 never enter the arithmetic; the request is still
        // recorded as given.
        let quote = breakdown_for(TierId::Starter, BillingPeriod::Monthly, -5);
        assert_eq!(quote.overage_hours, -5);
        assert_eq!(quote.overage_cost_cents, 0);
        assert_eq!(quote.total_cents, 99_900);
    }

    #[test]
    fn test_invalid_tier_is_an_error_value() {
        let err = compute_breakdown("invalid", BillingPeriod::Monthly, 0).unwrap_err();
        assert_eq!(err, PricingError::invalid_tier("invalid"));

        // Case matters: the published ids are lowercase
        assert!(compute_breakdown("Enterprise", BillingPeriod::Annual, 0).is_err());
    }

    #[test]
    fn test_services_filtering() {
        let quote = compute_breakdown_with_services(
            "starter",
            BillingPeriod::Monthly,
            0,
            &[("maintenance", 2), ("bogus", 5), ("training", 0)],
        )
        .unwrap();

        // Exactly one line survives: maintenance ×2
        assert_eq!(quote.services.len(), 1);
        let line = &quote.services[0];
        assert_eq!(line.service, AddOnId::Maintenance);
        assert_eq!(line.quantity, 2);
        assert_eq!(line.unit_price_cents, 29_900);
        assert_eq!(line.line_total_cents, 59_800);

        assert_eq!(quote.services_total_cents, 59_800);
        assert_eq!(
            quote.grand_total_cents,
            quote.breakdown.total_cents + quote.services_total_cents
        );
    }

    #[test]
    fn test_services_preserve_request_order() {
        let quote = compute_breakdown_with_services(
            "professional",
            BillingPeriod::Annual,
            0,
            &[("audit", 1), ("training", 2), ("urgentDev", 3)],
        )
        .unwrap();

        let order: Vec<AddOnId> = quote.services.iter().map(|l| l.service).collect();
        assert_eq!(
            order,
            vec![AddOnId::Audit, AddOnId::Training, AddOnId::UrgentDev]
        );
        // 999 + 2×150 + 3×200 = 1899
        assert_eq!(quote.services_total_cents, 189_900);
    }

    #[test]
    fn test_services_skip_negative_quantity() {
        let quote = compute_breakdown_with_services(
            "starter",
            BillingPeriod::Monthly,
            0,
            &[("audit", -1)],
        )
        .unwrap();
        assert!(quote.services.is_empty());
        assert_eq!(quote.services_total_cents, 0);
        assert_eq!(quote.grand_total_cents, quote.breakdown.total_cents);
    }

    #[test]
    fn test_services_propagate_invalid_tier() {
        let err = compute_breakdown_with_services(
            "platinum",
            BillingPeriod::Monthly,
            0,
            &[("maintenance", 1)],
        )
        .unwrap_err();
        assert_eq!(err, PricingError::invalid_tier("platinum"));
    }

    #[test]
    fn test_compare_packages_monthly() {
        let comparison = compare_packages(BillingPeriod::Monthly);
        assert_eq!(comparison.len(), 3);
        for tier in TierId::ALL {
            let quote = &comparison[&tier];
            assert_eq!(quote.discount_cents, 0);
            assert_eq!(quote.discount_percent, 0);
            assert_eq!(quote.total_cents, tier.pricing().monthly_cents);
            assert_eq!(quote.overage_hours, 0);
        }
    }

    #[test]
    fn test_compare_packages_annual_discounts_everyone() {
        let comparison = compare_packages(BillingPeriod::Annual);
        for quote in comparison.values() {
            assert_eq!(quote.discount_percent, 15);
            assert!(quote.discount_cents > 0);
        }
    }

    #[test]
    fn test_enterprise_annual_savings() {
        let report = compute_annual_savings("enterprise").unwrap();
        assert_eq!(report.monthly_payment_cents, 499_900);
        assert_eq!(report.monthly_yearly_cost_cents, 5_998_800); // €59988
        assert_eq!(report.annual_payment_cents, 5_098_980); // €50989.80
        assert_eq!(report.savings_cents, 899_820); // €8998.20
        assert_eq!(report.savings_percent, "15.0");
    }

    #[test]
    fn test_savings_percent_is_always_the_annual_discount() {
        // With a flat 15% annual discount the relative savings match the
        // discount rate for every tier.
        for tier in TierId::ALL {
            let report = compute_annual_savings(tier.as_str()).unwrap();
            assert_eq!(report.savings_percent, "15.0", "{tier}");
        }
    }

    #[test]
    fn test_savings_invalid_tier() {
        let err = compute_annual_savings("gold").unwrap_err();
        assert_eq!(err, PricingError::invalid_tier("gold"));
    }

    #[test]
    fn test_breakdown_wire_shape() {
        // The extended shape is a strict superset of the base shape
        let quote = compute_breakdown_with_services(
            "starter",
            BillingPeriod::Annual,
            0,
            &[("maintenance", 1)],
        )
        .unwrap();
        let json = serde_json::to_value(&quote).unwrap();

        // Flattened base fields sit at the top level
        assert_eq!(json["tier"], "starter");
        assert_eq!(json["billing_period"], "annual");
        assert_eq!(json["total_cents"], 1_018_980);
        // Extension fields next to them
        assert_eq!(json["services_total_cents"], 29_900);
        assert_eq!(json["grand_total_cents"], 1_048_880);
        assert_eq!(json["services"][0]["service"], "maintenance");
    }

    #[test]
    fn test_monetary_outputs_non_negative() {
        for tier in TierId::ALL {
            for period in [
                BillingPeriod::Monthly,
                BillingPeriod::Quarterly,
                BillingPeriod::Annual,
            ] {
                for hours in [0, 7, 500] {
                    let quote = breakdown_for(tier, period, hours);
                    assert!(quote.overage_cost_cents >= 0);
                    assert!(quote.subtotal_cents >= 0);
                    assert!(quote.discount_cents >= 0);
                    assert!(quote.total_cents >= 0);
                    // Discount never exceeds the subtotal
                    assert!(quote.discount_cents <= quote.subtotal_cents);
                }
            }
        }
    }
}
