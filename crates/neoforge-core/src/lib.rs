//! # neoforge-core: Pure Pricing Logic for NeoForge Subscriptions
//!
//! This crate is the **heart** of NeoForge pricing. It contains all pricing
//! rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     NeoForge Pricing Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Website Frontend                             │   │
//! │  │    Pricing page ──► Calculator widget ──► Comparison cards      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ rendered markup / JSON                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    neoforge-render                              │   │
//! │  │    breakdown markup, pricing cards, quote CLI                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ neoforge-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌────────────┐  │   │
//! │  │   │   types   │  │   money   │  │  catalog  │  │ calculator │  │   │
//! │  │   │  TierId   │  │   Money   │  │ TierRates │  │ Breakdown  │  │   │
//! │  │   │  Periods  │  │  DisAmt   │  │  AddOns   │  │  Savings   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO DISPLAY STRINGS • PURE FUNCTIONS     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (TierId, BillingPeriod, IncludedHours, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The fixed, published tier and add-on rate tables
//! - [`calculator`] - Breakdown, comparison and savings computations
//! - [`error`] - The pricing domain error
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and display concerns are FORBIDDEN here
//! 3. **Integer Money**: All monetary values are euro cents (i64) to avoid float errors
//! 4. **Errors as Values**: The one domain error is returned, never thrown
//!
//! ## Example Usage
//!
//! ```rust
//! use neoforge_core::calculator::compute_breakdown;
//! use neoforge_core::types::BillingPeriod;
//!
//! // Starter tier, paid annually, no overage
//! let quote = compute_breakdown("starter", BillingPeriod::Annual, 0).unwrap();
//!
//! // €999 × 12 months − 15% = €10189.80
//! assert_eq!(quote.total_cents, 1_018_980);
//! assert_eq!(quote.discount_percent, 15);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use neoforge_core::Money` instead of
// `use neoforge_core::money::Money`

pub use calculator::{
    compare_packages, compute_annual_savings, compute_breakdown,
    compute_breakdown_with_services, BreakdownWithServices, PriceBreakdown, SavingsReport,
    ServiceLine,
};
pub use catalog::{AddOnId, TierPricing};
pub use error::{PricingError, PricingResult};
pub use money::Money;
pub use types::{BillingPeriod, Currency, DiscountRate, IncludedHours, TierId};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The currency every published price is quoted in.
///
/// ## Why a constant?
/// The price list is euro-only today, but every breakdown carries a
/// currency tag so the wire shape won't change if a second price list is
/// ever published. This constant is the single place that decision lives.
pub const QUOTE_CURRENCY: Currency = Currency::Eur;
