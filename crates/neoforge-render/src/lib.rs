//! # neoforge-render: Presentation Layer for NeoForge Pricing
//!
//! This crate turns computed pricing values into display markup strings.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     NeoForge Pricing Display Flow                       │
//! │                                                                         │
//! │  neoforge-core                                                          │
//! │  (PriceBreakdown, BreakdownWithServices, errors)                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 neoforge-render (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────────────┐         ┌─────────────────┐              │   │
//! │  │   │   breakdown     │         │     cards       │              │   │
//! │  │   │  price detail   │         │  comparison     │              │   │
//! │  │   │  fragments      │         │  card fragments │              │   │
//! │  │   └─────────────────┘         └─────────────────┘              │   │
//! │  │                                                                 │   │
//! │  │   STRING INTERPOLATION ONLY • NO PRICING RULES • NO DOM         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  markup strings handed to the page (single fire-and-forget write)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`breakdown`] - Renders a computed breakdown (or the error fragment)
//! - [`cards`] - The package descriptor table and comparison-card markup
//!
//! ## Usage
//!
//! ```rust
//! use neoforge_core::compute_breakdown;
//! use neoforge_core::types::BillingPeriod;
//! use neoforge_render::format_breakdown;
//!
//! let outcome = compute_breakdown("starter", BillingPeriod::Annual, 0);
//! let html = format_breakdown(&outcome);
//! assert!(html.contains("TOTAL DUE:"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod breakdown;
pub mod cards;

// =============================================================================
// Re-exports
// =============================================================================

pub use breakdown::{format_breakdown, format_breakdown_with_services, format_error};
pub use cards::{
    card_for, cards_in_price_range, featured_card, render_card, render_cards, CardFeature,
    PackageCard, PACKAGE_CARDS,
};
