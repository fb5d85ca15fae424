//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  In a pricing engine that means quotes like €10189.799999999999.        │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every tier price, hourly rate and add-on price is a whole-cent       │
//! │    amount, and both discount rates are exact in basis points, so        │
//! │    integer cents reproduce every quote exactly.                         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use neoforge_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(99900); // €999.00
//!
//! // Arithmetic operations
//! let annual = price * 12;                        // €11988.00
//! let total = price + Money::from_cents(10000);   // €1099.00
//!
//! // NEVER do this:
//! // let bad = Money::from_float(999.0); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::DiscountRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (euro cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for savings deltas, credits
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  TierPricing.monthly ──► overage cost ──► monthly total ──► subtotal    │
/// │                                                                │        │
/// │  subtotal ──► discount ──► total ──► (+ services) ──► grand total       │
/// │                                                                         │
/// │  EVERY monetary value in the engine flows through this type             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use neoforge_core::money::Money;
    ///
    /// let price = Money::from_cents(249900); // Represents €2499.00
    /// assert_eq!(price.cents(), 249900);
    /// ```
    ///
    /// ## Why Cents?
    /// Using the smallest unit eliminates all floating-point concerns.
    /// The rate catalog, calculations, and JSON output all use cents.
    /// Only the render layer converts to euros for display.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from a whole number of euros.
    ///
    /// ## Example
    /// ```rust
    /// use neoforge_core::money::Money;
    ///
    /// let price = Money::from_euros(999); // €999.00
    /// assert_eq!(price.cents(), 99900);
    /// ```
    #[inline]
    pub const fn from_euros(euros: i64) -> Self {
        Money(euros * 100)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (euros) portion.
    ///
    /// ## Example
    /// ```rust
    /// use neoforge_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.euros(), 10);
    /// ```
    #[inline]
    pub const fn euros(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use neoforge_core::money::Money;
    ///
    /// let unit_price = Money::from_euros(299); // maintenance, €299.00
    /// let line_total = unit_price.multiply_quantity(2);
    /// assert_eq!(line_total.cents(), 59800); // €598.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Calculates the discount amount for a billing-period rate.
    ///
    /// ## Implementation
    /// We use integer math: `(amount * bps + 5000) / 10000`
    /// The +5000 provides half-up rounding (5000/10000 = 0.5). Every rate
    /// in the catalog (0, 500, 1500 bps) divides the relevant subtotals
    /// exactly, so the rounding term only matters for hypothetical rates.
    ///
    /// ## Example
    /// ```rust
    /// use neoforge_core::money::Money;
    /// use neoforge_core::types::DiscountRate;
    ///
    /// let subtotal = Money::from_euros(11988);  // starter, 12 months
    /// let rate = DiscountRate::from_bps(1500);  // 15%
    ///
    /// let discount = subtotal.discount_amount(rate);
    /// assert_eq!(discount.cents(), 179820); // €1798.20
    /// ```
    pub fn discount_amount(&self, rate: DiscountRate) -> Money {
        // i128 to prevent overflow on large amounts
        let cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(cents as i64)
    }

    /// Formats the value the way a bare number prints: no trailing zeros.
    ///
    /// Used for catalog-derived amounts that are whole euros or halves
    /// ("999", "3499.5"). Totals that need fixed-width formatting use
    /// [`Money::format_fixed`] instead.
    pub fn format_plain(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        if abs % 100 == 0 {
            format!("{}{}", sign, abs / 100)
        } else if abs % 10 == 0 {
            format!("{}{}.{}", sign, abs / 100, (abs % 100) / 10)
        } else {
            format!("{}{}.{:02}", sign, abs / 100, abs % 100)
        }
    }

    /// Formats the value with exactly two decimal places ("11988.00").
    pub fn format_fixed(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and log lines. The render layer uses
/// `format_plain`/`format_fixed` with the breakdown's currency tag for
/// actual display markup.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}€{}.{:02}", sign, self.euros().abs(), self.cents_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for month counts).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
