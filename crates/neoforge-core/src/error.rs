//! # Error Types
//!
//! Domain-specific error types for neoforge-core.
//!
//! ## Error Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Surface                                   │
//! │                                                                         │
//! │  PricingError::InvalidTier  - the ONLY failure in the engine            │
//! │                                                                         │
//! │  Everything else degenerates gracefully by construction:                │
//! │  ├── billing period     → an enum; invalid values cannot exist          │
//! │  ├── unknown add-on id  → skipped, no line item, no error               │
//! │  └── non-positive qty   → skipped, no line item, no error               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the requested tier id)
//! 3. Errors are enum variants, never String
//! 4. Errors are returned values, never panics

use thiserror::Error;

// =============================================================================
// Pricing Error
// =============================================================================

/// Pricing engine errors.
///
/// A breakdown request can only fail one way: the caller asked for a tier
/// that is not in the published price list. Every computation that takes a
/// tier id checks for and propagates this result rather than proceeding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// Tier identifier is not one of the fixed three.
    ///
    /// ## When This Occurs
    /// - Typo in a caller-supplied tier id ("pro", "Starter")
    /// - A stale id after a price-list rename
    #[error("invalid tier '{requested}': choose starter, professional or enterprise")]
    InvalidTier { requested: String },
}

impl PricingError {
    /// Builds the invalid-tier error for a rejected identifier.
    pub fn invalid_tier(requested: impl Into<String>) -> Self {
        PricingError::InvalidTier {
            requested: requested.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with PricingError.
pub type PricingResult<T> = Result<T, PricingError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        let err = PricingError::invalid_tier("platinum");
        assert_eq!(
            err.to_string(),
            "invalid tier 'platinum': choose starter, professional or enterprise"
        );
    }

    #[test]
    fn test_error_is_a_value() {
        // The error participates in equality so tests and callers can
        // match on it without string comparison.
        assert_eq!(
            PricingError::invalid_tier("x"),
            PricingError::InvalidTier {
                requested: "x".to_string()
            }
        );
    }
}
