//! # Breakdown Markup
//!
//! Renders a computed [`PriceBreakdown`] as a display markup fragment.
//!
//! ## Fragment Structure
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  <div class="price-breakdown">                                          │
//! │    Tier ─ base price ─ included hours                                   │
//! │    [overage line, only when hours > 0]                                  │
//! │    monthly total ─ billing period ─ subtotal                            │
//! │    [discount line, only when a discount applies]                        │
//! │    [add-on section, only when line items exist]                         │
//! │    TOTAL DUE (grand total when add-ons are present)                     │
//! │  </div>                                                                 │
//! │                                                                         │
//! │  An invalid-tier result renders a fixed error fragment instead:         │
//! │  <div class="price-error">…</div>                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is string interpolation over values the engine already
//! computed. No pricing rule lives in this module.

use tracing::debug;

use neoforge_core::{BreakdownWithServices, PriceBreakdown, PricingError, PricingResult};

// =============================================================================
// Public Entry Points
// =============================================================================

/// Renders a breakdown result as a markup fragment.
///
/// An `Err` renders the fixed error fragment; no other formatting happens.
pub fn format_breakdown(outcome: &PricingResult<PriceBreakdown>) -> String {
    match outcome {
        Ok(breakdown) => {
            debug!(tier = %breakdown.tier, period = %breakdown.billing_period, "rendering breakdown");
            render_fragment(breakdown, None)
        }
        Err(err) => format_error(err),
    }
}

/// Renders an add-on-extended breakdown result as a markup fragment.
pub fn format_breakdown_with_services(outcome: &PricingResult<BreakdownWithServices>) -> String {
    match outcome {
        Ok(quote) => {
            debug!(
                tier = %quote.breakdown.tier,
                services = quote.services.len(),
                "rendering breakdown with services"
            );
            render_fragment(&quote.breakdown, Some(quote))
        }
        Err(err) => format_error(err),
    }
}

/// The fixed error fragment for an invalid-tier result.
pub fn format_error(err: &PricingError) -> String {
    format!(r#"<div class="price-error">{}</div>"#, err)
}

// =============================================================================
// Fragment Assembly
// =============================================================================

fn render_fragment(breakdown: &PriceBreakdown, extended: Option<&BreakdownWithServices>) -> String {
    let symbol = breakdown.currency.symbol();
    let mut html = String::from(r#"<div class="price-breakdown">"#);
    html.push_str("<h3>Price Breakdown</h3>");

    push_row(
        &mut html,
        "Tier:",
        &breakdown.tier.as_str().to_uppercase(),
    );
    push_row(
        &mut html,
        "Monthly base price:",
        &format!("{}{}", symbol, breakdown.base_price().format_plain()),
    );
    push_row(
        &mut html,
        "Included hours:",
        &breakdown.included_hours.to_string(),
    );

    if breakdown.overage_hours > 0 {
        push_row(
            &mut html,
            &format!("Overage hours ({}h):", breakdown.overage_hours),
            &format!("{}{}", symbol, breakdown.overage_cost().format_plain()),
        );
    }

    push_row(
        &mut html,
        "Monthly total:",
        &format!("{}{}", symbol, breakdown.monthly_total().format_plain()),
    );
    push_row(
        &mut html,
        "Billing period:",
        &format!(
            "{} {}",
            breakdown.months,
            if breakdown.months == 1 { "month" } else { "months" }
        ),
    );
    push_row(
        &mut html,
        "Subtotal:",
        &format!("{}{}", symbol, breakdown.subtotal().format_fixed()),
    );

    if breakdown.discount().is_positive() {
        html.push_str(&format!(
            r#"<div class="price-item discount"><span>Discount ({}%):</span><span>-{}{}</span></div>"#,
            breakdown.discount_percent,
            symbol,
            breakdown.discount().format_fixed()
        ));
    }

    if let Some(quote) = extended {
        if !quote.services.is_empty() {
            html.push_str(r#"<div class="services-section">"#);
            html.push_str("<h4>Add-On Services:</h4>");
            for line in &quote.services {
                push_row(
                    &mut html,
                    &format!(
                        "{} ({}x {}{}):",
                        line.service,
                        line.quantity,
                        symbol,
                        line.unit_price().format_plain()
                    ),
                    &format!("{}{}", symbol, line.line_total().format_plain()),
                );
            }
            push_row(
                &mut html,
                "Services total:",
                &format!("{}{}", symbol, quote.services_total().format_plain()),
            );
            html.push_str("</div>");
        }
    }

    // Grand total when add-ons are present, else the plain total
    let final_total = match extended {
        Some(quote) => quote.grand_total(),
        None => breakdown.total(),
    };
    html.push_str(&format!(
        r#"<div class="price-item total"><span>TOTAL DUE:</span><span>{}{}</span></div>"#,
        symbol,
        final_total.format_fixed()
    ));

    html.push_str("</div>");
    html
}

fn push_row(html: &mut String, label: &str, value: &str) {
    html.push_str(&format!(
        r#"<div class="price-item"><span>{}</span><span>{}</span></div>"#,
        label, value
    ));
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use neoforge_core::types::BillingPeriod;
    use neoforge_core::{compute_breakdown, compute_breakdown_with_services};

    #[test]
    fn test_basic_breakdown_markup() {
        let outcome = compute_breakdown("starter", BillingPeriod::Annual, 0);
        let html = format_breakdown(&outcome);

        assert!(html.starts_with(r#"<div class="price-breakdown">"#));
        assert!(html.contains("STARTER"));
        assert!(html.contains("€999"));
        assert!(html.contains("12 months"));
        assert!(html.contains("11988.00"));
        assert!(html.contains("Discount (15%):"));
        assert!(html.contains("-€1798.20"));
        assert!(html.contains("TOTAL DUE:"));
        assert!(html.contains("€10189.80"));
        // No overage requested, no overage line
        assert!(!html.contains("Overage hours"));
        assert!(!html.contains("services-section"));
    }

    #[test]
    fn test_monthly_has_no_discount_line_and_singular_noun() {
        let outcome = compute_breakdown("professional", BillingPeriod::Monthly, 0);
        let html = format_breakdown(&outcome);

        assert!(html.contains("1 month<"));
        assert!(!html.contains("Discount ("));
        assert!(html.contains("€2499.00")); // total, fixed formatting
    }

    #[test]
    fn test_overage_line_present() {
        let outcome = compute_breakdown("professional", BillingPeriod::Quarterly, 10);
        let html = format_breakdown(&outcome);

        assert!(html.contains("Overage hours (10h):"));
        assert!(html.contains("€1000")); // 10h × €100
        assert!(html.contains("€3499")); // monthly total
        assert!(html.contains("Discount (5%):"));
        assert!(html.contains("€9972.15"));
    }

    #[test]
    fn test_services_section() {
        let outcome = compute_breakdown_with_services(
            "starter",
            BillingPeriod::Monthly,
            0,
            &[("maintenance", 2), ("bogus", 9)],
        );
        let html = format_breakdown_with_services(&outcome);

        assert!(html.contains("Add-On Services:"));
        assert!(html.contains("maintenance (2x €299):"));
        assert!(html.contains("€598"));
        assert!(html.contains("Services total:"));
        // Grand total: 999 + 598
        assert!(html.contains("€1597.00"));
        // The unknown id never rendered anything
        assert!(!html.contains("bogus"));
    }

    #[test]
    fn test_no_services_section_when_all_filtered() {
        let outcome = compute_breakdown_with_services(
            "starter",
            BillingPeriod::Monthly,
            0,
            &[("bogus", 2), ("training", 0)],
        );
        let html = format_breakdown_with_services(&outcome);

        assert!(!html.contains("services-section"));
        assert!(html.contains("€999.00")); // plain total is the final total
    }

    #[test]
    fn test_error_fragment() {
        let outcome = compute_breakdown("platinum", BillingPeriod::Monthly, 0);
        let html = format_breakdown(&outcome);

        assert_eq!(
            html,
            r#"<div class="price-error">invalid tier 'platinum': choose starter, professional or enterprise</div>"#
        );
    }

    #[test]
    fn test_error_fragment_for_extended_quote() {
        let outcome =
            compute_breakdown_with_services("platinum", BillingPeriod::Monthly, 0, &[]);
        let html = format_breakdown_with_services(&outcome);
        assert!(html.starts_with(r#"<div class="price-error">"#));
        assert!(!html.contains("price-breakdown"));
    }
}
