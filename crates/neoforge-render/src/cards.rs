//! # Pricing Cards
//!
//! The fixed package descriptor table and the comparison-card markup built
//! from it.
//!
//! ## Card Anatomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  <article class="pricing-card featured">                                │
//! │    [popular badge, featured card only]                                  │
//! │    header: icon ─ name ─ subtitle                                       │
//! │    price: currency ─ amount (thousands-separated) ─ /month              │
//! │    feature list: included / not-included classes                        │
//! │    CTA link                                                             │
//! │  </article>                                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The descriptor table is marketing copy, not pricing truth: the prices
//! shown here mirror the catalog in neoforge-core, and a mismatch is a bug
//! (covered by a test below).

use tracing::debug;

use neoforge_core::{Currency, TierId};

// =============================================================================
// Package Descriptors
// =============================================================================

/// One line in a card's feature list.
#[derive(Debug, Clone, Copy)]
pub struct CardFeature {
    /// Display text.
    pub text: &'static str,
    /// Whether this tier includes the feature.
    pub included: bool,
}

/// Fixed display descriptor for one tier's comparison card.
#[derive(Debug, Clone, Copy)]
pub struct PackageCard {
    /// The tier this card advertises.
    pub tier: TierId,
    /// Display name.
    pub name: &'static str,
    /// Icon glyph shown in the card header.
    pub icon: &'static str,
    /// One-line pitch under the name.
    pub subtitle: &'static str,
    /// Advertised monthly price in cents (mirrors the catalog).
    pub monthly_price_cents: i64,
    /// Whether this card gets the highlighted treatment.
    pub featured: bool,
    /// Badge text for the featured card.
    pub featured_badge: Option<&'static str>,
    /// Feature list with inclusion flags.
    pub features: &'static [CardFeature],
}

const fn feature(text: &'static str, included: bool) -> CardFeature {
    CardFeature { text, included }
}

/// The three comparison cards, in ascending price order.
pub const PACKAGE_CARDS: [PackageCard; 3] = [
    PackageCard {
        tier: TierId::Starter,
        name: "Starter",
        icon: "🚀",
        subtitle: "Perfect for startups and small projects",
        monthly_price_cents: 99_900,
        featured: false,
        featured_badge: None,
        features: &[
            feature("Technology consulting", true),
            feature("Simple application development", true),
            feature("Email support (48h response)", true),
            feature("Up to 40 development hours/month", true),
            feature("1 revision/iteration", true),
            feature("Basic documentation", true),
            feature("Basic hosting included (1 year)", true),
            feature("AI/ML solutions", false),
            feature("Game development", false),
            feature("Priority support", false),
            feature("Dedicated manager", false),
        ],
    },
    PackageCard {
        tier: TierId::Professional,
        name: "Professional",
        icon: "⭐",
        subtitle: "Ideal for growing businesses",
        monthly_price_cents: 249_900,
        featured: true,
        featured_badge: Some("MOST POPULAR"),
        features: &[
            feature("Advanced consulting", true),
            feature("Complex application development", true),
            feature("Priority support (24h response)", true),
            feature("Up to 100 development hours/month", true),
            feature("3 revisions/iterations", true),
            feature("Complete documentation", true),
            feature("Premium hosting included (2 years)", true),
            feature("Basic AI/ML solutions", true),
            feature("Performance optimization", true),
            feature("Weekly code review", true),
            feature("Dedicated 24/7 manager", false),
        ],
    },
    PackageCard {
        tier: TierId::Enterprise,
        name: "Enterprise",
        icon: "👑",
        subtitle: "Complete solutions for corporations",
        monthly_price_cents: 499_900,
        featured: false,
        featured_badge: None,
        features: &[
            feature("Full strategic consulting", true),
            feature("Enterprise-grade development", true),
            feature("Dedicated 24/7 support", true),
            feature("Unlimited development hours", true),
            feature("Unlimited revisions", true),
            feature("Complete enterprise documentation", true),
            feature("Dedicated hosting included (5 years)", true),
            feature("Advanced AI/ML solutions", true),
            feature("Full game development", true),
            feature("Dedicated hardware optimization", true),
            feature("Dedicated 24/7 project manager", true),
            feature("Team training included", true),
            feature("99.9% SLA guarantee", true),
            feature("Access to proprietary technology", true),
        ],
    },
];

// =============================================================================
// Descriptor Lookups
// =============================================================================

/// Returns the card descriptor for a tier.
pub fn card_for(tier: TierId) -> Option<&'static PackageCard> {
    PACKAGE_CARDS.iter().find(|card| card.tier == tier)
}

/// Returns the featured ("most popular") card, if any.
pub fn featured_card() -> Option<&'static PackageCard> {
    PACKAGE_CARDS.iter().find(|card| card.featured)
}

/// Returns the cards whose monthly price falls inside the given range
/// (inclusive, in cents).
pub fn cards_in_price_range(min_cents: i64, max_cents: i64) -> Vec<&'static PackageCard> {
    PACKAGE_CARDS
        .iter()
        .filter(|card| card.monthly_price_cents >= min_cents && card.monthly_price_cents <= max_cents)
        .collect()
}

// =============================================================================
// Card Markup
// =============================================================================

/// Renders one comparison card as an `<article>` fragment.
pub fn render_card(card: &PackageCard) -> String {
    let featured_class = if card.featured { " featured" } else { "" };
    let mut html = format!(r#"<article class="pricing-card{}">"#, featured_class);

    if card.featured {
        if let Some(badge) = card.featured_badge {
            html.push_str(&format!(r#"<div class="popular-badge">{}</div>"#, badge));
        }
    }

    html.push_str(r#"<div class="pricing-header">"#);
    html.push_str(&format!(r#"<div class="tier-icon">{}</div>"#, card.icon));
    html.push_str(&format!("<h2>{}</h2>", card.name));
    html.push_str(&format!(r#"<p class="tier-subtitle">{}</p>"#, card.subtitle));
    html.push_str("</div>");

    html.push_str(r#"<div class="pricing-price">"#);
    html.push_str(&format!(
        r#"<span class="currency">{}</span>"#,
        Currency::Eur.symbol()
    ));
    html.push_str(&format!(
        r#"<span class="amount">{}</span>"#,
        group_thousands(card.monthly_price_cents / 100)
    ));
    html.push_str(r#"<span class="period">/month</span>"#);
    html.push_str("</div>");

    html.push_str(r#"<ul class="pricing-features">"#);
    for feature in card.features {
        let class = if feature.included {
            "feature-included"
        } else {
            "feature-not-included"
        };
        html.push_str(&format!(r#"<li class="{}">{}</li>"#, class, feature.text));
    }
    html.push_str("</ul>");

    html.push_str(&format!(
        r#"<a href="contact.html" class="pricing-button">Choose {}</a>"#,
        card.name
    ));

    html.push_str("</article>");
    html
}

/// Renders all three comparison cards, concatenated in table order.
pub fn render_cards() -> String {
    debug!(cards = PACKAGE_CARDS.len(), "rendering pricing cards");
    PACKAGE_CARDS.iter().map(render_card).collect()
}

/// Groups a whole-euro amount with thousands separators ("2,499").
fn group_thousands(amount: i64) -> String {
    let digits = amount.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_prices_mirror_the_catalog() {
        for card in &PACKAGE_CARDS {
            assert_eq!(
                card.monthly_price_cents,
                card.tier.pricing().monthly_cents,
                "card price for {} drifted from the catalog",
                card.name
            );
        }
    }

    #[test]
    fn test_card_lookups() {
        assert_eq!(card_for(TierId::Starter).unwrap().name, "Starter");
        assert_eq!(featured_card().unwrap().tier, TierId::Professional);

        let mid_range = cards_in_price_range(100_000, 300_000);
        assert_eq!(mid_range.len(), 1);
        assert_eq!(mid_range[0].tier, TierId::Professional);

        assert!(cards_in_price_range(1, 2).is_empty());
        assert_eq!(cards_in_price_range(0, i64::MAX).len(), 3);
    }

    #[test]
    fn test_render_card_basic() {
        let html = render_card(card_for(TierId::Starter).unwrap());

        assert!(html.starts_with(r#"<article class="pricing-card">"#));
        assert!(html.contains(r#"<div class="tier-icon">🚀</div>"#));
        assert!(html.contains("<h2>Starter</h2>"));
        assert!(html.contains(r#"<span class="amount">999</span>"#));
        assert!(html.contains(r#"<li class="feature-included">Technology consulting</li>"#));
        assert!(html.contains(r#"<li class="feature-not-included">Game development</li>"#));
        assert!(html.contains("Choose Starter"));
        // Not the featured card
        assert!(!html.contains("popular-badge"));
    }

    #[test]
    fn test_render_featured_card() {
        let html = render_card(featured_card().unwrap());

        assert!(html.starts_with(r#"<article class="pricing-card featured">"#));
        assert!(html.contains(r#"<div class="popular-badge">MOST POPULAR</div>"#));
        assert!(html.contains(r#"<span class="amount">2,499</span>"#));
    }

    #[test]
    fn test_render_cards_concatenates_all() {
        let html = render_cards();
        assert_eq!(html.matches("<article").count(), 3);
        assert!(html.contains("<h2>Starter</h2>"));
        assert!(html.contains("<h2>Professional</h2>"));
        assert!(html.contains("<h2>Enterprise</h2>"));
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(2499), "2,499");
        assert_eq!(group_thousands(4999), "4,999");
        assert_eq!(group_thousands(1_000_000), "1,000,000");
        assert_eq!(group_thousands(0), "0");
    }
}
