//! # Quote CLI
//!
//! Computes a subscription quote and prints the rendered markup (or JSON)
//! to stdout.
//!
//! ## Usage
//! ```bash
//! # Starter tier, monthly, no extras (defaults)
//! cargo run -p neoforge-render --bin quote
//!
//! # Professional, quarterly, 10 overage hours
//! cargo run -p neoforge-render --bin quote -- --tier professional --period quarterly --hours 10
//!
//! # With add-on services (repeatable)
//! cargo run -p neoforge-render --bin quote -- --tier starter --service maintenance=2 --service audit=1
//!
//! # Machine-readable output
//! cargo run -p neoforge-render --bin quote -- --tier enterprise --period annual --json
//!
//! # Other reports
//! cargo run -p neoforge-render --bin quote -- --compare --period annual
//! cargo run -p neoforge-render --bin quote -- --savings --tier enterprise
//! cargo run -p neoforge-render --bin quote -- --cards
//! ```
//!
//! Unknown `--period` values fall back to monthly, matching the pricing
//! page's behavior for untyped input. Unknown `--tier` values produce the
//! invalid-tier result.

use std::env;

use tracing_subscriber::EnvFilter;

use neoforge_core::{
    compare_packages, compute_annual_savings, compute_breakdown,
    compute_breakdown_with_services, BillingPeriod,
};
use neoforge_render::{format_breakdown, format_breakdown_with_services, render_cards};

/// What the invocation asked for.
enum Report {
    Quote,
    Compare,
    Savings,
    Cards,
}

fn main() {
    init_tracing();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut tier = String::from("starter");
    let mut period = BillingPeriod::default();
    let mut hours: i64 = 0;
    let mut services: Vec<(String, i64)> = Vec::new();
    let mut json = false;
    let mut report = Report::Quote;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--tier" | "-t" => {
                if i + 1 < args.len() {
                    tier = args[i + 1].clone();
                    i += 1;
                }
            }
            "--period" | "-p" => {
                if i + 1 < args.len() {
                    // Unknown periods degrade to the monthly default
                    period = BillingPeriod::parse(&args[i + 1]).unwrap_or_default();
                    i += 1;
                }
            }
            "--hours" => {
                if i + 1 < args.len() {
                    hours = args[i + 1].parse().unwrap_or(0);
                    i += 1;
                }
            }
            "--service" | "-s" => {
                if i + 1 < args.len() {
                    let raw = &args[i + 1];
                    let (name, qty) = match raw.split_once('=') {
                        Some((name, qty)) => (name.to_string(), qty.parse().unwrap_or(1)),
                        None => (raw.clone(), 1),
                    };
                    services.push((name, qty));
                    i += 1;
                }
            }
            "--json" => json = true,
            "--compare" => report = Report::Compare,
            "--savings" => report = Report::Savings,
            "--cards" => report = Report::Cards,
            "--help" | "-h" => {
                print_help();
                return;
            }
            _ => {}
        }
        i += 1;
    }

    match report {
        Report::Quote => print_quote(&tier, period, hours, &services, json),
        Report::Compare => print_comparison(period, json),
        Report::Savings => print_savings(&tier, json),
        Report::Cards => println!("{}", render_cards()),
    }
}

fn print_quote(tier: &str, period: BillingPeriod, hours: i64, services: &[(String, i64)], json: bool) {
    if services.is_empty() {
        let outcome = compute_breakdown(tier, period, hours);
        if json {
            print_json_or_die(&outcome);
        } else {
            println!("{}", format_breakdown(&outcome));
        }
    } else {
        let requested: Vec<(&str, i64)> = services
            .iter()
            .map(|(name, qty)| (name.as_str(), *qty))
            .collect();
        let outcome = compute_breakdown_with_services(tier, period, hours, &requested);
        if json {
            print_json_or_die(&outcome);
        } else {
            println!("{}", format_breakdown_with_services(&outcome));
        }
    }
}

fn print_comparison(period: BillingPeriod, json: bool) {
    let comparison = compare_packages(period);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&comparison).expect("comparison serializes")
        );
        return;
    }

    println!("Package comparison ({} billing)", period);
    println!("================================");
    for (tier, quote) in &comparison {
        println!(
            "{:<13} {}{} for {} {}",
            tier.to_string(),
            quote.currency.symbol(),
            quote.total().format_fixed(),
            quote.months,
            if quote.months == 1 { "month" } else { "months" },
        );
    }
}

fn print_savings(tier: &str, json: bool) {
    match compute_annual_savings(tier) {
        Ok(report) => {
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).expect("report serializes")
                );
                return;
            }
            println!("Annual billing savings for {}", report.tier);
            println!("================================");
            println!("Monthly billing, 12 months: €{}",
                neoforge_core::Money::from_cents(report.monthly_yearly_cost_cents).format_fixed());
            println!("One annual payment:         €{}",
                neoforge_core::Money::from_cents(report.annual_payment_cents).format_fixed());
            println!("You save:                   €{} ({}%)",
                report.savings().format_fixed(), report.savings_percent);
        }
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}

/// Serializes any result value, exiting non-zero on the error arm.
fn print_json_or_die<T: serde::Serialize>(outcome: &Result<T, neoforge_core::PricingError>) {
    match outcome {
        Ok(value) => println!(
            "{}",
            serde_json::to_string_pretty(value).expect("quote serializes")
        ),
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}

fn print_help() {
    println!("NeoForge Quote CLI");
    println!();
    println!("Usage: quote [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -t, --tier <ID>        Tier: starter, professional, enterprise (default: starter)");
    println!("  -p, --period <P>       Billing period: monthly, quarterly, annual (default: monthly)");
    println!("      --hours <N>        Overage hours beyond the included allotment (default: 0)");
    println!("  -s, --service <N=Q>    Add-on service and quantity, repeatable (e.g. maintenance=2)");
    println!("      --json             Print JSON instead of markup");
    println!("      --compare          Compare all tiers at the chosen period");
    println!("      --savings          Show annual-billing savings for the chosen tier");
    println!("      --cards            Print the pricing comparison cards");
    println!("  -h, --help             Show this help message");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=neoforge_render=trace` - Trace the render layer only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,neoforge_render=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
