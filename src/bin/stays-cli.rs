//! Operator CLI for hotel-stays.
//!
//! Runs the domain rules locally, without the HTTP server, to check how a
//! link will be stored, what score a set of reviews yields, or what a stay costs.
//!
//! # Usage
//!
//! ```bash
//! # Normalize hotel image links
//! cargo run --bin stays-cli -- normalize "https://drive.google.com/file/d/abc123/view"
//!
//! # Strict mode: require an image extension or a known image host
//! cargo run --bin stays-cli -- normalize --strict example.com/lobby
//!
//! # Aggregate star ratings
//! cargo run --bin stays-cli -- rating 5 5 4
//!
//! # Price a stay
//! cargo run --bin stays-cli -- quote --check-in 2026-01-25 --check-out 2026-01-28 --rooms 2 --rate 120
//! ```

use hotel_stays::domain::pricing::{MAX_NIGHTLY_RATE, quote_stay};
use hotel_stays::domain::rating::aggregate_stars;
use hotel_stays::utils::image_url::{ValidationMode, classify_url, normalize_image_url_with};

use anyhow::{Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for hotel-stays domain checks.
#[derive(Parser)]
#[command(name = "stays-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize hotel image links
    Normalize {
        /// Links as pasted by the owner
        #[arg(required = true)]
        urls: Vec<String>,

        /// Require an image extension or a known image host
        #[arg(long)]
        strict: bool,
    },

    /// Aggregate star ratings into a display score and label
    Rating {
        /// Star ratings, 1 to 5
        #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
        stars: Vec<u8>,
    },

    /// Price a stay
    Quote {
        /// Check-in date (YYYY-MM-DD)
        #[arg(long)]
        check_in: NaiveDate,

        /// Check-out date (YYYY-MM-DD)
        #[arg(long)]
        check_out: NaiveDate,

        /// Number of rooms
        #[arg(long, default_value_t = 1)]
        rooms: u32,

        /// Nightly rate per room
        #[arg(long)]
        rate: f64,

        /// Maximum rooms per booking
        #[arg(long, default_value_t = 10)]
        max_rooms: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize { urls, strict } => handle_normalize(&urls, strict),
        Commands::Rating { stars } => {
            handle_rating(&stars);
            Ok(())
        }
        Commands::Quote {
            check_in,
            check_out,
            rooms,
            rate,
            max_rooms,
        } => handle_quote(check_in, check_out, rooms, rate, max_rooms),
    }
}

fn handle_normalize(urls: &[String], strict: bool) -> Result<()> {
    let mode = if strict {
        ValidationMode::Strict
    } else {
        ValidationMode::Permissive
    };

    println!("{}", "Image links".bright_blue().bold());
    println!();

    let mut failed = 0;
    for raw in urls {
        match normalize_image_url_with(raw, mode) {
            Ok(url) => {
                println!("  {}", raw.bright_black());
                println!("  {} {}", "->".green(), url.cyan());
                println!("     {}", classify_url(raw).message().green());
            }
            Err(e) => {
                failed += 1;
                println!("  {}", raw.bright_black());
                println!("  {} {}", "x".red(), e.to_string().red());
            }
        }
        println!();
    }

    if failed > 0 {
        bail!("{failed} of {} link(s) rejected", urls.len());
    }

    Ok(())
}

fn handle_rating(stars: &[u8]) {
    println!("{}", "Rating".bright_blue().bold());
    println!();

    match aggregate_stars(stars) {
        Some(rating) => {
            println!(
                "  Score:   {} {}",
                format!("{:.1}", rating.display_score).bright_yellow().bold(),
                rating.label.to_string().green()
            );
            println!("  Average: {:.2} stars", rating.average_stars);
            println!("  Reviews: {}", rating.count);
        }
        None => println!("  {}", "No reviews yet".yellow()),
    }
    println!();
}

fn handle_quote(
    check_in: NaiveDate,
    check_out: NaiveDate,
    rooms: u32,
    rate: f64,
    max_rooms: u32,
) -> Result<()> {
    let quote = quote_stay(rate, check_in, check_out, rooms, max_rooms)?;

    println!("{}", "Booking quote".bright_blue().bold());
    println!();
    println!("  Stay:   {} -> {}", check_in, check_out);
    println!("  Nights: {}", quote.nights);
    println!("  Rooms:  {}", quote.rooms);
    if quote.nightly_rate < rate {
        println!(
            "  Rate:   {:.2} {}",
            quote.nightly_rate,
            format!("(capped from {rate:.2} at {MAX_NIGHTLY_RATE:.0})").yellow()
        );
    } else {
        println!("  Rate:   {:.2}", quote.nightly_rate);
    }
    println!("  {}", "─".repeat(30).bright_black());
    println!(
        "  Total:  {}",
        format!("{:.2}", quote.total).bright_yellow().bold()
    );
    println!();

    Ok(())
}
