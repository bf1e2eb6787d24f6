//! CLI entry point for contact-audit.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

use contact_audit::aggregate::invalid_counts_by_city;
use contact_audit::contact::Contact;
use contact_audit::report::{city_report, contact_report};
use contact_audit::validate::validate_all;

#[derive(Parser)]
#[command(name = "contact-audit")]
#[command(version)]
#[command(about = "Validate contact emails and phones, report per contact and per city")]
struct Cli {
    /// Path to a JSON file containing an array of contact records
    input: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let contacts = Contact::load_all(&cli.input)?;
    let validated = validate_all(contacts);
    let counts = invalid_counts_by_city(&validated);

    // Render both reports before printing anything so a failure never leaves
    // partial output on stdout.
    let contacts_out = contact_report(&validated);
    let cities_out = city_report(&counts);

    print!("{}", contacts_out);
    print!("{}", cities_out);

    Ok(())
}
