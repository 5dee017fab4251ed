//! Residence Right CLI
//!
//! Values a single case given on the command line and prints the breakdown.
//! Amount and area flags accept separators, e.g. `--building-value 30,000,000`.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use residence_right::{
    calculate_checked, AnalyticsConfig, AnalyticsSink, CalculationRecord, Gender, InputCase,
    ResultRecord,
};
use residence_right::format::{format_with_commas, format_yen, parse_formatted_number};
use residence_right::tables::{STRUCTURE_USEFUL_LIVES, LIFE_TABLE_EDITION, STATUTORY_RATE};

#[derive(Parser)]
#[command(name = "residence_right", version, about = "Spousal residence right valuation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Value one case
    Value(ValueArgs),
    /// List construction types and their useful lives
    Structures,
}

fn parse_amount(s: &str) -> Result<f64, String> {
    parse_formatted_number(s).ok_or_else(|| format!("'{}' is not a number", s))
}

#[derive(Args)]
struct ValueArgs {
    /// Date of death of the decedent (YYYY-MM-DD)
    #[arg(long)]
    inheritance_date: NaiveDate,

    /// Date of the estate division, the valuation date (YYYY-MM-DD)
    #[arg(long)]
    division_date: NaiveDate,

    /// Date the building was newly built (YYYY-MM-DD)
    #[arg(long)]
    construction_date: NaiveDate,

    /// Construction type (see `structures`)
    #[arg(long)]
    structure: String,

    /// Fixed-asset tax assessment of the building (yen)
    #[arg(long, value_parser = parse_amount)]
    building_value: f64,

    /// Total floor area (m²)
    #[arg(long, value_parser = parse_amount)]
    building_area: f64,

    /// Floor area let to tenants (m²)
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    rental_area: f64,

    /// Occupancy of the let part (%)
    #[arg(long, default_value_t = 0.0)]
    rental_ratio: f64,

    /// Site area (m²)
    #[arg(long, value_parser = parse_amount)]
    land_area: f64,

    /// Road price (yen per m²)
    #[arg(long, value_parser = parse_amount)]
    road_price: f64,

    /// Land correction rate (%)
    #[arg(long, default_value_t = 100.0)]
    land_correction: f64,

    /// Leasehold ratio (%): 30, 40, ..., 90
    #[arg(long, default_value_t = 90.0)]
    lease_ratio: f64,

    /// Spouse's date of birth (YYYY-MM-DD)
    #[arg(long)]
    spouse_birthday: NaiveDate,

    /// Spouse's gender: male or female
    #[arg(long, default_value = "female")]
    spouse_gender: Gender,

    /// Decedent's share of the building (%)
    #[arg(long, default_value_t = 100.0)]
    building_ownership_ratio: f64,

    /// Decedent's share of the land (%)
    #[arg(long, default_value_t = 100.0)]
    land_ownership_ratio: f64,

    /// Print the case and results as JSON
    #[arg(long)]
    json: bool,
}

impl ValueArgs {
    fn to_case(&self) -> InputCase {
        InputCase {
            inheritance_date: self.inheritance_date,
            division_date: self.division_date,
            construction_date: self.construction_date,
            structure: self.structure.trim().to_string(),
            building_value: self.building_value,
            building_area: self.building_area,
            rental_area: self.rental_area,
            rental_ratio: self.rental_ratio,
            land_area: self.land_area,
            road_price: self.road_price,
            land_correction: self.land_correction,
            lease_ratio: self.lease_ratio,
            spouse_birthday: self.spouse_birthday,
            spouse_gender: self.spouse_gender,
            building_ownership_ratio: self.building_ownership_ratio,
            land_ownership_ratio: self.land_ownership_ratio,
        }
    }
}

fn print_report(case: &InputCase, r: &ResultRecord) {
    println!("Spousal Residence Right Valuation");
    println!("=================================\n");

    println!("Division date: {}", case.division_date);
    println!("  Spouse age:        {:>6}  ({})", r.spouse_age, case.spouse_gender.as_str());
    println!("  Remaining life:    {:>6} years  ({})", r.life, LIFE_TABLE_EDITION);
    println!("  PV factor:         {:>6.3}  ({:.0}%)", r.pvf, STATUTORY_RATE * 100.0);
    println!("  Elapsed years:     {:>6}", r.elapsed_years);
    println!("  Useful life:       {:>6}", r.useful_life);
    println!("  Remaining years:   {:>6}", r.remaining_years);
    println!("  Residential area:  {:>9} m²  ({:.2}%)",
        format_with_commas(r.residential_area), r.residential_ratio * 100.0);
    println!();

    let rows = [
        ("Building tax value", r.building_tax_value),
        ("  Base value (residential)", r.base_value),
        ("  Residence right (building)", r.building_right),
        ("  Ownership (building)", r.setting_building),
        ("Land value", r.land_value),
        ("  Site use right", r.land_use),
        ("  Let-land reduction", r.land_reduction),
        ("  Ownership (land)", r.land_owner),
    ];
    for (label, amount) in rows {
        println!("{:<30} {:>16} yen", label, format_yen(amount));
    }
    println!("{}", "-".repeat(51));
    println!("{:<30} {:>16} yen", "Spouse's rights total", format_yen(r.spouse_right_total));
    println!("{:<30} {:>16} yen", "Remainder total", format_yen(r.remaining_assets_total));
    println!("{:<30} {:>16} yen", "Total", format_yen(r.total));
}

async fn run_value(args: ValueArgs) -> Result<()> {
    let case = args.to_case();
    let results = calculate_checked(&case).context("case rejected")?;

    if args.json {
        let record = CalculationRecord::new(case.clone(), results.clone());
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print_report(&case, &results);
    }

    // Awaited so the process does not exit before the POST; failures only log
    let sink = AnalyticsSink::new(&AnalyticsConfig::from_env());
    sink.send(&CalculationRecord::new(case, results)).await;

    Ok(())
}

fn run_structures() {
    println!("{:>4}  Structure", "Life");
    for (name, years) in STRUCTURE_USEFUL_LIVES {
        println!("{:>4}  {}", years, name);
    }
    println!("\nOther names are accepted with a useful life of 0.");
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Value(args) => run_value(args).await,
        Command::Structures => {
            run_structures();
            Ok(())
        }
    }
}
