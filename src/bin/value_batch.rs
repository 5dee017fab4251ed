//! Value every case in a CSV file
//!
//! Cases are valued in parallel; rows that fail to parse or validate are
//! reported and skipped. With `--strict` the first unreadable row stops the
//! run instead. Output has one row per valued case.

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use rayon::prelude::*;
use residence_right::case::{load_cases, load_cases_lenient, CaseLoadError};
use residence_right::format::format_yen;
use residence_right::{calculate_checked, ResultRecord};
use serde::Serialize;
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "value_batch", about = "Value a CSV of spousal residence right cases")]
struct Cli {
    /// Case file (caseId plus the valuation form columns)
    #[arg(long)]
    input: PathBuf,

    /// Where to write the results
    #[arg(long, default_value = "residence_right_results.csv")]
    output: PathBuf,

    /// Stop at the first unreadable row instead of skipping it
    #[arg(long)]
    strict: bool,
}

/// Output row: the case id followed by every result field
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchRow {
    case_id: String,
    spouse_age: i32,
    life: u32,
    pvf: f64,
    elapsed_years: i32,
    useful_life: u32,
    remaining_years: i32,
    residential_area: f64,
    residential_ratio: f64,
    rental_area_ratio: f64,
    rental_ratio: f64,
    building_tax_value: i64,
    base_value: i64,
    building_right: i64,
    setting_building: i64,
    land_value: i64,
    land_use: i64,
    land_reduction: i64,
    land_owner: i64,
    spouse_right_total: i64,
    remaining_assets_total: i64,
    total: i64,
}

impl BatchRow {
    fn new(case_id: String, r: &ResultRecord) -> Self {
        Self {
            case_id,
            spouse_age: r.spouse_age,
            life: r.life,
            pvf: r.pvf,
            elapsed_years: r.elapsed_years,
            useful_life: r.useful_life,
            remaining_years: r.remaining_years,
            residential_area: r.residential_area,
            residential_ratio: r.residential_ratio,
            rental_area_ratio: r.rental_area_ratio,
            rental_ratio: r.rental_ratio,
            building_tax_value: r.building_tax_value,
            base_value: r.base_value,
            building_right: r.building_right,
            setting_building: r.setting_building,
            land_value: r.land_value,
            land_use: r.land_use,
            land_reduction: r.land_reduction,
            land_owner: r.land_owner,
            spouse_right_total: r.spouse_right_total,
            remaining_assets_total: r.remaining_assets_total,
            total: r.total,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let start = Instant::now();
    let (cases, rejected): (_, Vec<CaseLoadError>) = if cli.strict {
        let cases = load_cases(&cli.input)
            .with_context(|| format!("cannot load {}", cli.input.display()))?;
        (cases, Vec::new())
    } else {
        let file = File::open(&cli.input)
            .with_context(|| format!("cannot open {}", cli.input.display()))?;
        load_cases_lenient(file)
    };
    for err in &rejected {
        warn!("skipped row: {}", err);
    }
    info!("Loaded {} cases ({} rejected) in {:?}", cases.len(), rejected.len(), start.elapsed());

    // Value in parallel; order of the input is kept
    let valued: Vec<_> = cases
        .par_iter()
        .map(|record| (record.case_id.clone(), calculate_checked(&record.case)))
        .collect();

    let mut writer = csv::Writer::from_path(&cli.output)
        .with_context(|| format!("cannot create {}", cli.output.display()))?;

    let mut written = 0usize;
    let mut invalid = 0usize;
    let mut grand_total = 0i64;
    for (case_id, outcome) in valued {
        match outcome {
            Ok(result) => {
                grand_total += result.total;
                writer.serialize(BatchRow::new(case_id, &result))?;
                written += 1;
            }
            Err(e) => {
                warn!("case {} rejected: {}", case_id, e);
                invalid += 1;
            }
        }
    }
    writer.flush()?;

    println!("Valued {} cases -> {}", written, cli.output.display());
    if invalid + rejected.len() > 0 {
        println!("Skipped {} rows ({} unreadable, {} invalid)", invalid + rejected.len(), rejected.len(), invalid);
    }
    println!("Sum of totals: {} yen", format_yen(grand_total));
    println!("Total time: {:?}", start.elapsed());

    Ok(())
}
