//! Export of attendance records and the event history.
//!
//! Records are fetched through the generator, so exporting a range uses the
//! same generate-once-then-memoize path as any other query.

use crate::core::clock::Clock;
use crate::core::generator::AttendanceGenerator;
use crate::core::ledger::EventLedger;
use crate::core::random::RandomSource;
use crate::errors::{AppError, AppResult};
use crate::models::record::DateRecord;
use crate::models::stop::Route;
use crate::store::StateStore;
use chrono::NaiveDate;
use clap::ValueEnum;
use csv::Writer;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

pub struct ExportLogic;

impl ExportLogic {
    /// Export the attendance records for a list of dates.
    pub fn export_records(
        store: &mut impl StateStore,
        clock: &impl Clock,
        rng: &mut impl RandomSource,
        route: &Route,
        dates: &[NaiveDate],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        Self::check_destination(file, force)?;

        let mut records = Vec::with_capacity(dates.len());
        for d in dates {
            records.push(AttendanceGenerator::record_for(store, clock, rng, route, *d)?);
        }

        match format {
            ExportFormat::Json => write_records_json(file, &records)?,
            ExportFormat::Csv => write_records_csv(file, route, &records)?,
        }
        Ok(())
    }

    /// Export the anomaly-date ledger.
    pub fn export_history(
        store: &impl StateStore,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        Self::check_destination(file, force)?;

        let history: Vec<String> = EventLedger::history(store)?.into_iter().collect();

        match format {
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(&history)
                    .map_err(|e| AppError::Export(e.to_string()))?;
                std::fs::write(file, json)?;
            }
            ExportFormat::Csv => write_history_csv(file, &history)?,
        }
        Ok(())
    }

    fn check_destination(file: &str, force: bool) -> AppResult<()> {
        if Path::new(file).exists() && !force {
            return Err(AppError::Export(format!(
                "file '{file}' already exists (use --force to overwrite)"
            )));
        }
        Ok(())
    }
}

fn write_records_json(file: &str, records: &[DateRecord]) -> AppResult<()> {
    let json =
        serde_json::to_string_pretty(records).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(file, json)?;
    Ok(())
}

// The csv writers go through io::Result: csv errors convert into io errors.
fn write_history_csv(file: &str, history: &[String]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(file)?;
    wtr.write_record(["date"])?;
    for d in history {
        wtr.write_record([d.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_records_csv(file: &str, route: &Route, records: &[DateRecord]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(file)?;

    let mut header = vec!["date".to_string()];
    for stop in route.stops() {
        header.push(stop.name.clone());
    }
    header.push("has_absence".to_string());
    header.push("target_stop".to_string());
    wtr.write_record(&header)?;

    for rec in records {
        let mut row = vec![rec.date.clone()];
        for stop in route.stops() {
            row.push(rec.count_at(stop.id).to_string());
        }
        row.push(rec.has_absence.to_string());
        row.push(
            rec.target_stop_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
        );
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}
