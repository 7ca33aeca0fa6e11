//! Line-oriented record codec for the sensor and nutrient files.
//!
//! Both formats are comma-delimited, five fields per line. Reading is
//! deliberately tolerant: short lines and lines with unparseable numbers are
//! skipped, never fatal, and a missing file degrades to an empty list with a
//! logged message. Writing the sensor file replaces it wholesale; nutrient
//! readings are appended, with the header bootstrapped on first write.

use crate::errors::StoreError;
use crate::event_log::EventLog;
use crate::models::{NutrientRecord, SensorRecord, NUTRIENT_CSV_HEADER};
use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use log::{debug, error, warn};
use std::fs::{File, OpenOptions};
use std::path::Path;

/// Fields per line for both record kinds.
const EXPECTED_FIELDS: usize = 5;

fn parse_float(field: &str) -> Option<f64> {
    field.parse::<f64>().ok()
}

fn sensor_from_fields(raw: &StringRecord) -> Option<SensorRecord> {
    Some(SensorRecord {
        date: raw.get(0)?.to_string(),
        temperature: parse_float(raw.get(1)?)?,
        humidity: parse_float(raw.get(2)?)?,
        ph_level: parse_float(raw.get(3)?)?,
        light_level: parse_float(raw.get(4)?)?,
    })
}

fn nutrient_from_fields(raw: &StringRecord) -> Option<NutrientRecord> {
    Some(NutrientRecord {
        date: raw.get(0)?.to_string(),
        nitrogen: parse_float(raw.get(1)?)?,
        phosphorus: parse_float(raw.get(2)?)?,
        potassium: parse_float(raw.get(3)?)?,
        ec_level: parse_float(raw.get(4)?)?,
    })
}

/// Decodes one record per line, skipping anything malformed.
///
/// `has_headers` discards the first line unconditionally, without validating
/// its contents. Lines with extra trailing fields are accepted; only the
/// first five are read.
fn decode_delimited<T, F>(path: &Path, has_headers: bool, map_fields: F) -> Result<Vec<T>, StoreError>
where
    F: Fn(&StringRecord) -> Option<T>,
{
    let file = File::open(path).map_err(|e| StoreError::from_io(path, e))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(file);

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let raw = match result {
            Ok(raw) => raw,
            Err(err) => {
                warn!(
                    "Skipping unreadable line {} in {}: {}",
                    row + 1,
                    path.display(),
                    err
                );
                continue;
            }
        };
        if raw.len() < EXPECTED_FIELDS {
            debug!(
                "Skipping line {} in {}: expected {} fields, got {}",
                row + 1,
                path.display(),
                EXPECTED_FIELDS,
                raw.len()
            );
            continue;
        }
        match map_fields(&raw) {
            Some(record) => records.push(record),
            None => warn!(
                "Skipping line {} in {}: numeric field failed to parse",
                row + 1,
                path.display()
            ),
        }
    }
    Ok(records)
}

/// Reads the headerless sensor file into memory, in file order.
///
/// Never fails: a missing file or any other read error degrades to an empty
/// list with a logged message.
pub fn read_sensor_data(path: &Path) -> Vec<SensorRecord> {
    match decode_delimited(path, false, sensor_from_fields) {
        Ok(readings) => readings,
        Err(StoreError::NotFound { .. }) => {
            warn!("Sensor data file not found: {}", path.display());
            Vec::new()
        }
        Err(err) => {
            error!("Error reading sensor data: {}", err);
            Vec::new()
        }
    }
}

fn write_sensor_file(readings: &[SensorRecord], path: &Path) -> Result<(), StoreError> {
    let file = File::create(path).map_err(|e| StoreError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
    for reading in readings {
        writer.serialize(reading).map_err(|e| StoreError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    writer.flush().map_err(|e| StoreError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}

/// Overwrites the sensor file with the given readings, one line per record
/// in declared field order. Logs a "Data saved" event on success.
pub fn save_daily_readings(readings: &[SensorRecord], path: &Path, log: &EventLog) -> bool {
    match write_sensor_file(readings, path) {
        Ok(()) => {
            log.append(
                "Data saved",
                &format!("Saved {} readings to {}", readings.len(), path.display()),
            );
            true
        }
        Err(err) => {
            error!("Error saving readings: {}", err);
            false
        }
    }
}

/// Reads the nutrient CSV. The first line is always treated as a header and
/// discarded; the rest parse with the same tolerance as the sensor file.
pub fn read_nutrient_levels(path: &Path) -> Vec<NutrientRecord> {
    match decode_delimited(path, true, nutrient_from_fields) {
        Ok(nutrients) => nutrients,
        Err(StoreError::NotFound { .. }) => {
            warn!("Nutrient levels file not found: {}", path.display());
            Vec::new()
        }
        Err(err) => {
            error!("Error reading nutrient levels: {}", err);
            Vec::new()
        }
    }
}

fn append_nutrient_row(reading: &NutrientRecord, path: &Path) -> Result<(), StoreError> {
    // An absent file gets the header before its first data row; an existing
    // file (even an empty one) is appended to as-is.
    let bootstrap_header = !path.exists();

    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| StoreError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);

    if bootstrap_header {
        writer
            .write_record(NUTRIENT_CSV_HEADER)
            .map_err(|e| StoreError::Csv {
                path: path.to_path_buf(),
                source: e,
            })?;
    }
    writer.serialize(reading).map_err(|e| StoreError::Csv {
        path: path.to_path_buf(),
        source: e,
    })?;
    writer.flush().map_err(|e| StoreError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}

/// Appends one nutrient reading. Duplicate dates are accepted without
/// detection. Logs a "Nutrient reading" event on success.
pub fn append_nutrient_reading(reading: &NutrientRecord, path: &Path, log: &EventLog) -> bool {
    match append_nutrient_row(reading, path) {
        Ok(()) => {
            log.append(
                "Nutrient reading",
                &format!("Added reading for {}", reading.date),
            );
            true
        }
        Err(err) => {
            error!("Error appending nutrient reading: {}", err);
            false
        }
    }
}
