use crate::event_log::EventLog;
use crate::models::SensorRecord;
use crate::records;
use log::{error, warn};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

fn write_report(readings: &[SensorRecord], output_path: &Path) -> io::Result<()> {
    let count = readings.len();
    let avg_temp = readings.iter().map(|r| r.temperature).sum::<f64>() / count as f64;
    let avg_humidity = readings.iter().map(|r| r.humidity).sum::<f64>() / count as f64;
    let avg_ph = readings.iter().map(|r| r.ph_level).sum::<f64>() / count as f64;
    let avg_light = readings.iter().map(|r| r.light_level).sum::<f64>() / count as f64;

    // Date range comes from sequence order, not from sorting; an unordered
    // input file yields an unordered period line.
    let start_date = &readings[0].date;
    let end_date = &readings[count - 1].date;

    let file = File::create(output_path)?;
    let mut out = BufWriter::new(file);

    writeln!(out, "WEEKLY HYDROPONIC MONITORING REPORT")?;
    writeln!(out, "Period: {} to {}", start_date, end_date)?;
    writeln!(out, "Number of readings: {}", count)?;
    writeln!(out)?;

    writeln!(out, "AVERAGES:")?;
    writeln!(out, "Temperature: {:.1}°C", avg_temp)?;
    writeln!(out, "Humidity: {:.1}%", avg_humidity)?;
    writeln!(out, "pH Level: {:.2}", avg_ph)?;
    writeln!(out, "Light Level: {:.1} lux", avg_light)?;
    writeln!(out)?;

    writeln!(out, "DAILY READINGS:")?;
    for reading in readings {
        writeln!(out, "Date: {}", reading.date)?;
        writeln!(out, "  Temperature: {}°C", reading.temperature)?;
        writeln!(out, "  Humidity: {}%", reading.humidity)?;
        writeln!(out, "  pH Level: {}", reading.ph_level)?;
        writeln!(out, "  Light Level: {} lux", reading.light_level)?;
        writeln!(out)?;
    }

    out.flush()
}

/// Derives the weekly summary from stored sensor readings.
///
/// With no readings (empty or unreadable source) the output file is neither
/// created nor overwritten and the call returns false. On success the output
/// is fully rewritten and a "Report generated" event is logged.
pub fn generate_weekly_report(data_path: &Path, output_path: &Path, log: &EventLog) -> bool {
    let readings = records::read_sensor_data(data_path);
    if readings.is_empty() {
        warn!(
            "No sensor data available for report from {}",
            data_path.display()
        );
        return false;
    }

    match write_report(&readings, output_path) {
        Ok(()) => {
            log.append(
                "Report generated",
                &format!("Created weekly report {}", output_path.display()),
            );
            true
        }
        Err(err) => {
            error!("Error generating report: {}", err);
            false
        }
    }
}
