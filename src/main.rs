use anyhow::{Context, Result};
use clap::Parser;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use std::path::{Path, PathBuf};

use farm_monitor::backup;
use farm_monitor::config::DataPaths;
use farm_monitor::event_log::EventLog;
use farm_monitor::models::{NutrientRecord, SensorRecord};
use farm_monitor::recipes;
use farm_monitor::records;
use farm_monitor::report;
use farm_monitor::sample_data;

#[derive(Parser, Debug)]
#[command(name = "farm_monitor")]
#[command(about = "Record keeper for a hydroponic farm", long_about = None)]
struct Args {
    /// JSON file overriding the default data file locations
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed the data files with sample content without prompting
    #[arg(long)]
    seed: bool,
}

const MENU: &[&str] = &[
    "View sensor readings",
    "Add new sensor reading",
    "View nutrient levels",
    "Add new nutrient reading",
    "View recipes",
    "Update recipe",
    "Generate weekly report",
    "Search system logs",
    "Create backup",
    "Exit",
];

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let paths = match &args.config {
        Some(path) => DataPaths::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => DataPaths::default(),
    };
    let log = EventLog::new(paths.log_file.clone());
    let theme = ColorfulTheme::default();

    println!("===== HYDROPONIC FARM MONITORING SYSTEM =====");

    let seed = args.seed
        || Confirm::with_theme(&theme)
            .with_prompt("Create sample data?")
            .default(false)
            .interact()?;
    if seed {
        if sample_data::create_sample_data(&paths, &log) {
            println!("Sample data created successfully.");
        } else {
            println!("Failed to create sample data.");
        }
    }

    loop {
        println!();
        let choice = Select::with_theme(&theme)
            .with_prompt("Options")
            .items(MENU)
            .default(0)
            .interact()?;

        match choice {
            0 => view_sensor_readings(&paths),
            1 => add_sensor_reading(&paths, &log, &theme)?,
            2 => view_nutrient_levels(&paths),
            3 => add_nutrient_reading(&paths, &log, &theme)?,
            4 => view_recipes(&paths),
            5 => update_recipe(&paths, &log, &theme)?,
            6 => generate_report(&paths, &log, &theme)?,
            7 => search_logs(&log, &theme)?,
            8 => create_backup(&log, &theme)?,
            _ => {
                println!("Exiting program. Goodbye!");
                break;
            }
        }
    }

    Ok(())
}

fn view_sensor_readings(paths: &DataPaths) {
    let readings = records::read_sensor_data(&paths.sensor_file);
    if readings.is_empty() {
        println!("No sensor readings available.");
        return;
    }
    println!("\n=== SENSOR READINGS ===");
    for reading in &readings {
        println!("Date: {}", reading.date);
        println!(
            "  Temp: {}°C, Humidity: {}%",
            reading.temperature, reading.humidity
        );
        println!(
            "  pH: {}, Light: {} lux",
            reading.ph_level, reading.light_level
        );
    }
}

fn add_sensor_reading(paths: &DataPaths, log: &EventLog, theme: &ColorfulTheme) -> Result<()> {
    let date: String = Input::with_theme(theme)
        .with_prompt("Date (YYYY-MM-DD)")
        .interact_text()?;
    let temperature: f64 = Input::with_theme(theme)
        .with_prompt("Temperature (°C)")
        .interact_text()?;
    let humidity: f64 = Input::with_theme(theme)
        .with_prompt("Humidity (%)")
        .interact_text()?;
    let ph_level: f64 = Input::with_theme(theme)
        .with_prompt("pH level")
        .interact_text()?;
    let light_level: f64 = Input::with_theme(theme)
        .with_prompt("Light level (lux)")
        .interact_text()?;

    // Read-all, push, save-all: adding one reading rewrites the whole file.
    let mut readings = records::read_sensor_data(&paths.sensor_file);
    readings.push(SensorRecord {
        date,
        temperature,
        humidity,
        ph_level,
        light_level,
    });

    if records::save_daily_readings(&readings, &paths.sensor_file, log) {
        println!("Sensor reading added successfully.");
    } else {
        println!("Failed to add sensor reading.");
    }
    Ok(())
}

fn view_nutrient_levels(paths: &DataPaths) {
    let nutrients = records::read_nutrient_levels(&paths.nutrient_file);
    if nutrients.is_empty() {
        println!("No nutrient readings available.");
        return;
    }
    println!("\n=== NUTRIENT LEVELS ===");
    for nutrient in &nutrients {
        println!("Date: {}", nutrient.date);
        println!(
            "  N: {} ppm, P: {} ppm, K: {} ppm",
            nutrient.nitrogen, nutrient.phosphorus, nutrient.potassium
        );
        println!("  EC Level: {}", nutrient.ec_level);
    }
}

fn add_nutrient_reading(paths: &DataPaths, log: &EventLog, theme: &ColorfulTheme) -> Result<()> {
    let date: String = Input::with_theme(theme)
        .with_prompt("Date (YYYY-MM-DD)")
        .interact_text()?;
    let nitrogen: f64 = Input::with_theme(theme)
        .with_prompt("Nitrogen level (ppm)")
        .interact_text()?;
    let phosphorus: f64 = Input::with_theme(theme)
        .with_prompt("Phosphorus level (ppm)")
        .interact_text()?;
    let potassium: f64 = Input::with_theme(theme)
        .with_prompt("Potassium level (ppm)")
        .interact_text()?;
    let ec_level: f64 = Input::with_theme(theme)
        .with_prompt("EC level")
        .interact_text()?;

    let reading = NutrientRecord {
        date,
        nitrogen,
        phosphorus,
        potassium,
        ec_level,
    };

    if records::append_nutrient_reading(&reading, &paths.nutrient_file, log) {
        println!("Nutrient reading added successfully.");
    } else {
        println!("Failed to add nutrient reading.");
    }
    Ok(())
}

fn view_recipes(paths: &DataPaths) {
    let blocks = recipes::read_recipes(&paths.recipe_file);
    if blocks.is_empty() {
        println!("No recipes available.");
        return;
    }
    println!("\n=== RECIPES ===");
    for block in &blocks {
        println!("{}", block.header());
        for line in &block.body {
            println!("  {}", line);
        }
    }
}

fn update_recipe(paths: &DataPaths, log: &EventLog, theme: &ColorfulTheme) -> Result<()> {
    let name: String = Input::with_theme(theme)
        .with_prompt("Recipe name to update")
        .interact_text()?;

    println!("Enter new instructions (one per line, blank line to finish):");
    let mut lines: Vec<String> = Vec::new();
    loop {
        let line: String = Input::with_theme(theme)
            .with_prompt(">")
            .allow_empty(true)
            .interact_text()?;
        if line.is_empty() {
            break;
        }
        lines.push(line);
    }

    if recipes::update_recipe(&name, &lines.join("\n"), &paths.recipe_file, log) {
        println!("Recipe updated successfully.");
    } else {
        println!("Failed to update recipe.");
    }
    Ok(())
}

fn generate_report(paths: &DataPaths, log: &EventLog, theme: &ColorfulTheme) -> Result<()> {
    let data_file: String = Input::with_theme(theme)
        .with_prompt("Path to sensor data file")
        .default(paths.sensor_file.display().to_string())
        .interact_text()?;
    let output_file: String = Input::with_theme(theme)
        .with_prompt("Path for report output")
        .default(paths.report_file.display().to_string())
        .interact_text()?;

    if report::generate_weekly_report(Path::new(&data_file), Path::new(&output_file), log) {
        println!("Report generated successfully: {}", output_file);
    } else {
        println!("Failed to generate report.");
    }
    Ok(())
}

fn search_logs(log: &EventLog, theme: &ColorfulTheme) -> Result<()> {
    let term: String = Input::with_theme(theme)
        .with_prompt("Search term")
        .allow_empty(true)
        .interact_text()?;

    let results = log.search(&term);
    if results.is_empty() {
        println!("No matching log entries found.");
        return Ok(());
    }
    println!("\n=== SEARCH RESULTS ===");
    for entry in &results {
        println!(
            "{} - {} - {}",
            entry.timestamp, entry.event_type, entry.message
        );
    }
    Ok(())
}

fn create_backup(log: &EventLog, theme: &ColorfulTheme) -> Result<()> {
    let source: String = Input::with_theme(theme)
        .with_prompt("Source file path")
        .interact_text()?;
    let dest: String = Input::with_theme(theme)
        .with_prompt("Backup file path")
        .interact_text()?;

    if backup::backup_data_files(Path::new(&source), Path::new(&dest), log) {
        println!("Backup created successfully.");
    } else {
        println!("Failed to create backup.");
    }
    Ok(())
}
