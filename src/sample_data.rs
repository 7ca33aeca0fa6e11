use crate::config::DataPaths;
use crate::event_log::EventLog;
use log::error;
use std::fs;
use std::io;

const SENSOR_SEED: &str = "\
2023-06-01,24.5,65.2,6.2,22000
2023-06-02,25.1,63.7,6.3,21800
2023-06-03,24.8,67.5,6.1,22500
";

const NUTRIENT_SEED: &str = "\
date,nitrogen,phosphorus,potassium,ec_level
2023-06-01,180,45,210,1.8
2023-06-02,175,42,205,1.7
2023-06-03,185,48,215,1.9
";

const RECIPE_SEED: &str = "\
Recipe: Leafy Greens
Nitrogen: 180 ppm
Phosphorus: 50 ppm
Potassium: 210 ppm
EC Range: 1.6-2.0
pH Range: 5.8-6.2

Recipe: Tomatoes
Nitrogen: 160 ppm
Phosphorus: 60 ppm
Potassium: 190 ppm
EC Range: 2.0-3.5
pH Range: 5.5-6.5
";

fn write_seeds(paths: &DataPaths) -> io::Result<()> {
    fs::write(&paths.sensor_file, SENSOR_SEED)?;
    fs::write(&paths.nutrient_file, NUTRIENT_SEED)?;
    fs::write(&paths.recipe_file, RECIPE_SEED)?;
    Ok(())
}

/// Seeds the sensor, nutrient, and recipe files with demonstration content,
/// overwriting whatever is there. Logs a "Setup" event on success.
pub fn create_sample_data(paths: &DataPaths, log: &EventLog) -> bool {
    match write_seeds(paths) {
        Ok(()) => {
            log.append("Setup", "Created sample data files");
            true
        }
        Err(err) => {
            error!("Error creating sample data: {}", err);
            false
        }
    }
}
