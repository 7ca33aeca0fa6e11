use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// File locations for every store the system touches.
///
/// Operations take the path they need from here explicitly; nothing falls
/// back to a hidden per-call default, so two operations only share a file
/// when the caller hands them the same entry.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DataPaths {
    #[serde(default = "default_sensor_file")]
    pub sensor_file: PathBuf,
    #[serde(default = "default_nutrient_file")]
    pub nutrient_file: PathBuf,
    #[serde(default = "default_recipe_file")]
    pub recipe_file: PathBuf,
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
    #[serde(default = "default_report_file")]
    pub report_file: PathBuf,
}

fn default_sensor_file() -> PathBuf {
    PathBuf::from("sensor_readings.txt")
}

fn default_nutrient_file() -> PathBuf {
    PathBuf::from("nutrient_levels.csv")
}

fn default_recipe_file() -> PathBuf {
    PathBuf::from("recipes.txt")
}

fn default_log_file() -> PathBuf {
    PathBuf::from("system_log.txt")
}

fn default_report_file() -> PathBuf {
    PathBuf::from("weekly_report.txt")
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            sensor_file: default_sensor_file(),
            nutrient_file: default_nutrient_file(),
            recipe_file: default_recipe_file(),
            log_file: default_log_file(),
            report_file: default_report_file(),
        }
    }
}

impl DataPaths {
    /// Loads path overrides from a JSON file. Fields left out of the JSON
    /// keep their conventional defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let reader = BufReader::new(file);

        serde_json::from_reader(reader).map_err(|e| ConfigError::JsonParse {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
