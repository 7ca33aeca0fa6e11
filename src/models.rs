use serde::{Deserialize, Serialize};

/// Timestamp layout for every event-log line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Header row bootstrapped into a brand-new nutrient CSV.
pub const NUTRIENT_CSV_HEADER: [&str; 5] =
    ["date", "nitrogen", "phosphorus", "potassium", "ec_level"];

/// One environmental reading. Field order matches the on-disk line layout:
/// `date,temperature,humidity,ph_level,light_level`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SensorRecord {
    pub date: String,
    pub temperature: f64,
    pub humidity: f64,
    pub ph_level: f64,
    pub light_level: f64,
}

/// One nutrient measurement, in the CSV's column order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NutrientRecord {
    pub date: String,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub ec_level: f64,
}

/// One decoded line of the system log.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub event_type: String,
    pub message: String,
}

impl LogEntry {
    /// Splits a log line on at most two delimiters, so the message field
    /// keeps any embedded commas. Returns None for lines with fewer than
    /// three fields.
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.trim().splitn(3, ',');
        let timestamp = parts.next()?.to_string();
        let event_type = parts.next()?.to_string();
        let message = parts.next()?.to_string();
        Some(LogEntry {
            timestamp,
            event_type,
            message,
        })
    }
}

/// A named recipe: the header line `Recipe: <name>` plus its body lines.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeBlock {
    pub name: String,
    pub body: Vec<String>,
}

impl RecipeBlock {
    pub fn header(&self) -> String {
        format!("Recipe: {}", self.name)
    }
}
