use crate::config::DataPaths;
use crate::event_log::EventLog;
use tempfile::TempDir;

/// A full set of store paths rooted in a scratch directory, plus the event
/// log wired to the log path. The TempDir must stay alive for the test's
/// duration.
pub fn temp_paths() -> (TempDir, DataPaths, EventLog) {
    let dir = TempDir::new().expect("create temp dir");
    let root = dir.path();
    let paths = DataPaths {
        sensor_file: root.join("sensor_readings.txt"),
        nutrient_file: root.join("nutrient_levels.csv"),
        recipe_file: root.join("recipes.txt"),
        log_file: root.join("system_log.txt"),
        report_file: root.join("weekly_report.txt"),
    };
    let log = EventLog::new(paths.log_file.clone());
    (dir, paths, log)
}
