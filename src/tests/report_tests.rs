#[cfg(test)]
mod report_tests {
    use crate::report::generate_weekly_report;
    use crate::tests::test_helpers::temp_paths;
    use std::fs;

    const WELL_FORMED: &str = "\
2023-06-01,24.0,60.0,6.2,22000
2023-06-02,26.0,70.0,6.3,21800
2023-06-03,25.0,65.0,6.1,22500
";

    #[test]
    fn averages_render_with_declared_precision() {
        let (_dir, paths, log) = temp_paths();
        fs::write(&paths.sensor_file, WELL_FORMED).unwrap();

        assert!(generate_weekly_report(
            &paths.sensor_file,
            &paths.report_file,
            &log
        ));

        let report = fs::read_to_string(&paths.report_file).unwrap();
        assert!(report.contains("WEEKLY HYDROPONIC MONITORING REPORT"));
        assert!(report.contains("Number of readings: 3"));
        assert!(report.contains("Temperature: 25.0°C"));
        assert!(report.contains("Humidity: 65.0%"));
        assert!(report.contains("pH Level: 6.20"));
        assert!(report.contains("Light Level: 22100.0 lux"));
    }

    #[test]
    fn period_uses_sequence_order_without_sorting() {
        let (_dir, paths, log) = temp_paths();
        fs::write(
            &paths.sensor_file,
            "2023-06-03,25.0,65.0,6.1,22500\n\
             2023-06-01,24.0,60.0,6.2,22000\n\
             2023-06-02,26.0,70.0,6.3,21800\n",
        )
        .unwrap();

        assert!(generate_weekly_report(
            &paths.sensor_file,
            &paths.report_file,
            &log
        ));

        let report = fs::read_to_string(&paths.report_file).unwrap();
        assert!(report.contains("Period: 2023-06-03 to 2023-06-02"));

        // Daily readings stay in input order too.
        let first = report.find("Date: 2023-06-03").unwrap();
        let second = report.find("Date: 2023-06-01").unwrap();
        assert!(first < second);
    }

    #[test]
    fn empty_data_fails_without_touching_output() {
        let (_dir, paths, log) = temp_paths();
        fs::write(&paths.sensor_file, "").unwrap();
        fs::write(&paths.report_file, "stale report").unwrap();

        assert!(!generate_weekly_report(
            &paths.sensor_file,
            &paths.report_file,
            &log
        ));
        assert_eq!(fs::read_to_string(&paths.report_file).unwrap(), "stale report");
    }

    #[test]
    fn missing_data_file_fails_without_creating_output() {
        let (_dir, paths, log) = temp_paths();

        assert!(!generate_weekly_report(
            &paths.sensor_file,
            &paths.report_file,
            &log
        ));
        assert!(!paths.report_file.exists());
    }

    #[test]
    fn success_logs_report_generated_event() {
        let (_dir, paths, log) = temp_paths();
        fs::write(&paths.sensor_file, WELL_FORMED).unwrap();

        assert!(generate_weekly_report(
            &paths.sensor_file,
            &paths.report_file,
            &log
        ));

        let events = log.search("Report generated");
        assert_eq!(events.len(), 1);
    }
}
