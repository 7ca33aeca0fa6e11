#[cfg(test)]
mod event_log_tests {
    use crate::event_log::EventLog;
    use crate::models::TIMESTAMP_FORMAT;
    use crate::tests::test_helpers::temp_paths;
    use chrono::NaiveDateTime;
    use std::fs;

    #[test]
    fn append_never_loses_prior_content() {
        let (_dir, paths, log) = temp_paths();

        assert!(log.append("Startup", "first message"));
        let after_first = fs::read_to_string(&paths.log_file).unwrap();

        assert!(log.append("Data saved", "second message"));
        let after_second = fs::read_to_string(&paths.log_file).unwrap();

        // The first write remains a strict prefix of the file.
        assert!(after_second.starts_with(&after_first));
        assert!(after_second.len() > after_first.len());

        let lines: Vec<&str> = after_second.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(",Startup,first message"));
        assert!(lines[1].ends_with(",Data saved,second message"));
    }

    #[test]
    fn appended_timestamp_matches_declared_format() {
        let (_dir, paths, log) = temp_paths();
        assert!(log.append("Setup", "created files"));

        let content = fs::read_to_string(&paths.log_file).unwrap();
        let timestamp = content.lines().next().unwrap().split(',').next().unwrap();
        assert!(NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn search_is_case_insensitive() {
        let (_dir, _paths, log) = temp_paths();
        log.append("Backup created", "Backed up a.txt to b.txt");
        log.append("Data saved", "Saved 3 readings");

        assert_eq!(log.search("backup").len(), 1);
        assert_eq!(log.search("BACKUP").len(), 1);
        assert_eq!(log.search("BaCkEd Up").len(), 1);
        assert!(log.search("restore").is_empty());
    }

    #[test]
    fn empty_term_matches_every_entry() {
        let (_dir, _paths, log) = temp_paths();
        log.append("Startup", "one");
        log.append("Shutdown", "two");

        assert_eq!(log.search("").len(), 2);
    }

    #[test]
    fn message_keeps_embedded_delimiters() {
        let (_dir, _paths, log) = temp_paths();
        log.append("Data saved", "Saved 3 readings to a.txt, plus extras");

        let results = log.search("extras");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].event_type, "Data saved");
        assert_eq!(results[0].message, "Saved 3 readings to a.txt, plus extras");
    }

    #[test]
    fn short_lines_are_excluded_from_results() {
        let (_dir, paths, log) = temp_paths();
        fs::write(
            &paths.log_file,
            "only-two,fields\n2023-06-01 10:00:00,Setup,Created sample data files\n",
        )
        .unwrap();

        let results = log.search("");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].event_type, "Setup");
    }

    #[test]
    fn missing_log_file_searches_empty() {
        let (_dir, _paths, log) = temp_paths();
        assert!(log.search("anything").is_empty());
    }
}
