mod test_helpers;

mod event_log_tests;
mod report_tests;
