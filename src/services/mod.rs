pub mod attempt_recorder;
pub mod practice_generator;
pub mod quiz_catalog;
pub mod report_aggregator;
pub mod report_formatter;
pub mod window_simulator;
