// Console presentation of analysis results
pub mod console;
pub mod utils;

pub use console::{ConsoleReport, ReportSink};
