use chrono::{Local, SecondsFormat};
use tracing_subscriber::{
    filter::Targets,
    fmt::{self, time},
    prelude::*,
};

use crate::{Error, config::Log};

/// Installs the global subscriber. Output goes to stderr; stdout is reserved
/// for results.
pub fn init(log: &Log) -> Result<(), Error> {
    let is_color = log.style.is_color();
    if !is_color {
        yansi::disable();
    }
    let format = fmt::layer()
        .with_writer(std::io::stderr)
        .with_timer(LocalTime)
        .with_ansi(is_color);
    let filter = parse_filter(&log.level)?;

    tracing_subscriber::registry()
        .with(format)
        .with(filter)
        .init();
    Ok(())
}

fn parse_filter(level: &str) -> Result<Targets, Error> {
    level
        .parse()
        .map_err(|e| Error::invalid_log_filter(level, e))
}

struct LocalTime;

impl time::FormatTime for LocalTime {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            Local::now().to_rfc3339_opts(SecondsFormat::Millis, false)
        )
    }
}
