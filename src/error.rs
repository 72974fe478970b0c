use chrono::ParseError as ChronoParseError;
use config::ConfigError;
use serde_json::Error as JsonError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("JsonError: {0}")]
    Json(#[from] JsonError),
    #[error("Failed to parse IP address : {0}")]
    IpParse(String),
    #[error("Failed to parse current time : {0}")]
    TimeParse(#[from] ChronoParseError),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("string {filter} did not parse successfully: {reason}")]
    InvalidLogFilter { filter: String, reason: String },
}

impl Error {
    pub fn ip_parse_error(input: impl Into<String>) -> Self {
        Self::IpParse(input.into())
    }

    pub fn invalid_log_filter(filter: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidLogFilter {
            filter: filter.into(),
            reason: reason.to_string(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Error::Json(_) => "json_error",
            Error::IpParse(_) => "ip_parse_error",
            Error::TimeParse(_) => "time_parse_error",
            Error::Io(_) => "io_error",
            Error::Config(_) => "config_error",
            Error::InvalidLogFilter { .. } => "invalid_log_filter",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_variant() {
        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(Error::from(json).code(), "json_error");
        assert_eq!(Error::ip_parse_error("nope").code(), "ip_parse_error");
        assert_eq!(
            Error::invalid_log_filter("=", "bad").code(),
            "invalid_log_filter"
        );
    }

    #[test]
    fn ip_parse_message_carries_input() {
        let err = Error::ip_parse_error("300.1.1.1");
        assert_eq!(
            err.to_string(),
            "Failed to parse IP address : 300.1.1.1"
        );
    }
}
