use config::{Config as ConfigLoader, Environment, Map};
use is_terminal::IsTerminal;
use serde::Deserialize;

use crate::Error;

const PREFIX: &str = "IPDATA";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LogStyle {
    #[default]
    Auto,
    Always,
    Never,
}

impl LogStyle {
    /// Logs go to stderr, so that is the stream checked in `Auto`.
    pub fn is_color(&self) -> bool {
        match self {
            LogStyle::Auto => std::io::stderr().is_terminal(),
            LogStyle::Always => true,
            LogStyle::Never => false,
        }
    }
}

impl<'de> Deserialize<'de> for LogStyle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?.to_lowercase();
        match s.as_str() {
            "auto" => Ok(LogStyle::Auto),
            "always" => Ok(LogStyle::Always),
            "never" => Ok(LogStyle::Never),
            _ => Err(serde::de::Error::unknown_variant(
                &s,
                &["auto", "always", "never"],
            )),
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Log {
    pub level: String,
    pub style: LogStyle,
}

impl Default for Log {
    fn default() -> Self {
        Log {
            level: Self::level(),
            style: LogStyle::default(),
        }
    }
}

impl Log {
    fn level() -> String {
        String::from("ipdata=info")
    }
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Config {
    pub log: Log,
    /// Pretty-print the JSON written to stdout.
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log: Log::default(),
            pretty: true,
        }
    }
}

pub fn init_config() -> Result<Config, Error> {
    load(None)
}

/// Reads `IPDATA_*` variables from `vars`, or from the process environment
/// when `None`. Both `IPDATA_LOG_LEVEL` and `IPDATA_LOG__LEVEL` are accepted.
fn load(vars: Option<Map<String, String>>) -> Result<Config, Error> {
    let config = ConfigLoader::builder()
        .add_source(
            Environment::with_prefix(PREFIX)
                .separator("_")
                .try_parsing(true)
                .source(vars.clone()),
        )
        .add_source(
            Environment::with_prefix(PREFIX)
                .separator("__")
                .prefix_separator("_")
                .try_parsing(true)
                .source(vars),
        )
        .build()?
        .try_deserialize::<Config>()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Map<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_without_variables() {
        let config = load(Some(Map::new())).unwrap();
        assert_eq!(config.log.level, "ipdata=info");
        assert_eq!(config.log.style, LogStyle::Auto);
        assert!(config.pretty);
    }

    #[test]
    fn reads_prefixed_variables() {
        let config = load(Some(vars(&[
            ("IPDATA_LOG_LEVEL", "ipdata=debug"),
            ("IPDATA_LOG_STYLE", "never"),
            ("IPDATA_PRETTY", "false"),
            ("OTHER_PRETTY", "true"),
        ])))
        .unwrap();
        assert_eq!(config.log.level, "ipdata=debug");
        assert_eq!(config.log.style, LogStyle::Never);
        assert!(!config.pretty);
    }

    #[test]
    fn rejects_unknown_log_style() {
        let err = load(Some(vars(&[("IPDATA_LOG_STYLE", "sometimes")]))).unwrap_err();
        assert_eq!(err.code(), "config_error");
    }

    #[rstest]
    #[case("auto", LogStyle::Auto)]
    #[case("ALWAYS", LogStyle::Always)]
    #[case("Never", LogStyle::Never)]
    fn log_style_is_case_insensitive(#[case] input: &str, #[case] expected: LogStyle) {
        let style: LogStyle = serde_json::from_value(input.into()).unwrap();
        assert_eq!(style, expected);
    }

    #[test]
    fn fixed_styles_ignore_terminal() {
        assert!(LogStyle::Always.is_color());
        assert!(!LogStyle::Never.is_color());
    }
}
