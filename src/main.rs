#[macro_use]
extern crate tracing;

use std::{
    env, fs,
    io::{self, Read},
    process::ExitCode,
};

use dotenvy::dotenv;
use ipdata::{
    Error,
    config::{self, Config},
    decode, trace,
};
use yansi::Paint;

fn main() -> ExitCode {
    dotenv().ok();
    let config = match config::init_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err.to_string().red().bold());
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = trace::init(&config.log) {
        eprintln!("{}", err.to_string().red().bold());
        return ExitCode::FAILURE;
    }
    debug!("{:?}", config);

    let path = env::args().nth(1);
    match run(&config, path.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(code = err.code(), "{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config, path: Option<&str>) -> Result<(), Error> {
    let body = read_input(path)?;
    let output = render(&body, config.pretty)?;
    println!("{output}");
    Ok(())
}

fn render(body: &str, pretty: bool) -> Result<String, Error> {
    let response = decode::decode_any(body)?;
    info!("decoded {} record(s)", response.len());
    decode::encode(&response, pretty)
}

/// Reads the response body from `path`, or stdin for `None` and `-`.
fn read_input(path: Option<&str>) -> Result<String, Error> {
    match path {
        None | Some("-") => {
            let mut body = String::new();
            io::stdin().read_to_string(&mut body)?;
            Ok(body)
        }
        Some(path) => {
            debug!("reading {}", path);
            Ok(fs::read_to_string(path)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::Value;

    use super::*;

    #[test]
    fn renders_bulk_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"ip": "1.1.1.1", "language": [], "message": ""}},
                {{"ip": "bogus", "message": "bogus does not appear to be an IPv4 or IPv6 address"}}]"#
        )
        .unwrap();

        let path = file.path().to_str().unwrap();
        let body = read_input(Some(path)).unwrap();
        let output = render(&body, false).unwrap();

        let value: Value = serde_json::from_str(&output).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["ip"], "bogus");
        assert!(records[1].get("message").is_none());
        assert_eq!(records[0]["region_code"], "");
    }

    #[test]
    fn renders_single_object() {
        let output = render(r#"{"ip": "8.8.8.8", "region_code": "CA"}"#, true).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["ip"], "8.8.8.8");
        assert_eq!(value["region_code"], "CA");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = read_input(path.to_str()).unwrap_err();
        assert_eq!(err.code(), "io_error");
    }
}
