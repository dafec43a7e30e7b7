use crate::error::CheckError;
use clap::ArgMatches;
use std::env;

const DEFAULT_API_URL: &str = "http://api.face.com";
const DEFAULT_TIMEOUT_SECS: u64 = 2;

/// Runtime configuration for one check invocation.
/// Credentials and the critical threshold come from the command line;
/// the base URL and timeout have fixed defaults with env overrides.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_secret: String,
    pub critical_percent: f64,
    pub api_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Config {
    /// Build configuration from parsed CLI matches.
    ///
    /// Required options (missing or empty fails the check as WARNING,
    /// before any network call):
    /// - --key
    /// - --secret
    /// - --crit (percent, 0-100)
    ///
    /// Env vars:
    /// - FACE_API_URL (default: http://api.face.com)
    /// - FACE_HTTP_TIMEOUT_SECS (default: 2)
    ///
    /// The three options are declared optional in clap on purpose:
    /// clap's own missing-argument error would exit 2, which Nagios
    /// reads as CRITICAL.
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, CheckError> {
        let api_key = required(matches, "key")?;
        let api_secret = required(matches, "secret")?;
        let crit = required(matches, "crit")?;
        let critical_percent = crit
            .parse::<f64>()
            .ok()
            .filter(|p| (0.0..=100.0).contains(p))
            .ok_or(CheckError::InvalidOption("crit"))?;

        let api_url = env::var("FACE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let timeout_secs = env::var("FACE_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let user_agent = format!("check-face-rate/{}", env!("CARGO_PKG_VERSION"));

        Ok(Self {
            api_key,
            api_secret,
            critical_percent,
            api_url,
            user_agent,
            timeout_secs,
        })
    }
}

fn required(matches: &ArgMatches, name: &'static str) -> Result<String, CheckError> {
    matches
        .get_one::<String>(name)
        .filter(|v| !v.is_empty())
        .cloned()
        .ok_or(CheckError::MissingOption(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::build_cli;

    fn matches(args: &[&str]) -> ArgMatches {
        let mut argv = vec!["check-face-rate"];
        argv.extend_from_slice(args);
        build_cli().get_matches_from(argv)
    }

    #[test]
    fn loads_all_required_options() {
        let m = matches(&["--key", "k", "--secret", "s", "--crit", "10"]);
        let cfg = Config::from_matches(&m).unwrap();
        assert_eq!(cfg.api_key, "k");
        assert_eq!(cfg.api_secret, "s");
        assert_eq!(cfg.critical_percent, 10.0);
        assert_eq!(cfg.timeout_secs, 2);
    }

    #[test]
    fn missing_option_is_reported_by_name() {
        let m = matches(&["--key", "k", "--crit", "10"]);
        let err = Config::from_matches(&m).unwrap_err();
        assert_eq!(err.to_string(), "option \"secret\" not set or empty");
    }

    #[test]
    fn empty_option_is_treated_as_missing() {
        let m = matches(&["--key", "", "--secret", "s", "--crit", "10"]);
        let err = Config::from_matches(&m).unwrap_err();
        assert_eq!(err.to_string(), "option \"key\" not set or empty");
    }

    #[test]
    fn crit_must_be_a_percent() {
        let m = matches(&["--key", "k", "--secret", "s", "--crit", "abc"]);
        assert!(Config::from_matches(&m).is_err());
        let m = matches(&["--key", "k", "--secret", "s", "--crit", "150"]);
        assert!(Config::from_matches(&m).is_err());
        let m = matches(&["--key", "k", "--secret", "s", "--crit", "12.5"]);
        assert!(Config::from_matches(&m).is_ok());
    }
}
