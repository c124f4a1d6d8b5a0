use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a default; the service runs with no environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// When true, the extract endpoint rejects unknown industry/role
    /// identifiers with a validation error instead of silently falling back
    /// to the defaults.
    pub strict_dictionary_keys: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            strict_dictionary_keys: std::env::var("STRICT_DICTIONARY_KEYS")
                .map(|v| flag_enabled(&v))
                .unwrap_or(false),
        })
    }
}

fn flag_enabled(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_enabled_accepts_true_and_one() {
        assert!(flag_enabled("1"));
        assert!(flag_enabled("true"));
        assert!(flag_enabled("TRUE"));
    }

    #[test]
    fn test_flag_enabled_rejects_other_values() {
        assert!(!flag_enabled("0"));
        assert!(!flag_enabled("false"));
        assert!(!flag_enabled("yes"));
        assert!(!flag_enabled(""));
    }
}
