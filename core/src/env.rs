//! Environment-variable lookups with fallbacks.

use log::LevelFilter;
use std::env;
use std::fmt::Display;
use std::str::FromStr;

pub fn parse_log_level(value: &str) -> Option<LevelFilter> {
    match value.trim().to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" | "warning" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

pub fn resolve_log_level(var: &str, default: LevelFilter) -> LevelFilter {
    env::var(var)
        .ok()
        .as_deref()
        .and_then(parse_log_level)
        .unwrap_or(default)
}

/// Resolve an optional log file path. An empty value or `none` disables the
/// file; an unset variable yields `default`.
pub fn resolve_log_file(var: &str, default: Option<&str>) -> Option<String> {
    match env::var(var) {
        Ok(value) => normalize_log_file(&value),
        Err(_) => default.map(str::to_string),
    }
}

fn normalize_log_file(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse `var` as `T`, falling back to `default` when it is unset or invalid.
pub fn resolve_parsed<T>(var: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(var) {
        Ok(value) => match value.trim().parse::<T>() {
            Ok(parsed) => parsed,
            Err(e) => {
                log::warn!("Ignoring {var}={value:?} ({e}); using {default}");
                default
            }
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_levels_case_insensitively() {
        assert_eq!(parse_log_level("DEBUG"), Some(LevelFilter::Debug));
        assert_eq!(parse_log_level(" warning "), Some(LevelFilter::Warn));
        assert_eq!(parse_log_level("off"), Some(LevelFilter::Off));
        assert_eq!(parse_log_level("loud"), None);
    }

    #[test]
    fn empty_or_none_disables_log_file() {
        assert_eq!(normalize_log_file(""), None);
        assert_eq!(normalize_log_file("  NONE "), None);
        assert_eq!(normalize_log_file("bench.log"), Some("bench.log".to_string()));
    }

    #[test]
    fn unset_variables_use_defaults() {
        let var = "BENCH_CORE_TEST_SURELY_UNSET_VARIABLE";
        assert_eq!(resolve_parsed(var, 17usize), 17);
        assert_eq!(resolve_log_level(var, LevelFilter::Info), LevelFilter::Info);
        assert_eq!(resolve_log_file(var, Some("x.log")), Some("x.log".to_string()));
        assert_eq!(resolve_log_file(var, None), None);
    }
}
