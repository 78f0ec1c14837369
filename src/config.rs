// SPDX-License-Identifier: MIT

use std::num::ParseIntError;
use std::thread;

use thiserror::Error;
use tracing::warn;

/// Array size used when the CLI flags are absent.
pub const DEFAULT_ARRAY_SIZE: usize = 1_000_000;

/// Failure to turn a CLI flag into a number. Not caught anywhere; it
/// propagates out of `main` and terminates the run.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {flag}: {source}")]
    InvalidFlagValue {
        flag: &'static str,
        value: String,
        source: ParseIntError,
    },
    #[error("{flag} was given without a value")]
    MissingFlagValue { flag: &'static str },
}

/// Benchmark parameters taken from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    /// Number of elements in the generated input array.
    pub array_size: usize,
    /// Number of worker threads used by every parallel strategy.
    pub num_threads: usize,
}

impl BenchConfig {
    /// Parses `--size <N>` and `--thread <T>` from the given arguments.
    ///
    /// If either flag is absent a warning is logged and both defaults are
    /// substituted: 1,000,000 elements and the detected hardware
    /// concurrency. A flag whose value does not parse as a number is an
    /// error.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();

        let size_value = flag_value(&args, "--size")?;
        let thread_value = flag_value(&args, "--thread")?;

        let (Some(size_value), Some(thread_value)) = (size_value, thread_value) else {
            warn!("missing --size or --thread, using default values");
            return Ok(BenchConfig {
                array_size: DEFAULT_ARRAY_SIZE,
                num_threads: hardware_concurrency(),
            });
        };

        Ok(BenchConfig {
            array_size: parse_flag("--size", size_value)?,
            num_threads: parse_flag("--thread", thread_value)?,
        })
    }
}

/// Returns the value following `flag`, `None` if the flag is absent.
fn flag_value<'a>(args: &'a [String], flag: &'static str) -> Result<Option<&'a str>, ConfigError> {
    let Some(position) = args.iter().position(|arg| arg == flag) else {
        return Ok(None);
    };
    args.get(position + 1)
        .map(|value| Some(value.as_str()))
        .ok_or(ConfigError::MissingFlagValue { flag })
}

fn parse_flag(flag: &'static str, value: &str) -> Result<usize, ConfigError> {
    value
        .parse()
        .map_err(|source| ConfigError::InvalidFlagValue {
            flag,
            value: value.to_owned(),
            source,
        })
}

fn hardware_concurrency() -> usize {
    thread::available_parallelism()
        .map(usize::from)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_both_flags_present() {
        let config = BenchConfig::from_args(args(&["--size", "5000", "--thread", "4"])).unwrap();
        assert_eq!(
            config,
            BenchConfig {
                array_size: 5000,
                num_threads: 4
            }
        );
    }

    #[test]
    fn test_flag_order_does_not_matter() {
        let config = BenchConfig::from_args(args(&["--thread", "2", "--size", "10"])).unwrap();
        assert_eq!(config.array_size, 10);
        assert_eq!(config.num_threads, 2);
    }

    #[test]
    fn test_missing_flags_fall_back_to_defaults() {
        let config = BenchConfig::from_args(args(&[])).unwrap();
        assert_eq!(config.array_size, DEFAULT_ARRAY_SIZE);
        assert!(config.num_threads >= 1);
    }

    #[test]
    fn test_one_missing_flag_defaults_both() {
        // Mirrors the all-or-nothing presence check of the flags.
        let config = BenchConfig::from_args(args(&["--size", "42"])).unwrap();
        assert_eq!(config.array_size, DEFAULT_ARRAY_SIZE);
    }

    #[test]
    fn test_malformed_size_is_an_error() {
        let result = BenchConfig::from_args(args(&["--size", "lots", "--thread", "4"]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidFlagValue { flag: "--size", .. })
        ));
    }

    #[test]
    fn test_trailing_flag_without_value_is_an_error() {
        let result = BenchConfig::from_args(args(&["--size", "100", "--thread"]));
        assert!(matches!(
            result,
            Err(ConfigError::MissingFlagValue { flag: "--thread" })
        ));
    }
}
