use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context};

pub const DEFAULT_ROWS: usize = 60;
pub const DEFAULT_COLS: usize = 80;
pub const DEFAULT_ALIVE_PROBABILITY: f64 = 0.1;
pub const STEP_INTERVAL: Duration = Duration::from_millis(100);

const USAGE: &str = "usage: runner [rows] [cols] [probability] [generations] [seed]";

/// Run parameters, read from positional arguments. `-` keeps a default.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,
    pub alive_probability: f64,
    /// Stop after this many generations; `None` runs until the grid settles.
    pub generations: Option<u64>,
    /// Fixed seed for the initial soup; `None` draws a fresh one.
    pub seed: Option<u64>,
    pub step_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            alive_probability: DEFAULT_ALIVE_PROBABILITY,
            generations: None,
            seed: None,
            step_interval: STEP_INTERVAL,
        }
    }
}

impl Config {
    pub fn from_args<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        if args.len() > 5 {
            bail!("too many arguments\n{USAGE}");
        }

        let mut config = Config::default();
        if let Some(rows) = parse_arg(&args, 0, "rows")? {
            config.rows = rows;
        }
        if let Some(cols) = parse_arg(&args, 1, "cols")? {
            config.cols = cols;
        }
        if let Some(probability) = parse_arg(&args, 2, "probability")? {
            config.alive_probability = probability;
        }
        config.generations = parse_arg(&args, 3, "generations")?;
        config.seed = parse_arg(&args, 4, "seed")?;
        Ok(config)
    }
}

fn parse_arg<T>(args: &[String], index: usize, name: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match args.get(index).map(String::as_str) {
        None | Some("-") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .with_context(|| format!("invalid {name} {value:?}\n{USAGE}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_args(args(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!((config.rows, config.cols), (60, 80));
        assert_eq!(config.alive_probability, 0.1);
        assert_eq!(config.generations, None);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_positional_overrides() {
        let config = Config::from_args(args(&["20", "30", "0.25", "500", "7"])).unwrap();
        assert_eq!(config.rows, 20);
        assert_eq!(config.cols, 30);
        assert_eq!(config.alive_probability, 0.25);
        assert_eq!(config.generations, Some(500));
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_placeholder_keeps_default() {
        let config = Config::from_args(args(&["-", "-", "-", "-", "99"])).unwrap();
        assert_eq!((config.rows, config.cols), (60, 80));
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_invalid_values() {
        let err = Config::from_args(args(&["ten"])).unwrap_err();
        assert!(err.to_string().contains("invalid rows"));
        assert!(Config::from_args(args(&["10", "-3"])).is_err());
        assert!(Config::from_args(args(&["10", "10", "half"])).is_err());
        assert!(Config::from_args(args(&["1", "2", "0.5", "4", "5", "6"])).is_err());
    }
}
