use std::path::PathBuf;

use bevy::prelude::*;

use super::config::CycleConfig;
use super::game_clock::MAX_TICK_SPEED;

/// Command-line arguments parsed at startup.
/// Values given here override the config file.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// Config file to read instead of the default location.
    /// Usage: `cargo run -- --config cycle.json`
    pub config_path: Option<PathBuf>,

    /// Fixed weather seed, for reproducible runs.
    /// Usage: `cargo run -- --seed 42`
    pub seed: Option<u64>,

    /// Starting time as (hours, minutes).
    /// Usage: `cargo run -- --time 04:58`
    pub start_time: Option<(u32, u32)>,

    /// Clock speed multiplier, 1..=`MAX_TICK_SPEED`.
    /// Usage: `cargo run -- --speed 10`
    pub tick_speed: Option<u32>,

    /// Run without a window for the given number of frames, then exit.
    /// Usage: `cargo run -- --headless 18000`
    pub headless_frames: Option<u64>,
}

impl CliArgs {
    /// Parse the process's command-line arguments.
    pub fn parse() -> Self {
        Self::parse_from(std::env::args().skip(1))
    }

    /// Parse arguments, not including the program name.
    /// Supports:
    /// - `--config <path>`
    /// - `--seed <u64>`
    /// - `--time <HH:MM>`
    /// - `--speed <n>`
    /// - `--headless <frames>`
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let mut cli = CliArgs::default();

        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            let value = args.get(i + 1).map(String::as_str);
            match (flag, value) {
                ("--config", Some(path)) => {
                    cli.config_path = Some(PathBuf::from(path));
                    i += 2;
                }
                ("--seed", Some(seed)) => {
                    match seed.parse() {
                        Ok(seed) => cli.seed = Some(seed),
                        Err(_) => warn!("CLI: --seed expects an integer, got '{}'", seed),
                    }
                    i += 2;
                }
                ("--time", Some(time)) => {
                    match parse_time(time) {
                        Some(time) => cli.start_time = Some(time),
                        None => warn!("CLI: --time expects HH:MM, got '{}'", time),
                    }
                    i += 2;
                }
                ("--speed", Some(speed)) => {
                    match speed.parse() {
                        Ok(speed) if (1..=MAX_TICK_SPEED).contains(&speed) => {
                            cli.tick_speed = Some(speed)
                        }
                        _ => warn!(
                            "CLI: --speed expects an integer in 1..={}, got '{}'",
                            MAX_TICK_SPEED, speed
                        ),
                    }
                    i += 2;
                }
                ("--headless", Some(frames)) => {
                    match frames.parse() {
                        Ok(frames) => cli.headless_frames = Some(frames),
                        Err(_) => warn!("CLI: --headless expects a frame count, got '{}'", frames),
                    }
                    i += 2;
                }
                ("--config" | "--seed" | "--time" | "--speed" | "--headless", None) => {
                    warn!("CLI: {} requires an argument", flag);
                    i += 1;
                }
                (arg, _) => {
                    if arg.starts_with('-') {
                        warn!("CLI: Unknown argument '{}'", arg);
                    }
                    i += 1;
                }
            }
        }

        cli
    }

    /// Applies the command-line overrides on top of `config`.
    pub fn apply_to(&self, config: &mut CycleConfig) {
        if let Some(seed) = self.seed {
            config.weather_seed = Some(seed);
        }
        if let Some((hours, minutes)) = self.start_time {
            config.start_hour = hours;
            config.start_minute = minutes;
        }
        if let Some(speed) = self.tick_speed {
            config.tick_speed = speed;
        }
    }
}

fn parse_time(s: &str) -> Option<(u32, u32)> {
    let (hours, minutes) = s.split_once(':')?;
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    (hours < 24 && minutes < 60).then_some((hours, minutes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_flags() {
        let cli = CliArgs::parse_from([
            "--config", "my.json", "--seed", "42", "--time", "04:58", "--speed", "3",
            "--headless", "600",
        ]);
        assert_eq!(cli.config_path, Some(PathBuf::from("my.json")));
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.start_time, Some((4, 58)));
        assert_eq!(cli.tick_speed, Some(3));
        assert_eq!(cli.headless_frames, Some(600));
    }

    #[test]
    fn test_bad_values_are_ignored() {
        let cli = CliArgs::parse_from(["--time", "25:00", "--seed", "abc", "--speed", "0"]);
        assert_eq!(cli, CliArgs::default());
    }

    #[test]
    fn test_speed_above_max_is_ignored() {
        assert_eq!(CliArgs::parse_from(["--speed", "51"]).tick_speed, None);
        assert_eq!(CliArgs::parse_from(["--speed", "4294967295"]).tick_speed, None);
        assert_eq!(CliArgs::parse_from(["--speed", "50"]).tick_speed, Some(50));
    }

    #[test]
    fn test_missing_value_and_unknown_flag() {
        let cli = CliArgs::parse_from(["--verbose", "--seed"]);
        assert_eq!(cli, CliArgs::default());
    }

    #[test]
    fn test_apply_overrides_config() {
        let cli = CliArgs::parse_from(["--time", "20:15", "--seed", "9"]);
        let mut config = CycleConfig::default();
        cli.apply_to(&mut config);
        assert_eq!(config.start_hour, 20);
        assert_eq!(config.start_minute, 15);
        assert_eq!(config.weather_seed, Some(9));
        assert_eq!(config.tick_speed, 1);
    }
}
