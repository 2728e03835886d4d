use bevy::prelude::*;

use crate::resources::{CliArgs, CycleConfig, GameClock, WeatherRng};

/// Host frames per second. One frame is one FixedUpdate step.
pub const FRAMES_PER_SECOND: f64 = 60.0;

/// Ordering of the per-frame cycle work inside FixedUpdate.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CycleSet {
    /// Clock tick and tone schedule.
    DayNight,
    /// Weather roll.
    Weather,
    /// Screen effect animation, after this frame's requests.
    Screen,
}

/// Loads settings, fixes the frame rate and seeds the clock and weather resources.
#[derive(Default)]
pub struct CorePlugin {
    cli: CliArgs,
    config: Option<CycleConfig>,
}

impl CorePlugin {
    /// Reads the config file (default location or `--config`) and applies CLI overrides.
    pub fn from_cli(cli: CliArgs) -> Self {
        Self { cli, config: None }
    }

    /// Uses `config` as-is, without touching the filesystem.
    pub fn with_config(config: CycleConfig) -> Self {
        Self {
            cli: CliArgs::default(),
            config: Some(config),
        }
    }

    fn resolve_config(&self) -> CycleConfig {
        let mut config = match &self.config {
            Some(config) => config.clone(),
            None => CycleConfig::load_or_default(self.cli.config_path.as_deref()),
        };
        self.cli.apply_to(&mut config);

        if let Err(e) = config.validate() {
            error!("{}; using default cycle settings", e);
            return CycleConfig::default();
        }
        config
    }
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        let config = self.resolve_config();

        let mut clock = GameClock::default().with_tick_speed(config.tick_speed);
        clock.set_time(config.start_hour, config.start_minute);
        info!(
            "Cycle starts at {} (tick speed {})",
            clock.formatted_time(),
            clock.tick_speed()
        );

        app.insert_resource(Time::<Fixed>::from_hz(FRAMES_PER_SECOND))
            .configure_sets(
                FixedUpdate,
                (CycleSet::DayNight, CycleSet::Weather, CycleSet::Screen).chain(),
            )
            .insert_resource(clock)
            .insert_resource(WeatherRng::from_seed_or_entropy(config.weather_seed))
            .insert_resource(self.cli.clone())
            .insert_resource(config);
    }
}
