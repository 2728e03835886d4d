use bevy::prelude::*;
use rand::Rng;

use crate::events::WeatherChanged;
use crate::resources::{ScreenService, WeatherKind, WeatherRng};

/// Rolls are drawn uniformly from `0..RAIN_ROLL_RANGE`.
pub const RAIN_ROLL_RANGE: u32 = 1_000_000;
/// A roll above this flips the weather: 4,000 of every 1,000,000 rolls.
pub const RAIN_ROLL_THRESHOLD: u32 = 995_999;
/// Frames before a requested weather change starts to show.
pub const WEATHER_ONSET_FRAMES: u32 = 2;
/// Frames a weather change takes to reach full strength.
pub const WEATHER_DURATION_FRAMES: u32 = 10;

#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeatherState {
    #[default]
    None,
    Rain,
}

impl WeatherState {
    pub fn toggled(self) -> Self {
        match self {
            WeatherState::None => WeatherState::Rain,
            WeatherState::Rain => WeatherState::None,
        }
    }

    pub fn kind(self) -> WeatherKind {
        match self {
            WeatherState::None => WeatherKind::None,
            WeatherState::Rain => WeatherKind::Rain,
        }
    }
}

/// Two-state weather that flips on a rare per-frame roll.
#[derive(Resource, Reflect, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[reflect(Resource)]
pub struct WeatherToggle {
    pub state: WeatherState,
}

impl WeatherToggle {
    pub fn is_raining(&self) -> bool {
        self.state == WeatherState::Rain
    }

    /// Draws one roll and applies it. Returns the new state if it changed.
    pub fn update<R: Rng, S: ScreenService>(
        &mut self,
        rng: &mut R,
        screen: &mut S,
    ) -> Option<WeatherState> {
        let roll = rng.gen_range(0..RAIN_ROLL_RANGE);
        self.apply_roll(roll, screen)
    }

    /// Flips the state when `roll` is above the threshold and asks the screen to follow.
    pub fn apply_roll<S: ScreenService>(
        &mut self,
        roll: u32,
        screen: &mut S,
    ) -> Option<WeatherState> {
        if roll <= RAIN_ROLL_THRESHOLD {
            return None;
        }
        Some(self.flip(screen))
    }

    /// Flips the state unconditionally.
    pub fn flip<S: ScreenService>(&mut self, screen: &mut S) -> WeatherState {
        self.state = self.state.toggled();
        screen.request_weather_change(
            self.state.kind(),
            WEATHER_ONSET_FRAMES,
            WEATHER_DURATION_FRAMES,
        );
        self.state
    }
}

/// Flips the weather by hand, for debug controls.
///
/// Returns the change to announce, or `None` when there is no screen to show it on.
pub fn toggle_weather<S: ScreenService>(
    weather: &mut WeatherToggle,
    screen: Option<&mut S>,
) -> Option<WeatherChanged> {
    let Some(screen) = screen else {
        warn!("No screen service, cannot toggle rain");
        return None;
    };
    let from = weather.state;
    let to = weather.flip(screen);
    info!("Weather toggled: {:?} -> {:?}", from, to);
    Some(WeatherChanged { from, to })
}

/// Runs one weather roll per frame.
///
/// Without a screen service there is nothing to show, so no roll is drawn.
pub fn weather_system<S: ScreenService>(
    mut weather: ResMut<WeatherToggle>,
    mut rng: ResMut<WeatherRng>,
    screen: Option<ResMut<S>>,
    mut weather_events: EventWriter<WeatherChanged>,
) {
    let Some(mut screen) = screen else {
        return;
    };

    let from = weather.state;
    if let Some(to) = weather.update(&mut rng.0, &mut *screen) {
        info!("Weather changed: {:?} -> {:?}", from, to);
        weather_events.send(WeatherChanged { from, to });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::test_support::RecordingScreen;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_low_roll_keeps_state() {
        let mut weather = WeatherToggle::default();
        let mut screen = RecordingScreen::default();
        assert_eq!(weather.apply_roll(0, &mut screen), None);
        assert_eq!(weather.apply_roll(RAIN_ROLL_THRESHOLD, &mut screen), None);
        assert!(!weather.is_raining());
        assert!(screen.weather.is_empty());
    }

    #[test]
    fn test_high_roll_starts_rain() {
        let mut weather = WeatherToggle::default();
        let mut screen = RecordingScreen::default();
        assert_eq!(
            weather.apply_roll(RAIN_ROLL_THRESHOLD + 1, &mut screen),
            Some(WeatherState::Rain)
        );
        assert!(weather.is_raining());
        assert_eq!(screen.weather, vec![(WeatherKind::Rain, 2, 10)]);
    }

    #[test]
    fn test_high_roll_stops_rain() {
        let mut weather = WeatherToggle { state: WeatherState::Rain };
        let mut screen = RecordingScreen::default();
        assert_eq!(
            weather.apply_roll(RAIN_ROLL_RANGE - 1, &mut screen),
            Some(WeatherState::None)
        );
        assert_eq!(screen.weather, vec![(WeatherKind::None, 2, 10)]);
        assert!(screen.tones.is_empty());
    }

    #[test]
    fn test_manual_toggle_with_custom_screen() {
        let mut weather = WeatherToggle::default();
        let mut screen = RecordingScreen::default();

        let change = toggle_weather(&mut weather, Some(&mut screen));

        assert_eq!(
            change,
            Some(WeatherChanged {
                from: WeatherState::None,
                to: WeatherState::Rain
            })
        );
        assert_eq!(screen.weather, vec![(WeatherKind::Rain, 2, 10)]);
    }

    #[test]
    fn test_manual_toggle_without_screen_is_noop() {
        let mut weather = WeatherToggle::default();
        assert_eq!(toggle_weather::<RecordingScreen>(&mut weather, None), None);
        assert_eq!(weather.state, WeatherState::None);
    }

    #[test]
    fn test_trigger_rate_matches_threshold() {
        let mut rng = StdRng::seed_from_u64(0xC10D);
        let trials = 1_000_000;
        let p = (RAIN_ROLL_RANGE - 1 - RAIN_ROLL_THRESHOLD) as f64 / RAIN_ROLL_RANGE as f64;
        assert!((p - 0.004).abs() < 1e-12);

        let mut onsets = 0u32;
        for _ in 0..trials {
            // fresh toggle per trial: every trigger is a rain onset
            let mut weather = WeatherToggle::default();
            let mut screen = RecordingScreen::default();
            if weather.update(&mut rng, &mut screen) == Some(WeatherState::Rain) {
                onsets += 1;
            }
        }

        let expected = trials as f64 * p;
        let sigma = (trials as f64 * p * (1.0 - p)).sqrt();
        assert!(
            (onsets as f64 - expected).abs() < 5.0 * sigma,
            "onsets {} outside {} +/- {}",
            onsets,
            expected,
            5.0 * sigma
        );
    }

    #[test]
    fn test_toggle_alternates_over_a_run() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut weather = WeatherToggle::default();
        let mut screen = RecordingScreen::default();
        for _ in 0..100_000 {
            weather.update(&mut rng, &mut screen);
        }
        assert!(!screen.weather.is_empty());
        for (i, (kind, onset, duration)) in screen.weather.iter().enumerate() {
            let expected = if i % 2 == 0 { WeatherKind::Rain } else { WeatherKind::None };
            assert_eq!(*kind, expected);
            assert_eq!((*onset, *duration), (WEATHER_ONSET_FRAMES, WEATHER_DURATION_FRAMES));
        }
    }
}
