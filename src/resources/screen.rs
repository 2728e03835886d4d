use bevy::prelude::*;

use super::tone::ScreenTone;

/// Kind of weather the screen can render.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeatherKind {
    #[default]
    None,
    Rain,
}

/// Screen effects the day/night and weather systems drive.
///
/// Implemented by whatever resource owns the rendered screen. The systems
/// only issue requests; how and when they show up is up to the implementor.
pub trait ScreenService: Resource {
    /// Fades the screen tone to `tone` over `duration_frames`.
    fn request_tone_change(&mut self, tone: ScreenTone, duration_frames: u32);

    /// Switches weather to `kind`, starting after `onset_frames` and
    /// reaching full strength over `duration_frames`.
    fn request_weather_change(
        &mut self,
        kind: WeatherKind,
        onset_frames: u32,
        duration_frames: u32,
    );

    /// Tone currently shown, for diagnostics. `None` if the service can't tell.
    fn current_tone(&self) -> Option<ScreenTone> {
        None
    }

    /// Rain strength from 0.0 to 1.0, for diagnostics.
    fn rain_intensity(&self) -> Option<f32> {
        None
    }
}

/// Reference screen service: tracks the tone and rain intensity the renderer draws.
#[derive(Resource, Reflect, Debug, Clone, Default)]
#[reflect(Resource)]
pub struct ScreenEffects {
    /// Tone currently on screen.
    pub tone: ScreenTone,
    /// Tone being faded toward.
    pub target_tone: ScreenTone,
    /// Frames left in the current tone fade.
    pub tone_frames_left: u32,
    /// Weather the screen is showing or moving toward.
    pub weather: WeatherKind,
    /// Rain strength from 0.0 (dry) to 1.0 (full rain).
    pub rain_intensity: f32,
    weather_delay_left: u32,
    weather_frames_left: u32,
}

impl ScreenService for ScreenEffects {
    fn request_tone_change(&mut self, tone: ScreenTone, duration_frames: u32) {
        self.target_tone = tone;
        self.tone_frames_left = duration_frames;
        if duration_frames == 0 {
            self.tone = tone;
        }
    }

    fn request_weather_change(
        &mut self,
        kind: WeatherKind,
        onset_frames: u32,
        duration_frames: u32,
    ) {
        self.weather = kind;
        self.weather_delay_left = onset_frames;
        self.weather_frames_left = duration_frames;
        if onset_frames == 0 && duration_frames == 0 {
            self.rain_intensity = self.target_rain_intensity();
        }
    }

    fn current_tone(&self) -> Option<ScreenTone> {
        Some(self.tone)
    }

    fn rain_intensity(&self) -> Option<f32> {
        Some(self.rain_intensity)
    }
}

impl ScreenEffects {
    /// Returns true while a tone fade is in progress.
    pub fn is_fading(&self) -> bool {
        self.tone_frames_left > 0
    }

    fn target_rain_intensity(&self) -> f32 {
        match self.weather {
            WeatherKind::None => 0.0,
            WeatherKind::Rain => 1.0,
        }
    }

    /// Advances both effects by one frame.
    pub fn advance(&mut self) {
        if self.tone_frames_left > 0 {
            self.tone = self.tone.step_toward(&self.target_tone, self.tone_frames_left);
            self.tone_frames_left -= 1;
        }

        if self.weather_delay_left > 0 {
            self.weather_delay_left -= 1;
            return;
        }

        let target = self.target_rain_intensity();
        if self.weather_frames_left > 0 {
            let d = self.weather_frames_left as f32;
            self.rain_intensity += (target - self.rain_intensity) / d;
            self.weather_frames_left -= 1;
        } else {
            self.rain_intensity = target;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_fade_completes_after_duration() {
        let mut screen = ScreenEffects::default();
        screen.request_tone_change(ScreenTone::SUNSET, 300);
        assert!(screen.is_fading());
        for _ in 0..299 {
            screen.advance();
        }
        assert!(screen.is_fading());
        assert_ne!(screen.tone, ScreenTone::SUNSET);
        screen.advance();
        assert!(!screen.is_fading());
        assert_eq!(screen.tone, ScreenTone::SUNSET);
    }

    #[test]
    fn test_zero_duration_tone_is_immediate() {
        let mut screen = ScreenEffects::default();
        screen.request_tone_change(ScreenTone::NIGHT, 0);
        assert_eq!(screen.tone, ScreenTone::NIGHT);
        assert!(!screen.is_fading());
    }

    #[test]
    fn test_rain_waits_for_onset_then_ramps() {
        let mut screen = ScreenEffects::default();
        screen.request_weather_change(WeatherKind::Rain, 2, 10);

        screen.advance();
        screen.advance();
        assert_eq!(screen.rain_intensity, 0.0);

        screen.advance();
        assert!(screen.rain_intensity > 0.0 && screen.rain_intensity < 1.0);

        for _ in 0..9 {
            screen.advance();
        }
        assert!((screen.rain_intensity - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_reports_tone_and_rain() {
        let mut screen = ScreenEffects::default();
        screen.request_tone_change(ScreenTone::NIGHT, 0);
        screen.request_weather_change(WeatherKind::Rain, 0, 0);
        assert_eq!(ScreenService::current_tone(&screen), Some(ScreenTone::NIGHT));
        assert_eq!(ScreenService::rain_intensity(&screen), Some(1.0));
    }

    #[test]
    fn test_rain_stops() {
        let mut screen = ScreenEffects::default();
        screen.request_weather_change(WeatherKind::Rain, 0, 0);
        assert_eq!(screen.rain_intensity, 1.0);

        screen.request_weather_change(WeatherKind::None, 2, 10);
        for _ in 0..12 {
            screen.advance();
        }
        assert!(screen.rain_intensity.abs() < 1e-5);
        assert_eq!(screen.weather, WeatherKind::None);
    }
}
