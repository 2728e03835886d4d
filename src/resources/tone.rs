//! Screen tones and the time-of-day table that selects them.

use bevy::prelude::*;

/// Frames a tone transition takes once requested.
pub const TONE_DURATION_FRAMES: u32 = 300;

/// Colour adjustment applied over the whole rendered screen.
///
/// `red`, `green` and `blue` are signed deltas in -255..=255,
/// `gray` is a desaturation amount in 0..=255.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenTone {
    pub red: i16,
    pub green: i16,
    pub blue: i16,
    pub gray: i16,
}

impl ScreenTone {
    pub const fn new(red: i16, green: i16, blue: i16, gray: i16) -> Self {
        Self { red, green, blue, gray }
    }

    /// Cold, desaturated light just before sunrise.
    pub const TWILIGHT: Self = Self::new(-68, -51, -17, 68);
    /// Untinted screen.
    pub const DAYLIGHT: Self = Self::new(0, 0, 0, 0);
    /// Warm orange cast of late afternoon.
    pub const SUNSET: Self = Self::new(34, -17, -51, 0);
    /// Dark blue night.
    pub const NIGHT: Self = Self::new(-102, -85, -17, 85);

    /// Moves each channel `1/remaining` of the way toward `target`.
    ///
    /// Calling this with remaining = d, d-1, ..., 1 lands exactly on `target`.
    pub fn step_toward(&self, target: &ScreenTone, remaining: u32) -> ScreenTone {
        if remaining <= 1 {
            return *target;
        }
        let d = remaining as i32;
        let step = |from: i16, to: i16| -> i16 {
            ((from as i32 * (d - 1) + to as i32) / d) as i16
        };
        ScreenTone {
            red: step(self.red, target.red),
            green: step(self.green, target.green),
            blue: step(self.blue, target.blue),
            gray: step(self.gray, target.gray),
        }
    }

    /// Approximates the tone as a translucent overlay colour.
    ///
    /// Negative channels darken the screen, positive channels tint it.
    /// Gray adds a neutral veil.
    pub fn overlay_color(&self) -> Color {
        let channels = [self.red, self.green, self.blue];
        let darkness = channels.iter().map(|c| (-*c).max(0)).max().unwrap_or(0) as f32 / 255.0;
        let tint = channels.iter().map(|c| (*c).max(0)).max().unwrap_or(0) as f32 / 255.0;
        let veil = self.gray.clamp(0, 255) as f32 / 255.0 * 0.25;

        let alpha = (darkness.max(tint) + veil).clamp(0.0, 0.85);
        if alpha <= f32::EPSILON {
            return Color::NONE;
        }

        // Each channel keeps whatever the tone did not push down.
        let level = |c: i16| ((c as f32 + 255.0) / 510.0).clamp(0.0, 1.0);
        Color::srgba(level(self.red), level(self.green), level(self.blue), alpha)
    }
}

/// Named times of day, each entered at a fixed trigger hour.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    Dusk,
    Morning,
    Noon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// All variants, in trigger-hour order.
    pub const ALL: [TimeOfDay; 5] = [
        TimeOfDay::Dusk,
        TimeOfDay::Morning,
        TimeOfDay::Noon,
        TimeOfDay::Evening,
        TimeOfDay::Night,
    ];

    pub const fn trigger_hour(&self) -> u32 {
        match self {
            TimeOfDay::Dusk => 5,
            TimeOfDay::Morning => 9,
            TimeOfDay::Noon => 12,
            TimeOfDay::Evening => 17,
            TimeOfDay::Night => 20,
        }
    }

    pub const fn tone(&self) -> ScreenTone {
        match self {
            TimeOfDay::Dusk => ScreenTone::TWILIGHT,
            TimeOfDay::Morning | TimeOfDay::Noon => ScreenTone::DAYLIGHT,
            TimeOfDay::Evening => ScreenTone::SUNSET,
            TimeOfDay::Night => ScreenTone::NIGHT,
        }
    }

    /// The time of day whose trigger hour is exactly `hour`, if any.
    pub fn at_hour(hour: u32) -> Option<TimeOfDay> {
        Self::ALL.into_iter().find(|t| t.trigger_hour() == hour)
    }

    /// The time of day in effect at `hour`: the last one triggered at or before it.
    /// Hours before the first trigger belong to the previous night.
    pub fn current(hour: u32) -> TimeOfDay {
        Self::ALL
            .into_iter()
            .rev()
            .find(|t| t.trigger_hour() <= hour)
            .unwrap_or(TimeOfDay::Night)
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeOfDay::Dusk => "Dusk",
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Noon => "Noon",
            TimeOfDay::Evening => "Evening",
            TimeOfDay::Night => "Night",
        }
    }
}
