use bevy::prelude::*;

/// Frames that make up one in-game minute at tick speed 1.
/// At 60Hz FixedUpdate, 1 in-game hour = 50 real seconds.
pub const FRAMES_PER_MINUTE: u64 = 50;

/// Default tick speed multiplier.
pub const TICK_SPEED: u32 = 1;

/// Fastest supported tick speed: one minute per frame.
pub const MAX_TICK_SPEED: u32 = FRAMES_PER_MINUTE as u32;

/// Time of day the clock shows when a session starts.
pub const START_HOUR: u32 = 9;
pub const START_MINUTE: u32 = 0;

/// Resource tracking in-game time of day.
///
/// The clock advances once per FixedUpdate frame:
/// - `frame_count` increments on every tick
/// - every `FRAMES_PER_MINUTE / tick_speed` frames, `minutes` grows by one
/// - minutes roll into hours, hours roll into the next day
///
/// Only one rollover happens per tick. Out-of-range values left by
/// `set_time` lose their excess on the next tick instead of carrying.
#[derive(Resource, Reflect, Debug, Clone, PartialEq, Eq)]
#[reflect(Resource)]
pub struct GameClock {
    /// Current hour of the day (0-23).
    pub hours: u32,
    /// Current minute of the hour (0-59).
    pub minutes: u32,
    /// Frames ticked since the clock was created. Never reset.
    pub frame_count: u64,
    tick_speed: u32,
}

impl Default for GameClock {
    fn default() -> Self {
        Self {
            hours: START_HOUR,
            minutes: START_MINUTE,
            frame_count: 0,
            tick_speed: TICK_SPEED,
        }
    }
}

impl GameClock {
    pub fn with_tick_speed(mut self, tick_speed: u32) -> Self {
        self.tick_speed = tick_speed;
        self
    }

    pub fn tick_speed(&self) -> u32 {
        self.tick_speed
    }

    /// Frames between minute ticks. Speeds above `MAX_TICK_SPEED` run at one minute per frame.
    pub fn minute_tick_interval(&self) -> u64 {
        (FRAMES_PER_MINUTE / self.tick_speed.max(1) as u64).max(1)
    }

    /// Sets the time of day without validation.
    /// Out-of-range values are corrected by the next tick's normalization.
    pub fn set_time(&mut self, hours: u32, minutes: u32) {
        self.hours = hours;
        self.minutes = minutes;
    }

    /// Advances the clock by one frame.
    pub fn tick(&mut self) {
        self.frame_count += 1;
        if self.frame_count % self.minute_tick_interval() == 0 {
            self.minutes += 1;
        }
        self.normalize();
    }

    fn normalize(&mut self) {
        if self.minutes >= 60 {
            self.minutes = 0;
            self.hours += 1;
        }
        if self.hours >= 24 {
            self.hours = 0;
            info!("New day at frame {}", self.frame_count);
        }
    }

    /// Returns the time as "HH:MM" for HUD display.
    pub fn formatted_time(&self) -> String {
        format!("{:02}:{:02}", self.hours, self.minutes)
    }

    /// Writes the current time to the log.
    pub fn print_time(&self) {
        info!("Time: {} (frame {})", self.formatted_time(), self.frame_count);
    }
}
