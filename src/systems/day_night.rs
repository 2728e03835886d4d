use bevy::prelude::*;

use crate::events::TimeOfDayChanged;
use crate::resources::{
    CycleConfig, GameClock, ScreenService, TimeOfDay, TONE_DURATION_FRAMES,
};

/// Issues a tone change when the clock enters one of the trigger hours.
///
/// Remembers the last hour it saw so each trigger fires once, on the frame
/// the hour is entered, and not again until the hour comes round next day.
#[derive(Resource, Debug, Default)]
pub struct ToneScheduler {
    last_hour: Option<u32>,
    waiting_for_screen: bool,
}

impl ToneScheduler {
    /// Requests the tone for every time of day triggered at `hour`.
    /// Returns the matching time of day, if any.
    pub fn evaluate<S: ScreenService>(&self, hour: u32, screen: &mut S) -> Option<TimeOfDay> {
        let mut fired = None;
        for time_of_day in TimeOfDay::ALL {
            if time_of_day.trigger_hour() == hour {
                screen.request_tone_change(time_of_day.tone(), TONE_DURATION_FRAMES);
                fired = Some(time_of_day);
            }
        }
        fired
    }

    /// Evaluates `hour` only if it differs from the last observed hour.
    pub fn observe<S: ScreenService>(&mut self, hour: u32, screen: &mut S) -> Option<TimeOfDay> {
        if self.waiting_for_screen {
            debug!("Screen service available, resuming tone schedule");
            self.waiting_for_screen = false;
        }
        if self.last_hour == Some(hour) {
            return None;
        }
        self.last_hour = Some(hour);
        self.evaluate(hour, screen)
    }

    /// Forgets the last hour so the current one counts as entered once a screen is bound.
    pub fn screen_unavailable(&mut self) {
        if !self.waiting_for_screen {
            debug!("Screen service not available, deferring tone changes");
            self.waiting_for_screen = true;
        }
        self.last_hour = None;
    }

    pub fn last_hour(&self) -> Option<u32> {
        self.last_hour
    }
}

/// Advances the clock one frame and applies the tone schedule.
///
/// The screen service is looked up every frame; while it is missing the
/// clock keeps running but no tone is requested.
pub fn day_night_system<S: ScreenService>(
    mut clock: ResMut<GameClock>,
    mut scheduler: ResMut<ToneScheduler>,
    screen: Option<ResMut<S>>,
    config: Option<Res<CycleConfig>>,
    mut time_of_day_events: EventWriter<TimeOfDayChanged>,
) {
    let previous_hour = clock.hours;
    clock.tick();

    if clock.hours != previous_hour && config.is_some_and(|c| c.log_hour_changes) {
        clock.print_time();
    }

    let Some(mut screen) = screen else {
        scheduler.screen_unavailable();
        return;
    };

    if let Some(time_of_day) = scheduler.observe(clock.hours, &mut *screen) {
        info!("{} at {}", time_of_day.label(), clock.formatted_time());
        time_of_day_events.send(TimeOfDayChanged {
            time_of_day,
            hour: clock.hours,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{ScreenTone, FRAMES_PER_MINUTE};
    use crate::systems::test_support::RecordingScreen;

    #[test]
    fn test_evaluate_dusk() {
        let scheduler = ToneScheduler::default();
        let mut screen = RecordingScreen::default();
        let mut clock = GameClock::default();
        clock.set_time(5, 0);

        let fired = scheduler.evaluate(clock.hours, &mut screen);

        assert_eq!(fired, Some(TimeOfDay::Dusk));
        assert_eq!(screen.tones, vec![(ScreenTone::TWILIGHT, 300)]);
        assert!(screen.weather.is_empty());
    }

    #[test]
    fn test_evaluate_non_trigger_hours_fire_nothing() {
        let scheduler = ToneScheduler::default();
        let mut screen = RecordingScreen::default();
        for hour in (0..24).filter(|h| ![5, 9, 12, 17, 20].contains(h)) {
            assert_eq!(scheduler.evaluate(hour, &mut screen), None);
        }
        assert!(screen.tones.is_empty());
    }

    #[test]
    fn test_evaluate_each_trigger_hour() {
        let scheduler = ToneScheduler::default();
        for time_of_day in TimeOfDay::ALL {
            let mut screen = RecordingScreen::default();
            let fired = scheduler.evaluate(time_of_day.trigger_hour(), &mut screen);
            assert_eq!(fired, Some(time_of_day));
            assert_eq!(screen.tones, vec![(time_of_day.tone(), TONE_DURATION_FRAMES)]);
        }
    }

    #[test]
    fn test_reaching_noon_from_morning_fires_noon_only() {
        let scheduler = ToneScheduler::default();
        let mut screen = RecordingScreen::default();
        let mut clock = GameClock::default();

        let frames = FRAMES_PER_MINUTE * 60 * 3;
        for _ in 0..frames {
            clock.tick();
        }
        assert_eq!((clock.hours, clock.minutes), (12, 0));

        assert_eq!(scheduler.evaluate(clock.hours, &mut screen), Some(TimeOfDay::Noon));
        assert_eq!(screen.tones.len(), 1);
    }

    #[test]
    fn test_observe_fires_once_per_hour_entry() {
        let mut scheduler = ToneScheduler::default();
        let mut screen = RecordingScreen::default();
        let mut clock = GameClock::default();
        let mut fired = Vec::new();

        // 09:00 through 20:59
        for _ in 0..FRAMES_PER_MINUTE * 60 * 12 - 1 {
            if let Some(t) = scheduler.observe(clock.hours, &mut screen) {
                fired.push(t);
            }
            clock.tick();
        }

        assert_eq!(
            fired,
            vec![TimeOfDay::Morning, TimeOfDay::Noon, TimeOfDay::Evening, TimeOfDay::Night]
        );
        assert_eq!(screen.tones.len(), 4);
    }

    #[test]
    fn test_set_time_jump_counts_as_entry() {
        let mut scheduler = ToneScheduler::default();
        let mut screen = RecordingScreen::default();
        let mut clock = GameClock::default();

        scheduler.observe(clock.hours, &mut screen);
        clock.set_time(17, 30);
        assert_eq!(scheduler.observe(clock.hours, &mut screen), Some(TimeOfDay::Evening));
        assert_eq!(scheduler.observe(clock.hours, &mut screen), None);
    }

    #[test]
    fn test_screen_unavailable_resets_last_hour() {
        let mut scheduler = ToneScheduler::default();
        let mut screen = RecordingScreen::default();

        scheduler.observe(9, &mut screen);
        assert_eq!(scheduler.last_hour(), Some(9));
        scheduler.screen_unavailable();
        assert_eq!(scheduler.last_hour(), None);
        assert_eq!(scheduler.observe(9, &mut screen), Some(TimeOfDay::Morning));
        assert_eq!(screen.tones.len(), 2);
    }
}
