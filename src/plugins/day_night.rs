use std::marker::PhantomData;

use bevy::prelude::*;

use crate::events::TimeOfDayChanged;
use crate::plugins::core::CycleSet;
use crate::resources::{GameClock, ScreenEffects, ScreenService, ScreenTone, TimeOfDay};
use crate::systems::{day_night_system, ToneScheduler};

/// Adds the in-game clock and the time-of-day tone schedule.
///
/// Generic over the screen service that receives tone requests.
pub struct DayNightPlugin<S = ScreenEffects> {
    _screen: PhantomData<fn() -> S>,
}

impl<S> Default for DayNightPlugin<S> {
    fn default() -> Self {
        Self {
            _screen: PhantomData,
        }
    }
}

impl<S: ScreenService> Plugin for DayNightPlugin<S> {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameClock>()
            .init_resource::<ToneScheduler>()
            .add_event::<TimeOfDayChanged>()
            .register_type::<GameClock>()
            .register_type::<TimeOfDay>()
            .register_type::<ScreenTone>()
            .add_systems(FixedUpdate, day_night_system::<S>.in_set(CycleSet::DayNight));
    }
}
