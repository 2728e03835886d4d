use bevy::prelude::*;

use crate::resources::TimeOfDay;
use crate::systems::WeatherState;

/// Event emitted when the clock enters a named time of day and a tone change was requested.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDayChanged {
    /// The time of day that was entered.
    pub time_of_day: TimeOfDay,
    /// Clock hour at the moment of the change.
    pub hour: u32,
}

/// Event emitted when the weather toggle flips.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherChanged {
    /// Previous weather state.
    pub from: WeatherState,
    /// New weather state.
    pub to: WeatherState,
}
