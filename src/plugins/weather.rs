use std::marker::PhantomData;

use bevy::prelude::*;

use crate::events::WeatherChanged;
use crate::plugins::core::CycleSet;
use crate::resources::{ScreenEffects, ScreenService, WeatherRng};
use crate::systems::{weather_system, WeatherState, WeatherToggle};

/// Adds the random rain toggle.
///
/// Generic over the screen service that receives weather requests.
pub struct WeatherPlugin<S = ScreenEffects> {
    _screen: PhantomData<fn() -> S>,
}

impl<S> Default for WeatherPlugin<S> {
    fn default() -> Self {
        Self {
            _screen: PhantomData,
        }
    }
}

impl<S: ScreenService> Plugin for WeatherPlugin<S> {
    fn build(&self, app: &mut App) {
        app.init_resource::<WeatherToggle>()
            .init_resource::<WeatherRng>()
            .add_event::<WeatherChanged>()
            .register_type::<WeatherToggle>()
            .register_type::<WeatherState>()
            .add_systems(FixedUpdate, weather_system::<S>.in_set(CycleSet::Weather));
    }
}
