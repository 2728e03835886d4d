use std::marker::PhantomData;

use bevy::prelude::*;
use leafwing_input_manager::prelude::*;

use crate::events::WeatherChanged;
use crate::resources::{GameClock, ScreenEffects, ScreenService};
use crate::systems::{toggle_weather, WeatherToggle};

#[derive(Actionlike, PartialEq, Eq, Clone, Copy, Hash, Debug, Reflect)]
pub enum DebugAction {
    PrintTime,
    SkipHour,
    ToggleRain,
}

/// Debug key bindings. Generic over the screen service rain toggles go to.
pub struct InputPlugin<S = ScreenEffects> {
    _screen: PhantomData<fn() -> S>,
}

impl<S> Default for InputPlugin<S> {
    fn default() -> Self {
        Self {
            _screen: PhantomData,
        }
    }
}

impl<S: ScreenService> Plugin for InputPlugin<S> {
    fn build(&self, app: &mut App) {
        app.add_plugins(InputManagerPlugin::<DebugAction>::default())
            .add_event::<WeatherChanged>()
            .add_systems(Startup, spawn_debug_controls)
            .add_systems(Update, handle_debug_actions::<S>);
    }
}

pub fn get_default_input_map() -> InputMap<DebugAction> {
    let mut input_map = InputMap::default();

    input_map.insert(DebugAction::PrintTime, KeyCode::F3);
    input_map.insert(DebugAction::SkipHour, KeyCode::F4);
    input_map.insert(DebugAction::ToggleRain, KeyCode::F6);

    input_map
}

fn spawn_debug_controls(mut commands: Commands) {
    commands.spawn((
        Name::new("Debug Controls"),
        InputManagerBundle::with_map(get_default_input_map()),
    ));
}

fn handle_debug_actions<S: ScreenService>(
    query: Query<&ActionState<DebugAction>>,
    clock: Option<ResMut<GameClock>>,
    weather: Option<ResMut<WeatherToggle>>,
    mut screen: Option<ResMut<S>>,
    mut weather_events: EventWriter<WeatherChanged>,
) {
    let Ok(action_state) = query.get_single() else {
        return;
    };

    if let Some(mut clock) = clock {
        if action_state.just_pressed(&DebugAction::PrintTime) {
            clock.print_time();
        }

        if action_state.just_pressed(&DebugAction::SkipHour) {
            // hour 24 wraps on the next tick
            let next_hour = clock.hours + 1;
            clock.set_time(next_hour, 0);
        }
    }

    if action_state.just_pressed(&DebugAction::ToggleRain) {
        let Some(mut weather) = weather else {
            return;
        };
        if let Some(change) = toggle_weather(&mut weather, screen.as_deref_mut()) {
            weather_events.send(change);
        }
    }
}
