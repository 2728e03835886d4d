use bevy::prelude::*;

use crate::plugins::core::CycleSet;
use crate::resources::{ScreenEffects, WeatherKind};
use crate::systems::screen_effects_system;

/// Installs `ScreenEffects` as the screen service and animates it each frame.
pub struct ScreenPlugin;

impl Plugin for ScreenPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScreenEffects>()
            .register_type::<ScreenEffects>()
            .register_type::<WeatherKind>()
            .add_systems(FixedUpdate, screen_effects_system.in_set(CycleSet::Screen));
    }
}
