use bevy::prelude::*;

use crate::resources::ScreenEffects;

/// Advances tone fades and rain ramps by one frame.
pub fn screen_effects_system(mut screen: ResMut<ScreenEffects>) {
    screen.advance();
}
