//! Draws the screen tone as a full-screen overlay and rain as falling streaks.

use bevy::prelude::*;
use rand::Rng;

use crate::resources::ScreenEffects;

/// Streaks on screen at full rain intensity.
const MAX_RAIN_STREAKS: usize = 400;
/// New streaks spawned per frame while below the target count.
const STREAKS_PER_FRAME: usize = 20;
/// Fallback view size when no window is available.
const DEFAULT_VIEW_SIZE: Vec2 = Vec2::new(1280.0, 720.0);

const OVERLAY_Z: f32 = 50.0;
const RAIN_Z: f32 = 40.0;

pub struct GraphicsPlugin;

impl Plugin for GraphicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_camera, spawn_tone_overlay))
            .add_systems(
                Update,
                (apply_tone_overlay, spawn_rain_streaks, fall_rain_streaks),
            );
    }
}

/// Marker for the sprite that carries the screen tone.
#[derive(Component)]
pub struct ToneOverlay;

/// A single falling rain streak.
#[derive(Component, Debug, Clone, Copy)]
pub struct RainStreak {
    /// World units per second.
    pub velocity: Vec2,
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, Transform::from_xyz(0.0, 0.0, 100.0)));
}

fn spawn_tone_overlay(mut commands: Commands) {
    commands.spawn((
        ToneOverlay,
        Sprite {
            color: Color::NONE,
            custom_size: Some(DEFAULT_VIEW_SIZE * 4.0),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, OVERLAY_Z),
    ));
}

fn apply_tone_overlay(
    screen: Res<ScreenEffects>,
    mut overlays: Query<&mut Sprite, With<ToneOverlay>>,
) {
    if !screen.is_changed() {
        return;
    }
    let color = screen.tone.overlay_color();
    for mut sprite in &mut overlays {
        sprite.color = color;
    }
}

fn view_size(windows: &Query<&Window>) -> Vec2 {
    windows
        .get_single()
        .map(|w| Vec2::new(w.width(), w.height()))
        .unwrap_or(DEFAULT_VIEW_SIZE)
}

fn spawn_rain_streaks(
    mut commands: Commands,
    screen: Res<ScreenEffects>,
    streaks: Query<(), With<RainStreak>>,
    windows: Query<&Window>,
) {
    let target = (screen.rain_intensity.clamp(0.0, 1.0) * MAX_RAIN_STREAKS as f32) as usize;
    let current = streaks.iter().count();
    if current >= target {
        return;
    }

    let size = view_size(&windows);
    let mut rng = rand::thread_rng();
    for _ in 0..(target - current).min(STREAKS_PER_FRAME) {
        let x = rng.gen_range(-size.x * 0.6..size.x * 0.6);
        let y = rng.gen_range(size.y * 0.5..size.y * 0.9);
        commands.spawn((
            RainStreak {
                velocity: Vec2::new(-120.0, -rng.gen_range(700.0..1000.0)),
            },
            Sprite {
                color: Color::srgba(0.75, 0.8, 0.95, 0.5),
                custom_size: Some(Vec2::new(1.5, 18.0)),
                ..default()
            },
            Transform::from_xyz(x, y, RAIN_Z).with_rotation(Quat::from_rotation_z(-0.12)),
        ));
    }
}

/// Moves streaks and recycles them once off screen.
/// Streaks above the target count are removed as they leave the view.
fn fall_rain_streaks(
    mut commands: Commands,
    time: Res<Time>,
    screen: Res<ScreenEffects>,
    windows: Query<&Window>,
    mut streaks: Query<(Entity, &RainStreak, &mut Transform)>,
) {
    let size = view_size(&windows);
    let target = (screen.rain_intensity.clamp(0.0, 1.0) * MAX_RAIN_STREAKS as f32) as usize;
    let mut alive = streaks.iter().count();
    let dt = time.delta_secs();

    for (entity, streak, mut transform) in &mut streaks {
        transform.translation += (streak.velocity * dt).extend(0.0);
        if transform.translation.y >= -size.y * 0.5 {
            continue;
        }
        if alive > target {
            commands.entity(entity).despawn();
            alive -= 1;
        } else {
            transform.translation.y += size.y * 1.2;
        }
    }
}
