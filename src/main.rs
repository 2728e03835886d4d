use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use daycycle::plugins::core::CorePlugin;
use daycycle::plugins::day_night::DayNightPlugin;
use daycycle::plugins::debug_ui::DebugUiPlugin;
use daycycle::plugins::graphics::GraphicsPlugin;
use daycycle::plugins::input::InputPlugin;
use daycycle::plugins::screen::ScreenPlugin;
use daycycle::plugins::weather::WeatherPlugin;
use daycycle::resources::{CliArgs, GameClock, ScreenEffects};
use daycycle::systems::WeatherToggle;

fn main() {
    let cli = CliArgs::parse();

    if let Some(frames) = cli.headless_frames {
        run_headless(cli, frames);
        return;
    }

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "daycycle".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        .add_plugins(CorePlugin::from_cli(cli))
        .add_plugins(DayNightPlugin::<ScreenEffects>::default())
        .add_plugins(WeatherPlugin::<ScreenEffects>::default())
        .add_plugins(ScreenPlugin)
        .add_plugins(InputPlugin::<ScreenEffects>::default())
        .add_plugins(GraphicsPlugin)
        .add_plugins(DebugUiPlugin::<ScreenEffects>::default())
        .run();
}

/// Steps the cycle `frames` times without a window and logs where it ended up.
fn run_headless(cli: CliArgs, frames: u64) {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        .add_plugins(CorePlugin::from_cli(cli))
        .add_plugins(DayNightPlugin::<ScreenEffects>::default())
        .add_plugins(WeatherPlugin::<ScreenEffects>::default())
        .add_plugins(ScreenPlugin);

    // Startup
    app.update();

    for _ in 0..frames {
        app.world_mut().run_schedule(FixedUpdate);
    }

    let world = app.world();
    world.resource::<GameClock>().print_time();
    info!(
        "Weather: {:?}, tone: {:?}",
        world.resource::<WeatherToggle>().state,
        world.resource::<ScreenEffects>().tone
    );
}
