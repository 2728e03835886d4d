use std::marker::PhantomData;

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::events::WeatherChanged;
use crate::resources::{GameClock, ScreenEffects, ScreenService, TimeOfDay};
use crate::systems::{toggle_weather, WeatherToggle};

/// Egui window for the cycle. Generic over the screen service it reads and toggles.
pub struct DebugUiPlugin<S = ScreenEffects> {
    _screen: PhantomData<fn() -> S>,
}

impl<S> Default for DebugUiPlugin<S> {
    fn default() -> Self {
        Self {
            _screen: PhantomData,
        }
    }
}

impl<S: ScreenService> Plugin for DebugUiPlugin<S> {
    fn build(&self, app: &mut App) {
        app.add_event::<WeatherChanged>()
            .add_systems(Update, debug_panel::<S>);
    }
}

fn debug_panel<S: ScreenService>(
    mut contexts: EguiContexts,
    mut clock: Option<ResMut<GameClock>>,
    mut weather: Option<ResMut<WeatherToggle>>,
    mut screen: Option<ResMut<S>>,
    mut weather_events: EventWriter<WeatherChanged>,
) {
    egui::Window::new("Day / Night").show(contexts.ctx_mut(), |ui| {
        match clock.as_deref() {
            Some(clock) => {
                ui.label(format!("Time: {}", clock.formatted_time()));
                ui.label(format!("Frame: {}", clock.frame_count));
                ui.label(format!("Period: {}", TimeOfDay::current(clock.hours).label()));
            }
            None => {
                ui.label("No clock");
            }
        }

        let rain = screen.as_deref().and_then(|s| s.rain_intensity());
        match (weather.as_deref(), rain) {
            (Some(weather), Some(rain)) => {
                ui.label(format!("Weather: {:?} ({:.0}%)", weather.state, rain * 100.0));
            }
            (Some(weather), None) => {
                ui.label(format!("Weather: {:?}", weather.state));
            }
            (None, _) => {}
        }

        match screen.as_deref().and_then(|s| s.current_tone()) {
            Some(tone) => {
                ui.label(format!(
                    "Tone: r {} g {} b {} gray {}",
                    tone.red, tone.green, tone.blue, tone.gray
                ));
            }
            None if screen.is_none() => {
                ui.label("No screen service");
            }
            None => {}
        }

        ui.separator();
        ui.heading("Jump To");

        if let Some(clock) = clock.as_deref_mut() {
            ui.horizontal(|ui| {
                for time_of_day in TimeOfDay::ALL {
                    if ui.button(time_of_day.label()).clicked() {
                        clock.set_time(time_of_day.trigger_hour(), 0);
                    }
                }
            });
        }

        if let Some(weather) = weather.as_deref_mut() {
            if ui.button("Toggle Rain").clicked() {
                if let Some(change) = toggle_weather(weather, screen.as_deref_mut()) {
                    weather_events.send(change);
                }
            }
        }
    });
}
