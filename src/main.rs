//! Layfinder - building-layout catalog viewer.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Layfinder".into(),
            resolution: (1280, 720).into(),
            ..default()
        }),
        ..default()
    }));

    // Wire up resources, states, and panels
    layfinder::build_app(&mut app);

    // `--tests` drops straight into the in-app test menu.
    if std::env::args().any(|arg| arg == "--tests") {
        app.insert_state(layfinder::AppState::TestMenu);
    }

    // Maximize window + apply saved display settings on startup
    app.add_systems(Startup, |
        mut windows: Query<&mut Window>,
        settings: Res<layfinder::settings::UserSettings>,
        mut winit_settings: ResMut<bevy::winit::WinitSettings>,
    | {
        if let Ok(mut window) = windows.single_mut() {
            window.set_maximized(true);
        }
        if settings.background_fps {
            winit_settings.unfocused_mode = bevy::winit::UpdateMode::Continuous;
        }
    });

    app.run();
}
