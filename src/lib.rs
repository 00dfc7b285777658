//! Layfinder - a catalog viewer for Anno-style building layouts.
//! Bevy app shell + egui panels over a normalized, precomputed catalog.

// ============================================================================
// MODULES
// ============================================================================

pub mod catalog;
pub mod cells;
pub mod goods;
pub mod messages;
pub mod production;
pub mod resources;
pub mod settings;
pub mod tests;
pub mod ui;

// ============================================================================
// APP
// ============================================================================

use bevy::prelude::*;

use messages::SelectLayoutMsg;
use resources::*;

/// Top-level app states.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    /// Reading + normalizing the catalog table.
    #[default]
    Loading,
    /// Normal browsing: entry list, image display, info panel.
    Browsing,
    /// The catalog could not be loaded; show the reason.
    LoadFailed,
    /// In-app test menu (started with `--tests`).
    TestMenu,
    /// An in-app test is running.
    Running,
}

/// Marker for the camera the egui pass renders to.
#[derive(Component)]
pub struct UiCamera;

/// Build the Bevy application. Called once at startup by main, after
/// `DefaultPlugins`.
pub fn build_app(app: &mut App) {
    app.add_plugins(bevy_egui::EguiPlugin::default());

    app.add_message::<SelectLayoutMsg>()
        .init_resource::<Catalog>()
        .init_resource::<SelectedLayout>()
        .init_resource::<LayoutImages>()
        .init_resource::<IconTextures>()
        .init_resource::<LayoutDisplay>()
        .init_resource::<InfoPanel>()
        .init_resource::<LoadError>()
        .init_state::<AppState>();

    // Settings drive the initial panel state.
    let user_settings = settings::load_settings();
    app.insert_resource(UiState { info_open: user_settings.info_open });
    app.insert_resource(user_settings);

    app.add_systems(Startup, setup_camera);

    ui::register_ui(app);
    tests::register_tests(app);
}

/// 2D camera for the egui render target.
fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, UiCamera));
}
