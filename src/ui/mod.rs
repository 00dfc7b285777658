//! UI module — catalog loading, panel systems, and selection dispatch.

pub mod display_panel;
pub mod entries_panel;
pub mod info_panel;

use std::collections::HashMap;

use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPrimaryContextPass, egui};

use crate::AppState;
use crate::catalog;
use crate::cells::RenderCell;
use crate::goods::{self, GoodId};
use crate::messages::SelectLayoutMsg;
use crate::resources::*;
use crate::settings::{self, UserSettings};

/// Register all UI systems.
pub fn register_ui(app: &mut App) {
    // Catalog load on startup; icons once browsing begins.
    app.add_systems(OnEnter(AppState::Loading), catalog_load_system);
    app.add_systems(OnEnter(AppState::Browsing), register_icon_textures);

    // Panels — chained so the entry list's selection messages are
    // dispatched to both sibling views before either view draws.
    app.add_systems(EguiPrimaryContextPass, (
        entries_panel::entries_panel_system,
        selection_dispatch_system,
        display_panel::display_panel_system,
        info_panel::info_panel_system,
    ).chain().run_if(in_state(AppState::Browsing)));

    // Failure screen
    app.add_systems(EguiPrimaryContextPass,
        load_failed_system.run_if(in_state(AppState::LoadFailed)));

    // Keyboard: panel toggle + entry navigation
    app.add_systems(Update, (
        ui_toggle_system,
        entry_nav_system,
    ).run_if(in_state(AppState::Browsing)));

    // In-app tests drive selections without the panels.
    app.add_systems(Update,
        selection_dispatch_system.run_if(in_state(AppState::Running)));
}

// ============================================================================
// CATALOG LOADING
// ============================================================================

/// Read the layout table, normalize it, and request every image asset.
/// A bad table aborts to the failure screen — drift should be loud.
fn catalog_load_system(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    user_settings: Res<UserSettings>,
    mut load_error: ResMut<LoadError>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let path = user_settings.catalog_path();
    info!("Loading catalog from {}", path.display());

    match catalog::load_rows(&path).and_then(|rows| catalog::build_entries(&rows)) {
        Ok(entries) => {
            let mut images: HashMap<String, Handle<Image>> = HashMap::new();
            for entry in &entries {
                let image_ref = &entry.record.image_ref;
                images
                    .entry(image_ref.clone())
                    .or_insert_with(|| asset_server.load(image_ref.clone()));
            }
            info!("Catalog loaded: {} layouts, {} images", entries.len(), images.len());
            commands.insert_resource(Catalog { entries });
            commands.insert_resource(LayoutImages(images));
            next_state.set(AppState::Browsing);
        }
        Err(e) => {
            error!("Failed to load catalog: {}", e);
            load_error.0 = Some(e.to_string());
            next_state.set(AppState::LoadFailed);
        }
    }
}

/// Register one egui texture per registry good. Runs once; entry rows
/// and the info panel only look ids up.
fn register_icon_textures(
    mut contexts: EguiContexts,
    asset_server: Res<AssetServer>,
    mut icons: ResMut<IconTextures>,
) {
    if !icons.is_empty() {
        return;
    }
    for def in goods::GOOD_REGISTRY {
        let handle: Handle<Image> = asset_server.load(def.icon);
        let id = contexts.add_image(bevy_egui::EguiTextureHandle::Strong(handle));
        icons.insert(GoodId::new(def.name), id);
    }
    info!("Registered {} good icons", goods::GOOD_REGISTRY.len());
}

// ============================================================================
// SELECTION DISPATCH
// ============================================================================

/// Apply selection events to both sibling views: image first, then
/// info, synchronously, from the same record. One dispatch per event —
/// reselecting the same row goes through again.
pub fn selection_dispatch_system(
    mut reader: MessageReader<SelectLayoutMsg>,
    catalog: Res<Catalog>,
    mut selected: ResMut<SelectedLayout>,
    mut display: ResMut<LayoutDisplay>,
    mut info: ResMut<InfoPanel>,
) {
    for msg in reader.read() {
        let Some(entry) = catalog.entries.get(msg.index) else {
            warn!("Selection index {} out of range ({} entries)",
                msg.index, catalog.entries.len());
            continue;
        };
        selected.0 = Some(msg.index);
        display.update_image(&entry.record.image_ref);
        info.update_info(entry);
    }
}

// ============================================================================
// KEYBOARD
// ============================================================================

/// `I` toggles the info panel; the choice is persisted.
fn ui_toggle_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut ui_state: ResMut<UiState>,
    mut user_settings: ResMut<UserSettings>,
) {
    if keys.just_pressed(KeyCode::KeyI) {
        ui_state.info_open = !ui_state.info_open;
        user_settings.info_open = ui_state.info_open;
        settings::save_settings(&user_settings);
    }
}

/// Up/Down move the selection through the list. Each keypress is one
/// ordinary selection event, same as a row click.
fn entry_nav_system(
    keys: Res<ButtonInput<KeyCode>>,
    catalog: Res<Catalog>,
    selected: Res<SelectedLayout>,
    mut writer: MessageWriter<SelectLayoutMsg>,
) {
    if catalog.entries.is_empty() {
        return;
    }
    let last = catalog.entries.len() - 1;

    let next = if keys.just_pressed(KeyCode::ArrowDown) {
        Some(selected.0.map_or(0, |i| (i + 1).min(last)))
    } else if keys.just_pressed(KeyCode::ArrowUp) {
        Some(selected.0.map_or(0, |i| i.saturating_sub(1)))
    } else {
        None
    };

    if let Some(index) = next {
        writer.write(SelectLayoutMsg { index });
    }
}

// ============================================================================
// SHARED CELL RENDERING
// ============================================================================

/// Draw one cell run: good icons, quantities, middle-dot separators,
/// or the lone placeholder.
pub fn draw_cells(
    ui: &mut egui::Ui,
    run: &[RenderCell],
    icons: &IconTextures,
    icon_size: f32,
) {
    for cell in run {
        match cell {
            RenderCell::Icon(good) => match icons.id(good) {
                Some(id) => {
                    let texture =
                        egui::load::SizedTexture::new(id, egui::vec2(icon_size, icon_size));
                    ui.add(egui::Image::new(texture)).on_hover_text(good.as_str());
                }
                // Icons cover the whole registry; a miss only means the
                // textures haven't been registered yet this session.
                None => {
                    ui.label(good.as_str());
                }
            },
            RenderCell::Quantity(amount) => {
                ui.label(amount.as_str());
            }
            RenderCell::Separator => {
                ui.label("\u{00B7}");
            }
            RenderCell::NotApplicable => {
                ui.weak(catalog::UNAVAILABLE_LABEL);
            }
        }
    }
}

// ============================================================================
// FAILURE SCREEN
// ============================================================================

/// Full-window explanation when the catalog cannot be loaded.
fn load_failed_system(
    mut contexts: EguiContexts,
    load_error: Res<LoadError>,
) -> Result {
    let ctx = contexts.ctx_mut()?;
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.heading("Catalog failed to load");
            ui.add_space(8.0);
            if let Some(reason) = &load_error.0 {
                ui.colored_label(egui::Color32::from_rgb(220, 80, 80), reason);
            }
            ui.add_space(8.0);
            ui.label("Fix the catalog file (or the configured override) and restart.");
        });
    });
    Ok(())
}
