//! Info panel — cost, size, tiles, space efficiency, and production of
//! the current selection (bottom).

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::resources::*;
use crate::settings::UserSettings;
use crate::ui::draw_cells;

pub fn info_panel_system(
    mut contexts: EguiContexts,
    ui_state: Res<UiState>,
    info: Res<InfoPanel>,
    icons: Res<IconTextures>,
    user_settings: Res<UserSettings>,
) -> Result {
    if !ui_state.info_open {
        return Ok(());
    }

    let ctx = contexts.ctx_mut()?;

    egui::TopBottomPanel::bottom("info").default_height(96.0).show(ctx, |ui| {
        let Some(contents) = &info.current else {
            ui.add_space(8.0);
            ui.weak("No layout selected");
            ui.add_space(8.0);
            return;
        };

        let icon_size = user_settings.icon_size;

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Cost:").strong());
            draw_cells(ui, &contents.cost_cells, &icons, icon_size);
            ui.separator();

            ui.label(egui::RichText::new("Size:").strong());
            ui.label(contents.size.to_string());
            ui.separator();

            ui.label(egui::RichText::new("Tiles:").strong());
            ui.label(contents.tiles.to_string());
            ui.separator();

            ui.label(egui::RichText::new("Space Eff:").strong());
            ui.label(contents.space_efficiency.to_string());
        });

        ui.add_space(2.0);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Produces:").strong());
            let slot_w = icon_size + 10.0;
            let region = egui::vec2(
                contents.arity.display_slots() as f32 * slot_w,
                icon_size + 4.0,
            );
            ui.allocate_ui_with_layout(
                region,
                egui::Layout::left_to_right(egui::Align::Center),
                |ui| draw_cells(ui, &contents.production_cells, &icons, icon_size),
            );
        });

        ui.add_space(4.0);
        ui.small("I toggles this panel \u{00B7} Up/Down navigate");
    });

    Ok(())
}
