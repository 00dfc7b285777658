//! Entries panel — the selectable layout list (left side).

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::catalog::CatalogEntry;
use crate::messages::SelectLayoutMsg;
use crate::resources::*;
use crate::settings::UserSettings;
use crate::ui::draw_cells;

pub fn entries_panel_system(
    mut contexts: EguiContexts,
    catalog: Res<Catalog>,
    selected: Res<SelectedLayout>,
    icons: Res<IconTextures>,
    user_settings: Res<UserSettings>,
    mut writer: MessageWriter<SelectLayoutMsg>,
) -> Result {
    let ctx = contexts.ctx_mut()?;

    egui::SidePanel::left("entries").default_width(360.0).show(ctx, |ui| {
        ui.heading("Layouts");
        ui.horizontal(|ui| {
            ui.label(format!("{} entries", catalog.entries.len()));
            ui.small(
                egui::RichText::new(format!("build {}", env!("BUILD_COMMIT"))).weak(),
            )
            .on_hover_text(env!("BUILD_TIMESTAMP"));
        });
        ui.separator();

        let mut clicked: Option<usize> = None;

        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            for (index, entry) in catalog.entries.iter().enumerate() {
                let is_selected = selected.0 == Some(index);

                // One click region per row — labels and icons inside
                // are plain render output with no bindings of their
                // own, so a click lands anywhere in the row.
                let background = ui.painter().add(egui::Shape::Noop);
                let response = ui
                    .scope_builder(
                        egui::UiBuilder::new().sense(egui::Sense::click()),
                        |ui| draw_entry_row(ui, entry, &icons, user_settings.icon_size),
                    )
                    .response;

                if is_selected {
                    ui.painter().set(background, egui::Shape::rect_filled(
                        response.rect, 0.0,
                        egui::Color32::from_rgba_premultiplied(60, 60, 100, 80)));
                } else if response.hovered() {
                    ui.painter().set(background, egui::Shape::rect_filled(
                        response.rect, 0.0,
                        egui::Color32::from_rgba_premultiplied(60, 60, 100, 40)));
                }

                if response.clicked() {
                    clicked = Some(index);
                }

                // Divider rule between entries
                ui.separator();
            }
        });

        if let Some(index) = clicked {
            writer.write(SelectLayoutMsg { index });
        }
    });

    Ok(())
}

/// Bold title line, then the production run and space efficiency.
fn draw_entry_row(
    ui: &mut egui::Ui,
    entry: &CatalogEntry,
    icons: &IconTextures,
    icon_size: f32,
) {
    ui.label(egui::RichText::new(&entry.record.title).strong().size(16.0));

    ui.horizontal(|ui| {
        ui.label("Produces:");

        // Reserve the hinted slot count so single- and multi-good rows
        // keep their columns aligned.
        let slot_w = icon_size + 10.0;
        let region = egui::vec2(
            entry.arity.display_slots() as f32 * slot_w,
            icon_size + 4.0,
        );
        ui.allocate_ui_with_layout(
            region,
            egui::Layout::left_to_right(egui::Align::Center),
            |ui| draw_cells(ui, &entry.production_cells, icons, icon_size),
        );

        ui.label("Space Eff:");
        ui.label(entry.record.space_efficiency.to_string());
    });
}
