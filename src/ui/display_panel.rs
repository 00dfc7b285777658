//! Display panel — the selected layout's blueprint image (center).

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::resources::*;

pub fn display_panel_system(
    mut contexts: EguiContexts,
    display: Res<LayoutDisplay>,
    images: Res<LayoutImages>,
) -> Result {
    // Resolve the current image ref to an egui texture before the ctx
    // borrow. Registration is idempotent, so doing it per frame is a
    // map hit after the first time.
    let texture = display.image_ref.as_deref().and_then(|image_ref| {
        let handle = images.0.get(image_ref)?;
        Some(contexts.add_image(bevy_egui::EguiTextureHandle::Weak(handle.id())))
    });

    let ctx = contexts.ctx_mut()?;
    egui::CentralPanel::default().show(ctx, |ui| {
        match texture {
            Some(id) => {
                let texture = egui::load::SizedTexture::new(id, egui::vec2(720.0, 720.0));
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.add(
                        egui::Image::new(texture)
                            .maintain_aspect_ratio(true)
                            .shrink_to_fit(),
                    );
                });
            }
            None => {
                ui.vertical_centered(|ui| {
                    ui.add_space(120.0);
                    ui.weak("Select a layout to see its blueprint");
                });
            }
        }
    });

    Ok(())
}
