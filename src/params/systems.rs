use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::{ParamChange, ResetCamera, TileParams};
use crate::math;

/// Draws the parameter window and routes each edit through [`TileParams`].
pub fn draw_parameter_panel(
    mut contexts: EguiContexts,
    mut params: ResMut<TileParams>,
    mut changes: MessageWriter<ParamChange>,
    mut resets: MessageWriter<ResetCamera>,
) -> Result {
    let ctx = contexts.ctx_mut()?;

    let max_speed = params.max_rotation_speed();
    let old_speed = params.rotation_speed();
    let old_base = math::to_srgb_u8(params.base_color());
    let old_emissive = math::to_srgb_u8(params.emissive_color());

    let mut speed = old_speed;
    let mut base = old_base;
    let mut emissive = old_emissive;
    let mut reset = false;

    egui::Window::new("Parameters")
        .resizable(false)
        .show(ctx, |ui| {
            ui.add(egui::Slider::new(&mut speed, 0.0..=max_speed).text("Rotation Speed"));
            ui.horizontal(|ui| {
                ui.color_edit_button_srgb(&mut base);
                ui.label("Square Color");
            });
            ui.horizontal(|ui| {
                ui.color_edit_button_srgb(&mut emissive);
                ui.label("Emissive Color");
            });
            reset = ui.button("Reset Camera").clicked();
        });

    if speed != old_speed {
        changes.write(params.set_rotation_speed(speed));
    }
    if base != old_base {
        changes.write(params.set_base_color(Color::srgb_u8(base[0], base[1], base[2])));
    }
    if emissive != old_emissive {
        changes.write(params.set_emissive_color(Color::srgb_u8(
            emissive[0],
            emissive[1],
            emissive[2],
        )));
    }
    if reset {
        resets.write(ResetCamera);
    }

    Ok(())
}
