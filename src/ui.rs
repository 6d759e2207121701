/*
 * UI Module
 *
 * This module draws the read-only debug overlay using nannou_egui.
 * It shows performance metrics and simulation state; nothing in it changes
 * the simulation.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::StarfieldParams;

// Build this frame's overlay window
pub fn update_ui(egui: &mut Egui, params: &StarfieldParams, debug_info: &DebugInfo) {
    let ctx = egui.begin_frame();

    egui::Window::new("Starfield")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Performance", |ui| {
                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time_ms()));
                ui.label(format!("Renderer: {}", debug_info.renderer_name));
            });

            ui.collapsing("Simulation", |ui| {
                ui.label(format!("Stars: {}", debug_info.star_count));
                ui.label(format!("Draw offset: {}", debug_info.first));
                match debug_info.last_recycled {
                    Some(index) => ui.label(format!("Last recycled: {}", index)),
                    None => ui.label("Last recycled: none"),
                };
                ui.label(format!("Recycled this frame: {}", debug_info.recycled_this_frame));
                ui.label(format!("Steps this frame: {}", debug_info.steps_this_frame));
                ui.label(format!("Frames simulated: {}", debug_info.frames_simulated));
                ui.label(format!(
                    "Depth: {:.2} .. {:.2} at {:.1}/s",
                    params.near_distance, params.far_distance, params.star_speed
                ));
            });

            ui.separator();
            ui.label(if debug_info.paused { "Paused" } else { "Running" });
            ui.label("Hold Space to pause, D toggles this window");
        });
}
