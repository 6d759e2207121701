/*
 * Input Module
 *
 * This module handles keyboard events for the starfield.
 *
 * Features:
 * - Holding Space pauses the flight, releasing it resumes
 * - D toggles the debug overlay
 *
 * Changes take effect on the next simulation step.
 */

use nannou::prelude::*;

use crate::app::Model;

pub const PAUSE_KEY: Key = Key::Space;
pub const DEBUG_KEY: Key = Key::D;

// Key pressed event handler
pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        PAUSE_KEY => set_paused(model, true),
        DEBUG_KEY => {
            model.show_debug = !model.show_debug;
            log::debug!("Debug overlay {}", if model.show_debug { "shown" } else { "hidden" });
        }
        _ => {}
    }
}

// Key released event handler
pub fn key_released(_app: &App, model: &mut Model, key: Key) {
    if key == PAUSE_KEY {
        set_paused(model, false);
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}

fn set_paused(model: &mut Model, paused: bool) {
    if apply_pause(&mut model.paused, paused) {
        log::info!("{}", if paused { "Paused" } else { "Resumed" });
    }
}

// Store the requested pause state, returning whether it changed.
// Key repeat sends repeated presses while Space is held.
pub fn apply_pause(paused: &mut bool, requested: bool) -> bool {
    if *paused == requested {
        return false;
    }
    *paused = requested;
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_pauses_and_release_resumes() {
        let mut paused = false;
        assert!(apply_pause(&mut paused, true));
        assert!(paused);
        assert!(apply_pause(&mut paused, false));
        assert!(!paused);
    }

    #[test]
    fn repeated_presses_change_nothing() {
        let mut paused = false;
        assert!(apply_pause(&mut paused, true));
        assert!(!apply_pause(&mut paused, true));
        assert!(!apply_pause(&mut paused, true));
        assert!(paused);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut paused = false;
        assert!(!apply_pause(&mut paused, false));
        assert!(!paused);
    }

    #[test]
    fn keys_are_space_and_d() {
        assert_eq!(PAUSE_KEY, Key::Space);
        assert_eq!(DEBUG_KEY, Key::D);
    }
}
