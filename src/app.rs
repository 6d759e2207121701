/*
 * Application Module
 *
 * This module defines the main application model and wires the starfield
 * simulation to nannou. It handles initialization, the fixed-step update
 * and rendering.
 *
 * nannou updates once per display refresh, so real frame time is collected
 * in an accumulator and drained in fixed steps of `1 / max_frame_rate`.
 * The flight speed is then independent of the monitor's refresh rate.
 *
 * Each frame:
 * - advances the field by every fixed step that is due (unless paused)
 * - projects every star into a reusable draw command buffer
 * - hands the buffer to the selected renderer
 */

use nannou::prelude::*;
use nannou_egui::Egui;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use crate::debug::DebugInfo;
use crate::error::AppError;
use crate::input::{key_pressed, key_released, raw_window_event};
use crate::params::StarfieldParams;
use crate::renderer::{make_renderer, Renderer};
use crate::star::DrawCommand;
use crate::starfield::StarField;
use crate::ui;

// Upper bound on catch-up steps after a stall (window drag, breakpoint)
pub const MAX_STEPS_PER_FRAME: u32 = 16;

// Main model for the application
pub struct Model {
    pub field: StarField,
    pub params: StarfieldParams,
    pub renderer: Box<dyn Renderer>,
    pub commands: Vec<DrawCommand>,
    pub paused: bool,
    pub show_debug: bool,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    // Fixed timestep variables
    pub physics_accumulator: Duration,
    pub physics_step_size: Duration,
}

// Initialize the model, exiting if the window cannot be created
pub fn model(app: &App) -> Model {
    match try_model(app, StarfieldParams::default()) {
        Ok(model) => model,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    }
}

fn try_model(app: &App, params: StarfieldParams) -> Result<Model, AppError> {
    params.validate()?;

    let window_id = app
        .new_window()
        .title("Starfield")
        .size(params.window_width, params.window_height)
        .resizable(false)
        .view(view)
        .key_pressed(key_pressed)
        .key_released(key_released)
        .raw_event(raw_window_event)
        .build()
        .map_err(|err| AppError::WindowBuild(format!("{:?}", err)))?;

    let window = app.window(window_id).ok_or(AppError::WindowMissing(window_id))?;
    let egui = Egui::from_window(&window);

    let mut rng = match params.seed {
        Some(seed) => {
            log::info!("Seeding star field with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let field = StarField::create(params.star_count, params.star_scale, &params, &mut rng);

    let renderer = make_renderer(params.renderer);
    log::info!(
        "Window {}x{} at {} fps, {} stars, {} renderer",
        params.window_width,
        params.window_height,
        params.max_frame_rate,
        field.len(),
        renderer.name()
    );

    let debug_info = DebugInfo {
        star_count: field.len(),
        renderer_name: renderer.name(),
        ..DebugInfo::default()
    };

    let mut commands = Vec::with_capacity(field.len());
    field.project_into(&params, &mut commands);

    let physics_step_size = Duration::from_secs_f32(params.delta_time());

    Ok(Model {
        field,
        params,
        renderer,
        commands,
        paused: false,
        show_debug: false,
        egui,
        debug_info,
        physics_accumulator: Duration::ZERO,
        physics_step_size,
    })
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    model.physics_accumulator += update.since_last;
    let steps = steps_due(&mut model.physics_accumulator, model.physics_step_size);

    model.debug_info.begin_frame(model.paused);
    for _ in 0..steps {
        step(model);
    }
    if steps > 0 {
        model.field.project_into(&model.params, &mut model.commands);
    }

    if model.show_debug {
        ui::update_ui(&mut model.egui, &model.params, &model.debug_info);
    }
}

// Take as many whole steps out of the accumulator as are due, at most
// MAX_STEPS_PER_FRAME. Time beyond the cap is dropped.
pub fn steps_due(accumulator: &mut Duration, step_size: Duration) -> u32 {
    if step_size.is_zero() {
        return 0;
    }

    let mut steps = 0;
    while *accumulator >= step_size && steps < MAX_STEPS_PER_FRAME {
        *accumulator -= step_size;
        steps += 1;
    }

    if steps == MAX_STEPS_PER_FRAME && *accumulator >= step_size {
        log::debug!("Simulation fell behind, dropping {:?}", *accumulator);
        *accumulator = Duration::ZERO;
    }

    steps
}

// One fixed simulation step; the offset stays at the last step that recycled
fn step(model: &mut Model) {
    let dt = model.params.delta_time();
    let first_recycled = model.field.advance(&model.params, dt, model.paused);

    model.debug_info.record_step(
        first_recycled,
        model.field.recycled_count(),
        model.field.first(),
    );
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let origin = app.window_rect().xy();
    model.renderer.render(&draw, origin, &model.commands);

    if let Err(err) = draw.to_frame(app, &frame) {
        log::warn!("Failed to draw frame: {:?}", err);
        return;
    }

    if model.show_debug {
        if let Err(err) = model.egui.draw_to_frame(&frame) {
            log::warn!("Failed to draw debug overlay: {:?}", err);
        }
    }
}
