/*
 * Starfield Parameters Module
 *
 * This module defines the StarfieldParams struct holding every tunable of the
 * starfield: window size, star count, depth bounds, speed and radius, frame
 * rate cap, renderer selection and the optional random seed. The params are
 * built once at start-up and passed by reference to everything that needs them.
 */

use nannou::prelude::*;

use crate::error::AppError;

// Which rendering strategy draws the projected stars
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RendererKind {
    // One batched mesh of coloured quads
    VertexArray,
    // One filled ellipse per star
    Circles,
}

// Fixed parameters of the starfield
#[derive(Clone, Debug)]
pub struct StarfieldParams {
    pub window_width: u32,
    pub window_height: u32,
    pub max_frame_rate: u32,
    pub star_count: usize,
    pub star_radius: f32,
    pub near_distance: f32,
    pub far_distance: f32,
    pub star_speed: f32,
    // Multiplier applied to the window size when scattering stars laterally
    pub star_scale: f32,
    pub renderer: RendererKind,
    // Fixed seed for reproducible fields, entropy when None
    pub seed: Option<u64>,
}

impl Default for StarfieldParams {
    fn default() -> Self {
        let far_distance = 10.0;
        Self {
            window_width: 1920,
            window_height: 1080,
            max_frame_rate: 144,
            star_count: 10_000,
            star_radius: 20.0,
            near_distance: 0.1,
            far_distance,
            star_speed: 5.0,
            // Stars are spread over the window as seen at the far plane
            star_scale: far_distance,
            renderer: RendererKind::VertexArray,
            seed: None,
        }
    }
}

impl StarfieldParams {
    // Fixed simulation step derived from the frame rate cap
    pub fn delta_time(&self) -> f32 {
        1.0 / self.max_frame_rate as f32
    }

    pub fn window_size_f(&self) -> Vec2 {
        vec2(self.window_width as f32, self.window_height as f32)
    }

    pub fn depth_range(&self) -> f32 {
        self.far_distance - self.near_distance
    }

    // Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), AppError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(AppError::InvalidParams(format!(
                "window size must be non-zero, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        if self.max_frame_rate == 0 {
            return Err(AppError::InvalidParams("max frame rate must be non-zero".into()));
        }
        if self.star_count == 0 {
            return Err(AppError::InvalidParams("star count must be non-zero".into()));
        }
        if !(self.near_distance > 0.0 && self.near_distance < self.far_distance) {
            return Err(AppError::InvalidParams(format!(
                "depth bounds must satisfy 0 < near < far, got near={} far={}",
                self.near_distance, self.far_distance
            )));
        }
        if self.star_speed < 0.0 || self.star_radius <= 0.0 {
            return Err(AppError::InvalidParams(format!(
                "speed must be non-negative and radius positive, got speed={} radius={}",
                self.star_speed, self.star_radius
            )));
        }
        Ok(())
    }
}
