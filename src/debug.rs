/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * and simulation state to be displayed in the debug overlay.
 *
 * Includes metrics for:
 * - FPS (frames per second)
 * - Frame time
 * - Star count and the current draw offset
 * - Recycling activity and fixed steps run per frame
 */

use std::time::Duration;

pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub star_count: usize,
    pub first: usize,
    pub last_recycled: Option<usize>,
    pub recycled_this_frame: usize,
    pub steps_this_frame: u32,
    pub frames_simulated: u64,
    pub paused: bool,
    pub renderer_name: &'static str,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            star_count: 0,
            first: 0,
            last_recycled: None,
            recycled_this_frame: 0,
            steps_this_frame: 0,
            frames_simulated: 0,
            paused: false,
            renderer_name: "",
        }
    }
}

impl DebugInfo {
    pub fn frame_time_ms(&self) -> f64 {
        self.frame_time.as_secs_f64() * 1000.0
    }

    // Reset the per-frame counters before the frame's fixed steps run
    pub fn begin_frame(&mut self, paused: bool) {
        self.paused = paused;
        self.recycled_this_frame = 0;
        self.steps_this_frame = 0;
    }

    // Record the outcome of one fixed simulation step
    pub fn record_step(
        &mut self,
        first_recycled: Option<usize>,
        recycled_count: usize,
        first: usize,
    ) {
        self.first = first;
        self.steps_this_frame += 1;
        self.recycled_this_frame += recycled_count;
        if !self.paused {
            self.frames_simulated += 1;
        }
        if first_recycled.is_some() {
            self.last_recycled = first_recycled;
        }
    }
}
