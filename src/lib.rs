/*
 * Starfield - Module Definitions
 *
 * This file defines the module structure for the starfield application.
 * The simulation core lives in `star` and `starfield`; the remaining modules
 * connect it to nannou.
 */

// Re-export key components for easier access
pub use app::Model;
pub use debug::DebugInfo;
pub use error::AppError;
pub use params::{RendererKind, StarfieldParams};
pub use renderer::{CircleRenderer, QuadRenderer, Renderer};
pub use star::{DrawCommand, Star};
pub use starfield::StarField;

// Define modules
pub mod app;
pub mod debug;
pub mod error;
pub mod input;
pub mod params;
pub mod renderer;
pub mod star;
pub mod starfield;
pub mod ui;
