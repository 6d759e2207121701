/*
 * Error Module
 *
 * Start-up failures of the application shell. The simulation core itself is
 * infallible.
 */

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid starfield parameters: {0}")]
    InvalidParams(String),

    // nannou's BuildError only implements Debug, so it is captured as text
    #[error("failed to create window: {0}")]
    WindowBuild(String),

    #[error("window {0:?} disappeared before the model was built")]
    WindowMissing(nannou::window::Id),
}
