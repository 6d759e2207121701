/*
 * Starfield
 *
 * Flies through a field of stars. Each star moves towards the viewer and is
 * recycled to the far plane once it passes the near plane, so the field never
 * runs out.
 *
 * Hold Space to pause, press D for the debug overlay.
 * Set RUST_LOG (e.g. RUST_LOG=debug) to adjust logging.
 */

use starfield::app;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    log::info!("Starting starfield");

    nannou::app(app::model).update(app::update).run();
}
