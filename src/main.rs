/*
 * Ball Tosser
 *
 * Click and drag anywhere in the window to pull back a sling, then release
 * to launch a ball. The further you pull, the faster it flies. Balls fall
 * under gravity, bounce off the edges and disappear once they settle.
 *
 * Set RUST_LOG=debug to follow launches, evictions and retirements.
 */

use ball_tosser::app;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Ball Tosser");

    nannou::app(app::model).update(app::update).run();
}
