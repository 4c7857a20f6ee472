//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `shape_swarm::game::configure_headless` to install gameplay plugins.
//! - virtual time advances by a fixed amount per `app.update()`, so fixed-step
//!   systems run a predictable number of times.

use std::time::Duration;

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

/// Virtual time added by every `app.update()`.
pub const FRAME: Duration = Duration::from_millis(100);

pub fn app_headless() -> App {
    app_headless_with(|_| {})
}

/// Like [`app_headless`], but lets the caller insert resources (tuning, seeds)
/// before the gameplay plugins read them.
pub fn app_headless_with(setup: impl FnOnce(&mut App)) -> App {
    let mut app = App::new();

    // Add AssetPlugin + ScenePlugin so SceneSpawner exists.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));

    setup(&mut app);
    shape_swarm::game::configure_headless(&mut app);
    // `App::run` would do this; plugins such as avian init resources in `finish`.
    app.finish();
    app.cleanup();
    app
}

/// Run `n` frames.
pub fn tick(app: &mut App, n: usize) {
    for _ in 0..n {
        app.update();
    }
}
