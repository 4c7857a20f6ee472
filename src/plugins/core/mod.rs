//! Core plugin: shared resources and global settings.
//!
//! The fixed step runs at `Tunables::ticks_per_second`, so one fixed tick is one
//! game time-unit and enemy constants read the same at any frame rate.

use crate::common::schedule::FixedSet;
use crate::common::tunables::Tunables;
use bevy::prelude::*;

pub fn plugin(app: &mut App) {
    app.init_resource::<Tunables>();
    app.insert_resource(ClearColor(Color::srgb(0.06, 0.09, 0.06)));

    let hz = app.world().resource::<Tunables>().ticks_per_second;
    app.insert_resource(Time::<Fixed>::from_hz(f64::from(hz)));

    app.configure_sets(
        FixedUpdate,
        (FixedSet::Spawn, FixedSet::Combat, FixedSet::Retire).chain(),
    );
}
