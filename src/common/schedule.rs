//! Fixed-step ordering shared by plugins that touch the same components.
//!
//! ```text
//! FixedUpdate: Spawn -> Combat -> Retire
//! ```
//!
//! Bullets are resolved against enemies in `Combat` before lifetime expiry in
//! `Retire`, so a bullet is live for the whole tick it was live at the start of.

use bevy::prelude::*;

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixedSet {
    /// Population control.
    Spawn,
    /// Enemy movement, bullet hits and contact damage.
    Combat,
    /// Bullet lifetime expiry.
    Retire,
}
