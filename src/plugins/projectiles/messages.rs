//! Buffered spawn requests.
//!
//! We use Bevy **Messages** here instead of direct pool access.
//! Producers create *intent*; the allocator applies it (pool pop + component writes).

use bevy::prelude::*;

#[derive(Message, Clone, Copy, Debug)]
pub struct SpawnBulletRequest {
    pub pos: Vec2,
    pub vel: Vec2,
    pub owner: Option<Entity>,
}
