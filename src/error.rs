use glam::Vec3;
use thiserror::Error;

/// Errors surfaced by scene and teleport operations.
///
/// Missing-data conditions (player not loaded yet) are handled by the systems
/// themselves with an early return; everything here is a real failure that
/// propagates to the frame driver.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("entity no longer exists")]
    NoSuchEntity(#[from] hecs::NoSuchEntity),

    #[error("component access failed: {0}")]
    Component(#[from] hecs::ComponentError),

    #[error("teleporter at {position:?} has a destination equal to its own position")]
    DegenerateTeleporter { position: Vec3 },

    #[error("player entity has not been loaded yet")]
    PlayerNotLoaded,
}
