use glam::Vec3;
use hecs::World;

use crate::engine::camera::{MainCamera, VirtualCamera};
use crate::engine::components::{Children, Parent, PlayerTag, TransformComponent, WorldTransform};
use crate::engine::transform::Transform;
use crate::error::SceneError;

/// Scene-side facade over the host engine: the entity/component store plus
/// the handful of host capabilities the scene consumes (player transform,
/// player relocation, main-camera assignment).
pub struct Engine {
    pub world: World,
    player: Option<hecs::Entity>,
    main_camera: MainCamera,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            player: None,
            main_camera: MainCamera::new(),
        }
    }

    // ------------------------------------------------------------------
    // Player
    // ------------------------------------------------------------------

    /// Registers the player avatar. In the host this happens when the avatar
    /// finishes loading; until then `player_position` reports nothing.
    pub fn spawn_player(&mut self, position: Vec3) -> hecs::Entity {
        let entity = self.world.spawn((
            PlayerTag,
            TransformComponent(Transform::from_translation(position)),
        ));
        self.player = Some(entity);
        entity
    }

    /// Current player position, or `None` while the avatar is still loading.
    pub fn player_position(&self) -> Option<Vec3> {
        let player = self.player?;
        self.world
            .get::<&TransformComponent>(player)
            .ok()
            .map(|transform| transform.0.translation)
    }

    /// Relocates the player to an absolute world position.
    pub fn move_player_to(&mut self, position: Vec3) -> Result<(), SceneError> {
        let player = self.player.ok_or(SceneError::PlayerNotLoaded)?;
        let mut transform = self.world.get::<&mut TransformComponent>(player)?;
        transform.0.translation = position;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Camera
    // ------------------------------------------------------------------

    /// Assigns the main camera. `Some(entity)` switches to that virtual
    /// camera using its own transition duration; `None` resets to the
    /// default player camera.
    pub fn set_active_camera(&mut self, camera: Option<hecs::Entity>) -> Result<(), SceneError> {
        match camera {
            Some(entity) => {
                let transition = self.world.get::<&VirtualCamera>(entity)?.transition_seconds;
                self.main_camera.activate(entity, transition);
            }
            None => self.main_camera.reset(),
        }
        Ok(())
    }

    pub fn main_camera(&self) -> &MainCamera {
        &self.main_camera
    }

    // ------------------------------------------------------------------
    // Entities
    // ------------------------------------------------------------------

    pub fn despawn(&mut self, entity: hecs::Entity) -> Result<(), SceneError> {
        self.world.despawn(entity)?;
        Ok(())
    }

    /// Recomputes `WorldTransform` for every entity, walking parent-child
    /// chains from the roots down.
    pub fn propagate_transforms(&mut self) {
        propagate_transforms(&mut self.world);
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn propagate_transforms(world: &mut World) {
    let roots: Vec<hecs::Entity> = world
        .query::<&TransformComponent>()
        .without::<&Parent>()
        .iter()
        .map(|(entity, _)| entity)
        .collect();

    let mut stack: Vec<(hecs::Entity, Transform)> = Vec::new();

    for root in roots {
        stack.push((root, Transform::IDENTITY));

        while let Some((entity, parent_world)) = stack.pop() {
            let local = match world.get::<&TransformComponent>(entity) {
                Ok(t) => t.0,
                Err(_) => continue,
            };

            let world_transform = parent_world.mul_transform(&local);

            let mut updated = false;
            if let Ok(mut wt) = world.get::<&mut WorldTransform>(entity) {
                wt.0 = world_transform;
                updated = true;
            }

            if !updated {
                if let Err(err) = world.insert_one(entity, WorldTransform(world_transform)) {
                    log::error!(
                        "Failed to insert WorldTransform for entity {:?}: {:?}",
                        entity,
                        err
                    );
                    continue;
                }
            }

            if let Ok(children) = world.get::<&Children>(entity) {
                for &child in children.0.iter().rev() {
                    stack.push((child, world_transform));
                }
            }
        }
    }
}
