use glam::Vec3;
use hecs::World;

use crate::engine::{
    ColliderComponent, MaterialComponent, MeshComponent, MeshShape, Name, PbrMaterial, Transform,
    TransformComponent,
};
use crate::scene::components::{ColorCycle, Cube, Spinner};

/// Spawns one of the plaza's decorative cubes. `spinning` cubes also carry
/// the animation tags the per-frame systems pick up.
pub fn create_cube(world: &mut World, position: Vec3, spinning: bool) -> hecs::Entity {
    let cube = world.spawn((
        Name::new("cube"),
        Cube,
        TransformComponent(Transform::from_translation(position)),
        MeshComponent(MeshShape::Box),
        ColliderComponent(MeshShape::Box),
        MaterialComponent(PbrMaterial::default()),
    ));

    if spinning {
        world
            .insert(cube, (Spinner { speed: 1.0 }, ColorCycle { speed: 0.1 }))
            .ok();
    }

    cube
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinning_cube_carries_animation_tags() {
        let mut world = World::new();
        let cube = create_cube(&mut world, Vec3::new(2.0, 1.0, 2.0), true);

        assert!(world.get::<&Cube>(cube).is_ok());
        assert!(world.get::<&Spinner>(cube).is_ok());
        assert!(world.get::<&ColorCycle>(cube).is_ok());
    }

    #[test]
    fn static_cube_does_not_spin() {
        let mut world = World::new();
        let cube = create_cube(&mut world, Vec3::ZERO, false);

        assert!(world.get::<&Spinner>(cube).is_err());
    }
}
