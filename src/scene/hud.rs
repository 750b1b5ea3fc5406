use glam::{Quat, Vec3};
use hecs::World;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::engine::{Engine, Name, Transform, TransformComponent, VirtualCamera};
use crate::error::SceneError;
use crate::scene::components::Cube;
use crate::scene::factory::create_cube;

/// Scene-side model of the HUD. The host engine renders the actual panel;
/// this only produces label text and executes the button actions.
pub struct Hud {
    test_camera: Option<hecs::Entity>,
    rng: SmallRng,
}

impl Hud {
    pub fn new() -> Self {
        Self {
            test_camera: None,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Deterministic variant used by tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            test_camera: None,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn player_label(engine: &Engine) -> String {
        match engine.player_position() {
            Some(p) => format!("Player: {{X: {:.2}, Y: {:.2}, Z: {:.2}}}", p.x, p.y, p.z),
            None => "Player: no data yet".to_string(),
        }
    }

    pub fn cube_label(world: &World) -> String {
        let count = world.query::<&Cube>().iter().count();
        format!("# Cubes: {}", count)
    }

    /// "Spawn cube" button: a spinning cube somewhere inside the plaza.
    pub fn spawn_random_cube(&mut self, world: &mut World) -> hecs::Entity {
        let position = Vec3::new(
            self.rng.gen_range(1.0..9.0),
            self.rng.gen_range(0.0..8.0),
            self.rng.gen_range(1.0..9.0),
        );
        log::info!("Spawning cube at {:?}", position);
        create_cube(world, position, true)
    }

    /// "Test camera" button: first press switches to an elevated virtual
    /// camera, second press resets to the player camera and removes it.
    pub fn toggle_test_camera(&mut self, engine: &mut Engine) -> Result<(), SceneError> {
        match self.test_camera.take() {
            Some(camera) => {
                log::info!("Resetting to default camera");
                engine.set_active_camera(None)?;
                engine.despawn(camera)?;
            }
            None => {
                let camera = engine.world.spawn((
                    Name::new("test camera"),
                    TransformComponent(Transform::from_trs(
                        Vec3::new(8.0, 10.0, 8.0),
                        Quat::from_rotation_x(-45f32.to_radians()),
                        Vec3::ONE,
                    )),
                    VirtualCamera::with_transition(2.0),
                ));
                log::info!("Switching to test camera {:?}", camera);
                engine.set_active_camera(Some(camera))?;
                self.test_camera = Some(camera);
            }
        }
        Ok(())
    }
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ActiveCamera;

    #[test]
    fn labels_report_missing_player_and_cube_count() {
        let mut engine = Engine::new();
        assert_eq!(Hud::player_label(&engine), "Player: no data yet");

        let mut hud = Hud::with_seed(7);
        hud.spawn_random_cube(&mut engine.world);
        hud.spawn_random_cube(&mut engine.world);
        assert_eq!(Hud::cube_label(&engine.world), "# Cubes: 2");

        engine.spawn_player(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(
            Hud::player_label(&engine),
            "Player: {X: 1.00, Y: 2.00, Z: 3.00}"
        );
    }

    #[test]
    fn spawned_cubes_land_inside_the_plaza() {
        let mut engine = Engine::new();
        let mut hud = Hud::with_seed(42);

        for _ in 0..16 {
            let cube = hud.spawn_random_cube(&mut engine.world);
            let position = engine
                .world
                .get::<&TransformComponent>(cube)
                .unwrap()
                .0
                .translation;
            assert!((1.0..9.0).contains(&position.x));
            assert!((0.0..8.0).contains(&position.y));
            assert!((1.0..9.0).contains(&position.z));
        }
    }

    #[test]
    fn test_camera_toggles_on_and_off() {
        let mut engine = Engine::new();
        let mut hud = Hud::with_seed(1);

        hud.toggle_test_camera(&mut engine).unwrap();
        let active = engine.main_camera().active();
        let camera = match active {
            ActiveCamera::Virtual(camera) => camera,
            ActiveCamera::Default => panic!("expected a virtual camera"),
        };
        assert_eq!(engine.main_camera().transition_seconds(), 2.0);

        hud.toggle_test_camera(&mut engine).unwrap();
        assert_eq!(engine.main_camera().active(), ActiveCamera::Default);
        assert!(!engine.world.contains(camera));
    }
}
