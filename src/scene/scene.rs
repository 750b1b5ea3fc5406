use glam::Vec3;

use crate::engine::Engine;
use crate::error::SceneError;
use crate::scene::factory::create_cube;
use crate::scene::hud::Hud;
use crate::scene::systems;
use crate::settings::SceneSettings;
use crate::teleport::{create_teleporter, ripple, TeleportManager, TeleporterSpec};

/// The whole plaza: the engine adapter, the teleportation manager, the HUD
/// model, and accumulated scene time.
pub struct Scene {
    pub engine: Engine,
    pub teleport: TeleportManager,
    pub hud: Hud,
    time: f64,
}

impl Scene {
    pub fn new(settings: &SceneSettings) -> Result<Self, SceneError> {
        let mut engine = Engine::new();

        create_teleporter(
            &mut engine.world,
            &TeleporterSpec::new(Vec3::new(4.0, 0.5, 4.0), Vec3::new(4.0, 0.1, 24.0))
                .with_label("Games!"),
        )?;

        create_cube(&mut engine.world, Vec3::new(8.0, 1.0, 8.0), true);
        create_cube(&mut engine.world, Vec3::new(6.0, 1.0, 10.0), true);

        Ok(Self {
            engine,
            teleport: TeleportManager::new(settings),
            hud: Hud::new(),
            time: 0.0,
        })
    }

    /// Seconds of scene time accumulated so far.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// One frame. Systems run in their registration order, with transform
    /// propagation last so ripple layers follow their pads within the frame.
    pub fn update(&mut self, dt: f32) -> Result<(), SceneError> {
        self.time += dt as f64;

        systems::spin_cubes(&mut self.engine.world, dt);
        systems::cycle_colors(&mut self.engine.world, self.time as f32);
        self.teleport.update(&mut self.engine, dt)?;
        ripple::animate_ripples(&mut self.engine.world, self.time);
        self.engine.propagate_transforms();

        Ok(())
    }
}
