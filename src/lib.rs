pub mod engine;
pub mod error;
pub mod scene;
pub mod settings;
pub mod teleport;
pub mod time;

pub use error::SceneError;
pub use scene::Scene;
pub use settings::SceneSettings;

use glam::Vec3;
use std::time::Duration;

use crate::scene::Hud;
use crate::time::FrameClock;

fn init_logging() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .try_init();
}

/// Headless demo session: builds the plaza, walks the player onto the
/// teleporter pad, and lets the full teleport sequence play out.
pub fn run() -> Result<(), SceneError> {
    init_logging();
    log::info!("Starting warp plaza scene");

    let settings = SceneSettings::load();
    let mut scene = Scene::new(&settings)?;
    scene.engine.spawn_player(Vec3::new(8.0, 0.5, 8.0));
    scene.hud.spawn_random_cube(&mut scene.engine.world);

    let pad = Vec3::new(4.0, 0.5, 4.0);
    let mut clock = FrameClock::new();

    while scene.time() < 12.0 {
        std::thread::sleep(Duration::from_millis(16));
        let dt = clock.tick();

        // Scripted walk toward the pad; once the sequence takes over (or the
        // player has been dropped at the far destination) the walk stops.
        if !scene.teleport.in_flight() {
            if let Some(position) = scene.engine.player_position() {
                let to_pad = pad - position;
                if to_pad.length() > 0.1 && position.z < 20.0 {
                    let step = to_pad.clamp_length_max(2.0 * dt);
                    scene.engine.move_player_to(position + step)?;
                }
            }
        }

        scene.update(dt)?;
    }

    log::info!("{}", Hud::player_label(&scene.engine));
    log::info!("{}", Hud::cube_label(&scene.engine.world));
    log::info!("Demo session finished after {:.1}s", scene.time());

    Ok(())
}
