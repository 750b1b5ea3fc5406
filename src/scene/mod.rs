// scene/mod.rs

pub mod components;
pub mod factory;
pub mod hud;
pub mod scene;
pub mod systems;

pub use components::{ColorCycle, Cube, Spinner};
pub use factory::create_cube;
pub use hud::Hud;
pub use scene::Scene;
