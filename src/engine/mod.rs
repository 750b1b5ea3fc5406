// engine/mod.rs
// Adapter over the host engine's entity-component store and the few host
// actions the scene is allowed to call.

pub mod camera;
pub mod components;
pub mod engine;
pub mod material;
pub mod transform;

pub use camera::{ActiveCamera, MainCamera, VirtualCamera};
pub use engine::Engine;
pub use material::{PbrMaterial, TransparencyMode};
pub use transform::{look_rotation, Transform};

pub use components::{
    Billboard, BillboardMode, Children, ColliderComponent, MaterialComponent, MeshComponent,
    MeshShape, Name, Parent, PlayerTag, TextLabel, TransformComponent, WorldTransform,
};
