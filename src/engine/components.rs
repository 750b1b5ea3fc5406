// engine/components.rs
// Pure hecs components mirroring the host engine's component set

use crate::engine::material::PbrMaterial;
use crate::engine::transform::Transform;
use glam::Vec4;

// ============================================================================
// Spatial Components
// ============================================================================

/// Transform component (position, rotation, scale)
#[derive(Debug, Clone, Copy)]
pub struct TransformComponent(pub Transform);

/// World-space transform (computed from hierarchy)
#[derive(Debug, Clone, Copy)]
pub struct WorldTransform(pub Transform);

/// Parent entity reference
#[derive(Debug, Clone, Copy)]
pub struct Parent(pub hecs::Entity);

/// List of children entities
#[derive(Debug, Clone)]
pub struct Children(pub Vec<hecs::Entity>);

// ============================================================================
// Visual Components
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshShape {
    Plane,
    Box,
}

/// Mesh assignment; the host engine owns the actual geometry
#[derive(Debug, Clone, Copy)]
pub struct MeshComponent(pub MeshShape);

/// Collision shape; entities without it are walk-through
#[derive(Debug, Clone, Copy)]
pub struct ColliderComponent(pub MeshShape);

/// Material component
#[derive(Debug, Clone)]
pub struct MaterialComponent(pub PbrMaterial);

/// Floating text label
#[derive(Debug, Clone)]
pub struct TextLabel {
    pub text: String,
    pub font_size: f32,
    pub color: Vec4,
    pub outline_color: Vec4,
    pub outline_width: f32,
}

impl TextLabel {
    /// White text with a black outline, the scene's house style.
    pub fn new(text: impl Into<String>, font_size: f32) -> Self {
        Self {
            text: text.into(),
            font_size,
            color: Vec4::ONE,
            outline_color: Vec4::new(0.0, 0.0, 0.0, 1.0),
            outline_width: 0.1,
        }
    }
}

/// Orientation constraint keeping an entity facing the camera
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillboardMode {
    AxisX,
    AxisY,
    Full,
}

#[derive(Debug, Clone, Copy)]
pub struct Billboard(pub BillboardMode);

// ============================================================================
// Utility Components
// ============================================================================

/// Name component for debugging
#[derive(Debug, Clone)]
pub struct Name(pub String);

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

/// Marks the single player avatar entity
#[derive(Debug, Clone, Copy)]
pub struct PlayerTag;
