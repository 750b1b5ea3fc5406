use glam::{Quat, Vec3, Vec4};
use hecs::World;

use crate::engine::{
    Billboard, BillboardMode, Children, ColliderComponent, MaterialComponent, MeshComponent,
    MeshShape, Name, Parent, PbrMaterial, TextLabel, Transform, TransformComponent,
    TransparencyMode,
};
use crate::error::SceneError;

/// Number of decorative ripple planes stacked over each pad.
pub const RIPPLE_LAYERS: u32 = 4;

/// A teleporter pad. The destination is fixed at creation and never changes;
/// pads are never destroyed during a session.
#[derive(Debug, Clone, Copy)]
pub struct Teleporter {
    pub destination: Vec3,
}

/// One of the translucent planes layered over a pad. The layer index fixes
/// both the animation phase offset and the initial transparency.
#[derive(Debug, Clone, Copy)]
pub struct RippleLayer {
    pub index: u32,
}

#[derive(Debug, Clone)]
pub struct TeleporterSpec {
    pub position: Vec3,
    pub destination: Vec3,
    pub texture: String,
    pub logo_texture: String,
    pub label: String,
}

impl TeleporterSpec {
    pub fn new(position: Vec3, destination: Vec3) -> Self {
        Self {
            position,
            destination,
            texture: "images/teleporter-pad.png".to_string(),
            logo_texture: "images/logo.png".to_string(),
            label: "Teleporter".to_string(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// Initial albedo alpha for a ripple layer: 0.9 at the bottom, stepping down
/// 0.2 per layer.
pub fn base_alpha(layer: u32) -> f32 {
    0.9 - 0.2 * layer as f32
}

/// Builds a teleporter pad with its ripple layers, logo plane, and floating
/// label, returning the pad entity.
///
/// A destination coinciding with the pad would make the camera look-at
/// direction degenerate later, so it is rejected here.
pub fn create_teleporter(
    world: &mut World,
    spec: &TeleporterSpec,
) -> Result<hecs::Entity, SceneError> {
    if (spec.destination - spec.position).length_squared() < f32::EPSILON {
        return Err(SceneError::DegenerateTeleporter {
            position: spec.position,
        });
    }

    // Pad: a flat 2x2 plane lying on the ground.
    let pad = world.spawn((
        Name::new(format!("teleporter '{}'", spec.label)),
        Teleporter {
            destination: spec.destination,
        },
        TransformComponent(Transform::from_trs(
            spec.position,
            Quat::from_rotation_x(90f32.to_radians()),
            Vec3::splat(2.0),
        )),
        MeshComponent(MeshShape::Plane),
        ColliderComponent(MeshShape::Plane),
        MaterialComponent(PbrMaterial::pad(spec.texture.as_str(), 1.0)),
    ));

    // Ripple layers: collider-free child planes, each slightly offset and
    // progressively more transparent.
    let mut layers = Vec::with_capacity(RIPPLE_LAYERS as usize);
    for index in 0..RIPPLE_LAYERS {
        let layer = world.spawn((
            Name::new(format!("ripple layer {}", index)),
            RippleLayer { index },
            TransformComponent(Transform::from_translation(Vec3::new(
                0.0,
                0.0,
                0.05 * (index + 1) as f32,
            ))),
            Parent(pad),
            MeshComponent(MeshShape::Plane),
            MaterialComponent(PbrMaterial::pad(spec.texture.as_str(), base_alpha(index))),
        ));
        layers.push(layer);
    }
    world.insert_one(pad, Children(layers))?;

    // Logo plane: deliberately not parented so it does not inherit the pad's
    // animated transparency.
    world.spawn((
        Name::new("teleporter logo"),
        TransformComponent(Transform::from_trs(
            spec.position,
            Quat::from_rotation_x(90f32.to_radians()),
            Vec3::splat(0.9),
        )),
        MeshComponent(MeshShape::Plane),
        MaterialComponent(PbrMaterial {
            texture: Some(spec.logo_texture.clone()),
            transparency: TransparencyMode::AlphaBlend,
            emissive_intensity: 0.2,
            cast_shadows: false,
            albedo: Vec4::ONE,
            ..PbrMaterial::default()
        }),
    ));

    // Floating label 2 units above the pad, swiveling about X only.
    world.spawn((
        Name::new("teleporter label"),
        TransformComponent(Transform::from_translation(
            spec.position + Vec3::new(0.0, 2.0, 0.0),
        )),
        Billboard(BillboardMode::AxisX),
        TextLabel::new(spec.label.as_str(), 3.0),
    ));

    Ok(pad)
}
