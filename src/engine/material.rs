use glam::{Vec3, Vec4};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransparencyMode {
    Opaque,
    AlphaTest,
    AlphaBlend,
}

/// PBR material record mirrored from the host engine's material component.
///
/// Only the fields the scene actually drives are modeled; the renderer side
/// of this record lives in the host.
#[derive(Debug, Clone, PartialEq)]
pub struct PbrMaterial {
    pub texture: Option<String>,
    pub transparency: TransparencyMode,
    pub alpha_test: f32,
    pub emissive: Vec3,
    pub emissive_intensity: f32,
    pub metallic: f32,
    pub roughness: f32,
    /// RGBA; the w channel is the opacity the ripple animator rewrites.
    pub albedo: Vec4,
    pub cast_shadows: bool,
}

impl Default for PbrMaterial {
    fn default() -> Self {
        Self {
            texture: None,
            transparency: TransparencyMode::Opaque,
            alpha_test: 0.0,
            emissive: Vec3::ZERO,
            emissive_intensity: 0.0,
            metallic: 0.5,
            roughness: 0.5,
            albedo: Vec4::ONE,
            cast_shadows: true,
        }
    }
}

impl PbrMaterial {
    /// Textured alpha-blended plane material used by the teleporter pad and
    /// its ripple layers.
    pub fn pad(texture: impl Into<String>, alpha: f32) -> Self {
        Self {
            texture: Some(texture.into()),
            transparency: TransparencyMode::AlphaBlend,
            alpha_test: 0.1,
            emissive: Vec3::ONE,
            emissive_intensity: 0.0,
            cast_shadows: false,
            albedo: Vec4::new(1.0, 1.0, 1.0, alpha),
            ..Self::default()
        }
    }

    pub fn with_albedo(mut self, albedo: Vec4) -> Self {
        self.albedo = albedo;
        self
    }
}
