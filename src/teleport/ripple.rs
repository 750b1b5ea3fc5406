use glam::Vec3;
use hecs::World;
use rayon::prelude::*;
use std::f64::consts::{FRAC_PI_2, TAU};

use crate::engine::MaterialComponent;
use crate::teleport::registry::RippleLayer;

const CYCLE_SECONDS: f64 = 1.0;
const LAYER_PHASE_OFFSET: f64 = 0.25;
const PEAK_OPACITY: f64 = 0.5;

/// Opacity of one ripple layer at a given wall-clock time. A sine wave maps
/// the layer's phase into [0, 0.5], with each layer a quarter cycle behind
/// the previous one.
pub fn ripple_opacity(wall_seconds: f64, layer: u32) -> f32 {
    let phase = (wall_seconds / CYCLE_SECONDS + layer as f64 * LAYER_PHASE_OFFSET).fract();
    (((phase * TAU - FRAC_PI_2).sin() + 1.0) / 2.0 * PEAK_OPACITY) as f32
}

/// Rewrites every ripple layer's material with its current opacity. Purely
/// per-entity; no ordering constraints against the other systems.
pub fn animate_ripples(world: &mut World, wall_seconds: f64) {
    let layers: Vec<_> = world
        .query::<&RippleLayer>()
        .iter()
        .map(|(entity, layer)| (entity, layer.index))
        .collect();

    let updates: Vec<_> = layers
        .par_iter()
        .map(|(entity, index)| (*entity, ripple_opacity(wall_seconds, *index)))
        .collect();

    for (entity, opacity) in updates {
        if let Ok(mut material) = world.get::<&mut MaterialComponent>(entity) {
            let material = &mut material.0;
            material.albedo.w = opacity;
            material.emissive = Vec3::new(1.0, 2.0, 1.0);
            material.emissive_intensity = 1.0;
            material.metallic = 0.0;
            material.roughness = 1.0;
        }
    }
}
