use glam::{Quat, Vec3};
use hecs::World;
use rayon::prelude::*;

use crate::engine::{MaterialComponent, TransformComponent};
use crate::scene::components::{ColorCycle, Spinner};

/// Rotates every `Spinner` entity about +Y by its speed.
pub fn spin_cubes(world: &mut World, dt: f32) {
    let entities: Vec<_> = world
        .query::<(&TransformComponent, &Spinner)>()
        .iter()
        .map(|(entity, (transform, spinner))| (entity, transform.0.rotation, spinner.speed))
        .collect();

    let updates: Vec<_> = entities
        .par_iter()
        .map(|(entity, rotation, speed)| {
            let step = Quat::from_rotation_y(speed * dt);
            (*entity, step * *rotation)
        })
        .collect();

    for (entity, rotation) in updates {
        if let Ok(mut transform) = world.get::<&mut TransformComponent>(entity) {
            transform.0.rotation = rotation;
        }
    }
}

/// Cycles every `ColorCycle` entity's albedo hue over scene time.
pub fn cycle_colors(world: &mut World, time: f32) {
    let entities: Vec<_> = world
        .query::<(&MaterialComponent, &ColorCycle)>()
        .iter()
        .map(|(entity, (material, cycle))| (entity, material.0.albedo.w, cycle.speed))
        .collect();

    let updates: Vec<_> = entities
        .par_iter()
        .map(|(entity, alpha, speed)| {
            let hue = (time * speed).rem_euclid(1.0);
            let rgb = hsv_to_rgb(hue, 0.7, 1.0);
            (*entity, rgb.extend(*alpha))
        })
        .collect();

    for (entity, albedo) in updates {
        if let Ok(mut material) = world.get::<&mut MaterialComponent>(entity) {
            material.0.albedo = albedo;
        }
    }
}

/// Hue/saturation/value to RGB, all channels in [0, 1].
fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Vec3 {
    let h = h.rem_euclid(1.0) * 6.0;
    let i = h.floor();
    let f = h - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match i as u32 % 6 {
        0 => Vec3::new(v, t, p),
        1 => Vec3::new(q, v, p),
        2 => Vec3::new(p, v, t),
        3 => Vec3::new(p, q, v),
        4 => Vec3::new(t, p, v),
        _ => Vec3::new(v, p, q),
    }
}
