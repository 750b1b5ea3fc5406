use glam::Vec3;
use hecs::World;

use crate::engine::TransformComponent;
use crate::teleport::registry::Teleporter;

pub(crate) struct TriggerHit {
    pub pad_position: Vec3,
    pub destination: Vec3,
}

/// Scans every teleporter for the player standing inside its trigger box.
///
/// The box test is strict per-axis: |dx| < range_xz, |dz| < range_xz,
/// |dy| < range_y. When several pads qualify on the same tick the nearest
/// one wins, so the outcome never depends on entity iteration order.
pub(crate) fn scan(
    world: &World,
    player: Vec3,
    range_xz: f32,
    range_y: f32,
) -> Option<TriggerHit> {
    let mut best: Option<(f32, TriggerHit)> = None;

    for (_, (teleporter, transform)) in world.query::<(&Teleporter, &TransformComponent)>().iter()
    {
        let pad_position = transform.0.translation;
        let delta = player - pad_position;

        if delta.x.abs() >= range_xz || delta.z.abs() >= range_xz || delta.y.abs() >= range_y {
            continue;
        }

        let distance_sq = delta.length_squared();
        if best
            .as_ref()
            .map_or(true, |(closest, _)| distance_sq < *closest)
        {
            best = Some((
                distance_sq,
                TriggerHit {
                    pad_position,
                    destination: teleporter.destination,
                },
            ));
        }
    }

    best.map(|(_, hit)| hit)
}
