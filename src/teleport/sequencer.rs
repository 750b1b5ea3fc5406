use glam::{Quat, Vec3};

use crate::engine::{look_rotation, Engine, Name, Transform, TransformComponent, VirtualCamera};
use crate::error::SceneError;

pub(crate) const AT_START_SECONDS: f32 = 1.0;
pub(crate) const TRAVEL_SECONDS: f32 = 3.0;
pub(crate) const ARRIVAL_SECONDS: f32 = 1.0;

const START_TRANSITION_SECONDS: f32 = 0.5;
const TRAVEL_TRANSITION_SECONDS: f32 = 3.0;
const START_CAMERA_HEIGHT: f32 = 3.0;
const END_CAMERA_OFFSET: Vec3 = Vec3::new(0.0, 5.0, -5.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    AtStart,
    Transitioning,
    Arrived,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SequenceStatus {
    Running,
    Finished,
}

/// One teleport activation: a camera cut above the pad, a slow blend to the
/// destination overview, the player relocation, and a short dwell before the
/// view returns to the player camera.
///
/// The sequence exclusively owns the two camera entities it spawns and
/// removes them when it finishes. It advances once per tick; a phase boundary
/// resets the phase clock rather than carrying the overshoot, and at most one
/// boundary is crossed per tick.
pub(crate) struct TeleportSequence {
    destination: Vec3,
    start_camera: hecs::Entity,
    end_camera: hecs::Entity,
    phase: Phase,
    phase_time: f32,
    lifetime: f32,
}

impl TeleportSequence {
    /// Spawns both cameras and cuts the view to the start camera.
    pub(crate) fn begin(
        engine: &mut Engine,
        pad_position: Vec3,
        destination: Vec3,
    ) -> Result<Self, SceneError> {
        let direction = destination - pad_position;
        if direction.length_squared() < f32::EPSILON {
            // The registry validates this at creation; a degenerate pair here
            // means the world was mutated behind our back.
            return Err(SceneError::DegenerateTeleporter {
                position: pad_position,
            });
        }

        let start_camera = engine.world.spawn((
            Name::new("teleport start camera"),
            TransformComponent(Transform::from_trs(
                pad_position + Vec3::Y * START_CAMERA_HEIGHT,
                look_rotation(direction),
                Vec3::ONE,
            )),
            VirtualCamera::with_transition(START_TRANSITION_SECONDS),
        ));

        // Destination overview: above and behind, pitched 45 degrees down.
        let end_camera = engine.world.spawn((
            Name::new("teleport end camera"),
            TransformComponent(Transform::from_trs(
                destination + END_CAMERA_OFFSET,
                Quat::from_rotation_x(-45f32.to_radians()),
                Vec3::ONE,
            )),
            VirtualCamera::with_transition(TRAVEL_TRANSITION_SECONDS),
        ));

        engine.set_active_camera(Some(start_camera))?;
        log::info!(
            "Teleport sequence started: pad {:?}, destination {:?}",
            pad_position,
            destination
        );

        Ok(Self {
            destination,
            start_camera,
            end_camera,
            phase: Phase::AtStart,
            phase_time: 0.0,
            lifetime: 0.0,
        })
    }

    /// Total seconds this sequence has been alive, across all phases.
    pub(crate) fn lifetime(&self) -> f32 {
        self.lifetime
    }

    pub(crate) fn advance(
        &mut self,
        engine: &mut Engine,
        dt: f32,
    ) -> Result<SequenceStatus, SceneError> {
        self.phase_time += dt;
        self.lifetime += dt;

        match self.phase {
            Phase::AtStart if self.phase_time >= AT_START_SECONDS => {
                engine.set_active_camera(Some(self.end_camera))?;
                log::info!("Camera travelling to destination");
                self.enter(Phase::Transitioning);
            }
            Phase::Transitioning if self.phase_time >= TRAVEL_SECONDS => {
                engine.move_player_to(self.destination)?;
                log::info!("Player relocated to {:?}", self.destination);
                self.enter(Phase::Arrived);
            }
            Phase::Arrived if self.phase_time >= ARRIVAL_SECONDS => {
                self.cleanup(engine)?;
                log::info!("Teleport sequence complete");
                return Ok(SequenceStatus::Finished);
            }
            _ => {}
        }

        Ok(SequenceStatus::Running)
    }

    /// Watchdog path: force the scene back into a sane state. Failures here
    /// are logged rather than propagated so cleanup always runs to the end.
    pub(crate) fn abort(&mut self, engine: &mut Engine) {
        log::error!(
            "Teleport sequence aborted after {:.1}s in phase {:?}",
            self.lifetime,
            self.phase
        );
        if let Err(err) = engine.set_active_camera(None) {
            log::warn!("Failed to reset the main camera: {}", err);
        }
        for camera in [self.start_camera, self.end_camera] {
            if let Err(err) = engine.despawn(camera) {
                log::warn!("Failed to remove camera {:?}: {}", camera, err);
            }
        }
    }

    fn enter(&mut self, phase: Phase) {
        self.phase = phase;
        self.phase_time = 0.0;
    }

    fn cleanup(&mut self, engine: &mut Engine) -> Result<(), SceneError> {
        engine.set_active_camera(None)?;
        engine.despawn(self.start_camera)?;
        engine.despawn(self.end_camera)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ActiveCamera;

    fn engine_with_player() -> Engine {
        let mut engine = Engine::new();
        engine.spawn_player(Vec3::new(4.2, 0.5, 4.1));
        engine
    }

    #[test]
    fn begin_cuts_to_the_start_camera() {
        let mut engine = engine_with_player();
        let sequence = TeleportSequence::begin(
            &mut engine,
            Vec3::new(4.0, 0.5, 4.0),
            Vec3::new(4.0, 0.1, 24.0),
        )
        .unwrap();

        assert_eq!(
            engine.main_camera().active(),
            ActiveCamera::Virtual(sequence.start_camera)
        );
        assert_eq!(engine.main_camera().transition_seconds(), 0.5);

        let start = engine
            .world
            .get::<&TransformComponent>(sequence.start_camera)
            .unwrap()
            .0;
        assert!(start
            .translation
            .abs_diff_eq(Vec3::new(4.0, 3.5, 4.0), 1e-5));

        let end = engine
            .world
            .get::<&TransformComponent>(sequence.end_camera)
            .unwrap()
            .0;
        assert!(end.translation.abs_diff_eq(Vec3::new(4.0, 5.1, 19.0), 1e-5));
    }

    #[test]
    fn degenerate_direction_is_an_error() {
        let mut engine = engine_with_player();
        let position = Vec3::new(4.0, 0.5, 4.0);
        let result = TeleportSequence::begin(&mut engine, position, position);
        assert!(matches!(
            result,
            Err(SceneError::DegenerateTeleporter { .. })
        ));
    }

    #[test]
    fn phases_run_one_three_one_and_clean_up() {
        let mut engine = engine_with_player();
        let destination = Vec3::new(4.0, 0.1, 24.0);
        let mut sequence =
            TeleportSequence::begin(&mut engine, Vec3::new(4.0, 0.5, 4.0), destination).unwrap();
        let start_camera = sequence.start_camera;
        let end_camera = sequence.end_camera;

        // 0.25 is exactly representable, so threshold crossings land on
        // predictable ticks.
        let dt = 0.25;
        let mut ticks = 0;
        loop {
            let status = sequence.advance(&mut engine, dt).unwrap();
            ticks += 1;
            if status == SequenceStatus::Finished {
                break;
            }
            assert!(ticks < 100, "sequence never finished");
        }

        // 1.0 + 3.0 + 1.0 seconds at 0.25 per tick.
        assert_eq!(ticks, 20);
        assert_eq!(engine.player_position().unwrap(), destination);
        assert_eq!(engine.main_camera().active(), ActiveCamera::Default);
        assert!(!engine.world.contains(start_camera));
        assert!(!engine.world.contains(end_camera));
    }

    #[test]
    fn camera_switches_to_end_after_the_first_second() {
        let mut engine = engine_with_player();
        let mut sequence = TeleportSequence::begin(
            &mut engine,
            Vec3::new(4.0, 0.5, 4.0),
            Vec3::new(4.0, 0.1, 24.0),
        )
        .unwrap();
        let end_camera = sequence.end_camera;

        for _ in 0..3 {
            sequence.advance(&mut engine, 0.25).unwrap();
        }
        assert_eq!(
            engine.main_camera().active(),
            ActiveCamera::Virtual(sequence.start_camera)
        );

        sequence.advance(&mut engine, 0.25).unwrap();
        assert_eq!(
            engine.main_camera().active(),
            ActiveCamera::Virtual(end_camera)
        );
        assert_eq!(engine.main_camera().transition_seconds(), 3.0);
    }

    #[test]
    fn total_duration_is_step_size_independent() {
        for dt in [0.05, 0.25, 1.0] {
            let mut engine = engine_with_player();
            let mut sequence = TeleportSequence::begin(
                &mut engine,
                Vec3::new(4.0, 0.5, 4.0),
                Vec3::new(4.0, 0.1, 24.0),
            )
            .unwrap();

            let mut elapsed = 0.0;
            loop {
                let status = sequence.advance(&mut engine, dt).unwrap();
                elapsed += dt;
                if status == SequenceStatus::Finished {
                    break;
                }
                assert!(elapsed < 60.0, "sequence never finished at dt {}", dt);
            }

            // Each of the three thresholds must be crossed by accumulated dt,
            // so the total is at least 5 seconds and overshoots by at most
            // one tick per phase.
            assert!(elapsed >= 5.0 - 1e-3);
            assert!(elapsed <= 5.0 + 3.0 * dt + 1e-3);
        }
    }
}
