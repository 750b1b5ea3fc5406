// teleport/mod.rs
// The teleportation core: pad registry, proximity trigger, and the
// per-activation camera/relocation sequence.

pub mod registry;
pub mod ripple;
mod sequencer;
mod trigger;

pub use registry::{base_alpha, create_teleporter, RippleLayer, Teleporter, TeleporterSpec};

use crate::engine::Engine;
use crate::error::SceneError;
use crate::settings::SceneSettings;
use sequencer::{SequenceStatus, TeleportSequence};

/// Camera cut, travel blend, and arrival dwell back to back.
pub const SEQUENCE_TOTAL_SECONDS: f32 =
    sequencer::AT_START_SECONDS + sequencer::TRAVEL_SECONDS + sequencer::ARRIVAL_SECONDS;

/// Owns all teleportation state: the activation cooldown and the list of
/// live sequences. "In flight" is not a separate flag; it is derived from
/// the sequence list, so a failed sequence can never leave teleportation
/// wedged once the watchdog reclaims it.
pub struct TeleportManager {
    cooldown: f32,
    active: Vec<TeleportSequence>,
    trigger_range_xz: f32,
    trigger_range_y: f32,
    cooldown_seconds: f32,
    watchdog_seconds: f32,
}

impl TeleportManager {
    pub fn new(settings: &SceneSettings) -> Self {
        Self {
            cooldown: 0.0,
            active: Vec::new(),
            trigger_range_xz: settings.trigger_range_xz,
            trigger_range_y: settings.trigger_range_y,
            cooldown_seconds: settings.cooldown_seconds,
            watchdog_seconds: settings.watchdog_seconds,
        }
    }

    /// True while any activation is live.
    pub fn in_flight(&self) -> bool {
        !self.active.is_empty()
    }

    /// Remaining cooldown; no activation is possible while positive.
    pub fn cooldown(&self) -> f32 {
        self.cooldown
    }

    /// One frame of teleportation logic. Live sequences advance first, then
    /// the proximity trigger runs, so a sequence spawned this tick receives
    /// its first advance on the next one.
    pub fn update(&mut self, engine: &mut Engine, dt: f32) -> Result<(), SceneError> {
        self.advance_sequences(engine, dt)?;
        self.run_trigger(engine, dt)
    }

    fn advance_sequences(&mut self, engine: &mut Engine, dt: f32) -> Result<(), SceneError> {
        let mut index = 0;
        while index < self.active.len() {
            match self.active[index].advance(engine, dt) {
                Ok(SequenceStatus::Finished) => {
                    self.active.swap_remove(index);
                }
                Ok(SequenceStatus::Running) => {
                    if self.active[index].lifetime() >= self.watchdog_seconds {
                        let mut sequence = self.active.swap_remove(index);
                        sequence.abort(engine);
                    } else {
                        index += 1;
                    }
                }
                Err(err) => {
                    // A failing sequence stays queued and retries next tick;
                    // the watchdog reclaims it if it never recovers. The
                    // error itself still surfaces to the frame driver.
                    if self.active[index].lifetime() >= self.watchdog_seconds {
                        let mut sequence = self.active.swap_remove(index);
                        sequence.abort(engine);
                    }
                    return Err(err);
                }
            }
        }
        Ok(())
    }

    fn run_trigger(&mut self, engine: &mut Engine, dt: f32) -> Result<(), SceneError> {
        // While cooling down nothing is scanned, not even other pads.
        if self.cooldown > 0.0 {
            self.cooldown -= dt;
            return Ok(());
        }

        let Some(player) = engine.player_position() else {
            return Ok(());
        };

        if self.in_flight() {
            return Ok(());
        }

        let Some(hit) = trigger::scan(
            &engine.world,
            player,
            self.trigger_range_xz,
            self.trigger_range_y,
        ) else {
            return Ok(());
        };

        log::info!(
            "Player at {:?} stepped onto the pad at {:?}",
            player,
            hit.pad_position
        );
        self.cooldown = self.cooldown_seconds;
        let sequence = TeleportSequence::begin(engine, hit.pad_position, hit.destination)?;
        self.active.push(sequence);
        Ok(())
    }
}
