/// Virtual camera definition; switching to one blends the view over the
/// stored duration.
#[derive(Debug, Clone, Copy)]
pub struct VirtualCamera {
    pub transition_seconds: f32,
}

impl VirtualCamera {
    pub fn with_transition(transition_seconds: f32) -> Self {
        Self { transition_seconds }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveCamera {
    /// The host-driven player camera.
    Default,
    /// A scene-owned virtual camera entity.
    Virtual(hecs::Entity),
}

/// Main-camera assignment state, the scene-side mirror of the host engine's
/// active camera.
#[derive(Debug, Clone, Copy)]
pub struct MainCamera {
    active: ActiveCamera,
    transition_seconds: f32,
}

impl MainCamera {
    pub fn new() -> Self {
        Self {
            active: ActiveCamera::Default,
            transition_seconds: 0.0,
        }
    }

    pub fn activate(&mut self, camera: hecs::Entity, transition_seconds: f32) {
        self.active = ActiveCamera::Virtual(camera);
        self.transition_seconds = transition_seconds;
    }

    pub fn reset(&mut self) {
        self.active = ActiveCamera::Default;
        self.transition_seconds = 0.0;
    }

    pub fn active(&self) -> ActiveCamera {
        self.active
    }

    /// Duration of the blend that brought the current camera in.
    pub fn transition_seconds(&self) -> f32 {
        self.transition_seconds
    }
}

impl Default for MainCamera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hecs::World;

    #[test]
    fn activate_and_reset_round_trip() {
        let mut world = World::new();
        let camera = world.spawn((VirtualCamera::with_transition(2.0),));

        let mut main = MainCamera::new();
        assert_eq!(main.active(), ActiveCamera::Default);

        main.activate(camera, 2.0);
        assert_eq!(main.active(), ActiveCamera::Virtual(camera));
        assert_eq!(main.transition_seconds(), 2.0);

        main.reset();
        assert_eq!(main.active(), ActiveCamera::Default);
        assert_eq!(main.transition_seconds(), 0.0);
    }
}
