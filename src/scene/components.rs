// scene/components.rs

/// Tag grouping the spawnable cubes, mainly for the HUD counter.
#[derive(Debug, Clone, Copy)]
pub struct Cube;

/// Continuous yaw rotation, radians per second.
#[derive(Debug, Clone, Copy)]
pub struct Spinner {
    pub speed: f32,
}

/// Continuous albedo hue cycling, full cycles per second.
#[derive(Debug, Clone, Copy)]
pub struct ColorCycle {
    pub speed: f32,
}
