//! Default value functions for serde deserialization.

pub fn max_speed() -> f32 {
    1.0
}

pub fn delta_time() -> f32 {
    1.0
}

pub fn rotation_angle() -> f32 {
    std::f32::consts::FRAC_PI_8
}

pub fn angle_steps() -> u32 {
    2
}

pub fn delta_dist() -> f32 {
    0.5
}

pub fn epsilon() -> f32 {
    0.5
}

pub fn max_expansions() -> usize {
    100_000
}

pub fn surface_max() -> f32 {
    2.0
}

pub fn obstacle_clearance_radius() -> f32 {
    1.0
}

pub fn obstacle_layer_mask() -> u32 {
    u32::MAX
}
