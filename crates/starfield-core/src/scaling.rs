//! Screen-size adaptive coefficients.
//!
//! Every size and strength in the simulation is tuned for a 1200px "screen
//! perimeter" (width + height). The coefficients here bend those tunings with
//! power laws so the field looks the same on a phone and on a wide monitor.

use crate::constants::*;
use crate::particle::Bounds;

#[derive(Clone, Debug, PartialEq)]
pub struct ScalingCoefficients {
    pub screen_perimeter: f32,
    pub scale_up: f32,
    pub scale_down: f32,
    pub particle_count: usize,
    pub max_link_distance: f32,
    pub attract_gradient: f32,
    pub repel_gradient: f32,
    pub attract_shape: f32,
    pub repel_shape: f32,
    pub attract_force: f32,
    pub repel_force: f32,
    pub clamp_scale: f32,
    pub size_min: f32,
    pub size_max: f32,
    pub edge_fade_distance: f32,
}

impl ScalingCoefficients {
    pub fn for_bounds(bounds: Bounds) -> Self {
        Self::from_viewport(bounds.width, bounds.height)
    }

    pub fn from_viewport(width: f32, height: f32) -> Self {
        let sum = width + height;
        let perimeter = if sum.is_finite() {
            sum.clamp(1.0, SCREEN_PERIMETER_MAX)
        } else {
            SCREEN_PERIMETER_REF
        };
        let scale_up = (perimeter / SCREEN_PERIMETER_REF).powf(SCALE_EXPONENT);
        let scale_down = (SCREEN_PERIMETER_REF / perimeter).powf(SCALE_EXPONENT);
        let particle_count = ((perimeter / STAR_COUNT_DIVISOR).round() as usize)
            .clamp(STAR_COUNT_MIN, STAR_COUNT_MAX);
        Self {
            screen_perimeter: perimeter,
            scale_up,
            scale_down,
            particle_count,
            max_link_distance: LINK_DISTANCE_BASE * scale_up.powf(LINK_DISTANCE_EXPONENT),
            attract_gradient: scale_up.powf(ATTRACT_GRADIENT_EXPONENT),
            repel_gradient: scale_up.powf(REPEL_GRADIENT_EXPONENT),
            attract_shape: scale_down.powf(ATTRACT_SHAPE_EXPONENT),
            repel_shape: scale_down.powf(REPEL_SHAPE_EXPONENT),
            attract_force: scale_up.powf(ATTRACT_FORCE_EXPONENT),
            repel_force: scale_up.powf(REPEL_FORCE_EXPONENT),
            clamp_scale: scale_up.powf(CLAMP_SCALE_EXPONENT),
            size_min: STAR_SIZE_MIN * scale_up,
            size_max: STAR_SIZE_MAX * scale_up,
            edge_fade_distance: EDGE_FADE_DISTANCE * scale_up,
        }
    }

    /// Pointer forces are skipped beyond this squared distance.
    #[inline]
    pub fn influence_range_sq(&self) -> f32 {
        let r = self.screen_perimeter * INFLUENCE_RANGE_FACTOR;
        r * r
    }

    #[inline]
    pub fn paddle_thickness(&self) -> f32 {
        PADDLE_THICKNESS * self.scale_up
    }
}
