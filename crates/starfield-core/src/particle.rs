use crate::constants::OPACITY_MAX;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Canvas size in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A zero or non-finite canvas has no usable geometry yet.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Converts viewport percent coordinates (0..100) to canvas pixels.
    #[inline]
    pub fn percent_to_px(&self, pct: Vec2) -> Vec2 {
        pct / 100.0 * self.size()
    }
}

/// One star.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    /// Passive drift in px per frame.
    pub vel: Vec2,
    pub momentum: Vec2,
    pub size: f32,
    pub opacity: f32,
    pub fade_speed: f32,
    pub white: f32,
    pub red: f32,
    /// Boundary fade factor, refreshed every tick.
    #[serde(skip)]
    pub edge: f32,
}

impl Particle {
    /// Radius as drawn, including the flash swell.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.white * 2.0 + self.size
    }

    pub fn is_well_formed(&self) -> bool {
        let finite = [
            self.pos.x,
            self.pos.y,
            self.vel.x,
            self.vel.y,
            self.momentum.x,
            self.momentum.y,
            self.size,
            self.opacity,
            self.fade_speed,
            self.white,
            self.red,
        ]
        .iter()
        .all(|v| v.is_finite());
        finite
            && self.size > 0.0
            && (0.0..=OPACITY_MAX).contains(&self.opacity)
            && self.fade_speed >= 0.0
            && self.white >= 0.0
    }

    /// Distance to the nearest canvas edge mapped onto 0..1.
    pub fn refresh_edge(&mut self, bounds: Bounds, fade_distance: f32) {
        let nearest = self
            .pos
            .x
            .min(bounds.width - self.pos.x)
            .min(self.pos.y)
            .min(bounds.height - self.pos.y);
        self.edge = (nearest / fade_distance.max(1.0)).clamp(0.0, 1.0);
    }
}
