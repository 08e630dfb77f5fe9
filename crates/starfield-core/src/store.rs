use crate::constants::*;
use crate::particle::{Bounds, Particle};
use crate::scaling::ScalingCoefficients;
use glam::Vec2;
use rand::prelude::*;

/// Fixed-size population of stars for the session.
#[derive(Clone, Debug, Default)]
pub struct ParticleStore {
    pub particles: Vec<Particle>,
}

impl ParticleStore {
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn create_fresh<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        bounds: Bounds,
        scaling: &ScalingCoefficients,
        rng: &mut R,
    ) {
        self.particles = (0..count)
            .map(|i| {
                let vel = if i == BALL_INDEX {
                    Vec2::from(BALL_DRIFT)
                } else {
                    Vec2::new(
                        rng.gen_range(-DRIFT_MAX..=DRIFT_MAX),
                        rng.gen_range(-DRIFT_MAX..=DRIFT_MAX),
                    )
                };
                Particle {
                    pos: Vec2::new(
                        rng.gen::<f32>() * bounds.width,
                        rng.gen::<f32>() * bounds.height,
                    ),
                    vel,
                    momentum: Vec2::ZERO,
                    size: rng.gen_range(scaling.size_min..=scaling.size_max),
                    opacity: rng.gen::<f32>() * OPACITY_MAX,
                    fade_speed: rng.gen_range(FADE_SPEED_MIN..FADE_SPEED_MAX),
                    white: 0.0,
                    red: rng.gen::<f32>(),
                    edge: 1.0,
                }
            })
            .collect();
        self.refresh_edges(bounds, scaling.edge_fade_distance);
        log::info!(
            "[stars] created {} stars for {}x{}",
            count,
            bounds.width,
            bounds.height
        );
    }

    /// Adopts a persisted population, rescaled from `old_bounds` to
    /// `new_bounds`. Falls back to fresh creation when the data is absent,
    /// empty or malformed. Returns true when the persisted stars were kept.
    pub fn restore<R: Rng + ?Sized>(
        &mut self,
        serialized: Option<Vec<Particle>>,
        old_bounds: Bounds,
        new_bounds: Bounds,
        scaling: &ScalingCoefficients,
        rng: &mut R,
    ) -> bool {
        let usable = serialized
            .filter(|list| !list.is_empty())
            .and_then(|list| {
                if !old_bounds.is_valid() {
                    log::warn!("[stars] persisted bounds invalid; recreating");
                    None
                } else if !list.iter().all(Particle::is_well_formed) {
                    log::warn!("[stars] persisted stars malformed; recreating");
                    None
                } else {
                    Some(list)
                }
            });
        match usable {
            Some(list) => {
                let n = list.len();
                self.particles = list;
                if old_bounds != new_bounds {
                    self.rescale(old_bounds, new_bounds);
                }
                self.refresh_edges(new_bounds, scaling.edge_fade_distance);
                log::info!("[stars] restored {} stars", n);
                true
            }
            None => {
                self.create_fresh(scaling.particle_count, new_bounds, scaling, rng);
                false
            }
        }
    }

    /// Keeps the relative layout across a canvas resize. Drift, momentum and
    /// twinkle state are left alone.
    pub fn rescale(&mut self, old_bounds: Bounds, new_bounds: Bounds) {
        if !old_bounds.is_valid() || !new_bounds.is_valid() {
            return;
        }
        let ratio = new_bounds.size() / old_bounds.size();
        let size_ratio = (new_bounds.width + new_bounds.height)
            / (old_bounds.width + old_bounds.height);
        for p in &mut self.particles {
            p.pos *= ratio;
            p.size *= size_ratio;
        }
    }

    pub fn invert_drift(&mut self) {
        for p in &mut self.particles {
            p.vel = -p.vel;
        }
    }

    pub fn refresh_edges(&mut self, bounds: Bounds, fade_distance: f32) {
        for p in &mut self.particles {
            p.refresh_edge(bounds, fade_distance);
        }
    }
}
