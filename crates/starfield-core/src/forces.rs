//! Pointer, poke, drift and keyboard forces acting on one particle.
//!
//! The formulas are tuned by eye, not derived from physics. Every force is a
//! linear falloff raised to a shape exponent and multiplied by a strength, each
//! of which is bent by the screen scaling coefficients.

use crate::constants::*;
use crate::particle::Particle;
use crate::settings::Settings;
use crate::simulator::TickContext;
use crate::scaling::ScalingCoefficients;
use glam::Vec2;

/// `(1 - dist/radius)^exponent`, zero outside the radius.
#[inline]
pub fn falloff(dist: f32, radius: f32, exponent: f32) -> f32 {
    if radius <= 0.0 {
        return 0.0;
    }
    let g = (1.0 - dist / radius).max(0.0);
    if g == 0.0 {
        0.0
    } else {
        g.powf(exponent)
    }
}

#[inline]
pub fn shape_exponent(setting: f32, k: f32, scaling_factor: f32) -> f32 {
    (setting * k * scaling_factor).max(SHAPE_EXPONENT_MIN)
}

/// Momentum cap: `clamp · K · scale_up²`.
#[inline]
pub fn clamp_limit(settings: &Settings, scaling: &ScalingCoefficients) -> f32 {
    (settings.clamp * CLAMP_K * scaling.clamp_scale).max(0.0)
}

/// Scales `momentum` down to `limit` keeping its direction.
#[inline]
pub fn clamp_momentum(momentum: Vec2, limit: f32) -> Vec2 {
    let len = momentum.length();
    if len > limit && len > 0.0 {
        momentum * (limit / len)
    } else {
        momentum
    }
}

/// Adds this tick's forces to the particle's momentum and clamps it.
pub fn accumulate(p: &mut Particle, index: usize, ctx: &TickContext) {
    let s = ctx.settings;
    let sc = ctx.scaling;
    let pointer = ctx.pointer;
    let mut force = Vec2::ZERO;

    if pointer.active {
        let delta = pointer.pos - p.pos;
        let dist_sq = delta.length_squared();
        if dist_sq <= sc.influence_range_sq() {
            let dist = dist_sq.sqrt() + DISTANCE_EPSILON;
            let toward = delta / dist;

            let attract = falloff(
                dist,
                s.attract_radius * ATTRACT_RADIUS_K * sc.attract_gradient,
                shape_exponent(s.attract_scale, ATTRACT_SHAPE_K, sc.attract_shape),
            ) * s.attract_strength
                * ATTRACT_STRENGTH_K
                * sc.attract_force
                * pointer.speed;
            force += toward * attract;
            if ctx.keyboard.orbit {
                force += toward.perp() * attract * ORBIT_TANGENT_RATIO;
            }

            let repel_radius = s.repel_radius * REPEL_RADIUS_K * sc.repel_gradient;
            let repel_exponent = shape_exponent(s.repel_scale, REPEL_SHAPE_K, sc.repel_shape);
            let repel = falloff(dist, repel_radius, repel_exponent)
                * s.repel_strength
                * REPEL_STRENGTH_K
                * sc.repel_force
                * pointer.speed;
            force -= toward * repel;

            if pointer.poke_timer > 0.0 {
                // the paddle ball gets a rounder, fixed poke profile
                let poke_exponent = if index == BALL_INDEX && ctx.keyboard.paddles_active() {
                    PADDLE_POKE_EXPONENT
                } else {
                    repel_exponent
                };
                let poke = falloff(dist, repel_radius * POKE_RADIUS_MULT, poke_exponent)
                    * s.poke_strength
                    * POKE_STRENGTH_K
                    * pointer.poke_timer;
                force -= toward * poke;
            }
        }
    }

    let boost = (DRIFT_BOOST_COEFF * pointer.speed).min(DRIFT_BOOST_CAP);
    force += p.vel * boost;

    if let Some(pct) = ctx.keyboard.magnet_pct {
        let target = ctx.bounds.percent_to_px(pct);
        force += (target - p.pos).normalize_or_zero() * MAGNET_STRENGTH * sc.attract_force;
    }

    p.momentum += force * ctx.dt_frames;
    p.momentum = p.momentum * ctx.keyboard.mul + ctx.keyboard.add;
    p.momentum = clamp_momentum(p.momentum, ctx.clamp_limit);
}

/// Moves the particle by its drift plus momentum, then damps the momentum.
#[inline]
pub fn integrate(p: &mut Particle, dt_frames: f32) {
    p.pos += (p.vel + p.momentum) * dt_frames;
    p.momentum *= MOMENTUM_DAMPING.powf(dt_frames);
}
