use crate::constants::*;
use crate::input::PointerState;
use crate::keyboard::{Paddle, Wall};
use crate::particle::{Bounds, Particle};
use crate::simulator::TickContext;
use fnv::FnvHashMap;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryMode {
    Wrap,
    Bounce,
}

/// Evaluated fresh every tick: particles only bounce right under a recently
/// active pointer, and never while a poke is still strong.
pub fn mode_for(p: &Particle, pointer: &PointerState) -> BoundaryMode {
    let dist_sq = if pointer.active {
        (pointer.pos - p.pos).length_squared()
    } else {
        f32::INFINITY
    };
    if pointer.ring_timer == 0.0
        || dist_sq > WRAP_DISTANCE_SQ
        || pointer.poke_timer > POKE_WRAP_THRESHOLD
    {
        BoundaryMode::Wrap
    } else {
        BoundaryMode::Bounce
    }
}

/// Toroidal wrap once the drawn disc has fully left the canvas.
pub fn wrap(p: &mut Particle, bounds: Bounds) {
    let r = p.radius();
    if p.pos.x < -r {
        p.pos.x = bounds.width + r;
    } else if p.pos.x > bounds.width + r {
        p.pos.x = -r;
    }
    if p.pos.y < -r {
        p.pos.y = bounds.height + r;
    } else if p.pos.y > bounds.height + r {
        p.pos.y = -r;
    }
}

/// Mirrors the particle back inside and turns the normal components of drift
/// and momentum inward. Momentum keeps its magnitude.
pub fn bounce(p: &mut Particle, bounds: Bounds) {
    let r = p.radius();
    if p.pos.x < r {
        p.pos.x = (2.0 * r - p.pos.x).min(bounds.width - r).max(r);
        p.vel.x = p.vel.x.abs();
        p.momentum.x = p.momentum.x.abs();
    } else if p.pos.x > bounds.width - r {
        p.pos.x = (2.0 * (bounds.width - r) - p.pos.x).max(r).min(bounds.width - r);
        p.vel.x = -p.vel.x.abs();
        p.momentum.x = -p.momentum.x.abs();
    }
    if p.pos.y < r {
        p.pos.y = (2.0 * r - p.pos.y).min(bounds.height - r).max(r);
        p.vel.y = p.vel.y.abs();
        p.momentum.y = p.momentum.y.abs();
    } else if p.pos.y > bounds.height - r {
        p.pos.y = (2.0 * (bounds.height - r) - p.pos.y).max(r).min(bounds.height - r);
        p.vel.y = -p.vel.y.abs();
        p.momentum.y = -p.momentum.y.abs();
    }
}

/// Canvas-space rectangle covered by a paddle: `(origin, size)`.
pub fn paddle_rect(paddle: &Paddle, bounds: Bounds, thickness: f32) -> (Vec2, Vec2) {
    let c = bounds.percent_to_px(paddle.center_pct);
    match paddle.wall() {
        Wall::Left | Wall::Right => {
            let span = bounds.height * PADDLE_SPAN_FRACTION;
            let x = if paddle.wall() == Wall::Left {
                0.0
            } else {
                bounds.width - thickness
            };
            (Vec2::new(x, c.y - span / 2.0), Vec2::new(thickness, span))
        }
        Wall::Top | Wall::Bottom => {
            let span = bounds.width * PADDLE_SPAN_FRACTION;
            let y = if paddle.wall() == Wall::Top {
                0.0
            } else {
                bounds.height - thickness
            };
            (Vec2::new(c.x - span / 2.0, y), Vec2::new(span, thickness))
        }
    }
}

/// Where along the paddle the particle struck, normalized to [-1, 1], or None
/// when it is not touching the paddle while heading into its wall.
fn paddle_contact(p: &Particle, paddle: &Paddle, bounds: Bounds, thickness: f32) -> Option<f32> {
    let r = p.radius();
    let c = bounds.percent_to_px(paddle.center_pct);
    let heading = p.vel + p.momentum;
    let (in_band, toward, along, half_span) = match paddle.wall() {
        Wall::Left => (
            p.pos.x - r <= thickness,
            heading.x < 0.0,
            p.pos.y - c.y,
            bounds.height * PADDLE_SPAN_FRACTION / 2.0,
        ),
        Wall::Right => (
            p.pos.x + r >= bounds.width - thickness,
            heading.x > 0.0,
            p.pos.y - c.y,
            bounds.height * PADDLE_SPAN_FRACTION / 2.0,
        ),
        Wall::Top => (
            p.pos.y - r <= thickness,
            heading.y < 0.0,
            p.pos.x - c.x,
            bounds.width * PADDLE_SPAN_FRACTION / 2.0,
        ),
        Wall::Bottom => (
            p.pos.y + r >= bounds.height - thickness,
            heading.y > 0.0,
            p.pos.x - c.x,
            bounds.width * PADDLE_SPAN_FRACTION / 2.0,
        ),
    };
    if in_band && toward && half_span > 0.0 && along.abs() <= half_span {
        Some((along / half_span).clamp(-1.0, 1.0))
    } else {
        None
    }
}

/// Boundary handling for every particle, plus paddle contact for the ball.
#[derive(Clone, Debug, Default)]
pub struct BoundaryPolicy {
    last_paddle_hit_ms: FnvHashMap<(usize, Wall), f64>,
}

impl BoundaryPolicy {
    pub fn apply(&mut self, p: &mut Particle, index: usize, ctx: &TickContext) {
        if index == BALL_INDEX
            && ctx.keyboard.paddles_active()
            && ctx.bounds.is_valid()
            && self.paddle_bounce(p, index, ctx)
        {
            return;
        }
        match mode_for(p, ctx.pointer) {
            BoundaryMode::Wrap => wrap(p, ctx.bounds),
            BoundaryMode::Bounce => bounce(p, ctx.bounds),
        }
    }

    fn paddle_bounce(&mut self, p: &mut Particle, index: usize, ctx: &TickContext) -> bool {
        let bounds = ctx.bounds;
        let thickness = ctx.scaling.paddle_thickness();
        for paddle in &ctx.keyboard.paddles {
            let wall = paddle.wall();
            if let Some(&last) = self.last_paddle_hit_ms.get(&(index, wall)) {
                if ctx.clock_ms - last < PADDLE_COOLDOWN_MS {
                    continue;
                }
            }
            let Some(offset) = paddle_contact(p, paddle, bounds, thickness) else {
                continue;
            };
            let angle = offset * PADDLE_MAX_ANGLE;
            let speed = (p.vel + p.momentum)
                .length()
                .max(Vec2::from(BALL_DRIFT).length());
            let (sin, cos) = angle.sin_cos();
            let r = p.radius();
            match wall {
                Wall::Left => {
                    p.vel = Vec2::new(cos, sin) * speed;
                    p.pos.x = thickness + r;
                }
                Wall::Right => {
                    p.vel = Vec2::new(-cos, sin) * speed;
                    p.pos.x = bounds.width - thickness - r;
                }
                Wall::Top => {
                    p.vel = Vec2::new(sin, cos) * speed;
                    p.pos.y = thickness + r;
                }
                Wall::Bottom => {
                    p.vel = Vec2::new(sin, -cos) * speed;
                    p.pos.y = bounds.height - thickness - r;
                }
            }
            p.momentum = Vec2::ZERO;
            self.last_paddle_hit_ms.insert((index, wall), ctx.clock_ms);
            log::debug!("[paddle] hit {:?} offset={:.2}", wall, offset);
            return true;
        }
        false
    }
}
