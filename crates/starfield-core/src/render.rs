use crate::boundary::paddle_rect;
use crate::constants::*;
use crate::links::{LinkBatches, Segment};
use crate::particle::{Bounds, Particle};
use crate::simulator::SimState;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    #[inline]
    pub fn rgb(rgb: [u8; 3], a: f32) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a: a.clamp(0.0, 1.0),
        }
    }

    pub fn css(&self) -> String {
        format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a)
    }
}

/// The 2D drawing primitives the renderer needs from its host.
pub trait Surface {
    fn clear(&mut self, bounds: Bounds);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, color: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    /// Strokes every segment as one path with a single style.
    fn stroke_segments(&mut self, segments: &[Segment], line_width: f32, color: Rgba);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba);
}

/// Base tint shifted by the star's red bias, then pulled toward white by its
/// flash.
pub fn star_color(p: &Particle) -> Rgba {
    let white = p.white.clamp(0.0, 1.0);
    let channel = |base: f32| {
        let base = base.min(255.0);
        (base + (255.0 - base) * white).round() as u8
    };
    Rgba {
        r: channel(STAR_BASE_RGB[0] as f32 + STAR_RED_SPAN * p.red.clamp(0.0, 1.0)),
        g: channel(STAR_BASE_RGB[1] as f32),
        b: channel(STAR_BASE_RGB[2] as f32),
        a: p.opacity.clamp(0.0, 1.0),
    }
}

fn draw_pointer_ring<S: Surface + ?Sized>(state: &SimState, surface: &mut S) {
    let ring = state.pointer.ring_timer;
    if !state.settings.ring_enabled || !state.pointer.active || ring <= RING_VISIBLE_MIN {
        return;
    }
    surface.stroke_circle(
        state.pointer.pos,
        RING_BASE_RADIUS + RING_GROWTH * ring,
        1.0 + ring,
        Rgba::rgb(RING_RGB, RING_ALPHA * ring.min(1.0)),
    );
}

fn draw_paddles<S: Surface + ?Sized>(state: &SimState, surface: &mut S) {
    if !state.keyboard.paddles_active() {
        return;
    }
    let thickness = state.scaling.paddle_thickness();
    let color = Rgba::rgb(
        [PADDLE_RGBA[0], PADDLE_RGBA[1], PADDLE_RGBA[2]],
        PADDLE_RGBA[3] as f32 / 255.0,
    );
    for paddle in &state.keyboard.paddles {
        let (origin, size) = paddle_rect(paddle, state.bounds, thickness);
        surface.fill_rect(origin, size, color);
    }
}

/// Draws one frame from the state left by the last tick: clear, ring, links,
/// paddles, then the stars on top.
pub fn draw_frame<S: Surface + ?Sized>(state: &SimState, links: &mut LinkBatches, surface: &mut S) {
    surface.clear(state.bounds);
    draw_pointer_ring(state, surface);
    links.rebuild(&state.store.particles, state.scaling.max_link_distance);
    links.draw(surface);
    draw_paddles(state, surface);
    for p in &state.store.particles {
        surface.fill_circle(p.pos, p.radius(), star_color(p));
    }
}
