//! Pairwise links between nearby stars.
//!
//! The pair loop is O(n²), so distances are rejected on their square before
//! any root is taken. Surviving links are quantized into a fixed number of
//! alpha buckets and each bucket is stroked as a single path, trading a little
//! banding for far fewer draw calls.

use crate::constants::{LINK_BUCKETS, LINK_RGB, LINK_WIDTH};
use crate::particle::Particle;
use crate::render::{Rgba, Surface};
use glam::Vec2;

pub type Segment = (Vec2, Vec2);

/// Linear falloff to zero at `max_dist`, weighted by the pair's mean opacity
/// and by the dimmer of the two edge factors.
#[inline]
pub fn link_alpha(
    dist: f32,
    max_dist: f32,
    opacity_a: f32,
    opacity_b: f32,
    edge_a: f32,
    edge_b: f32,
) -> f32 {
    if max_dist <= 0.0 || dist.is_nan() || dist >= max_dist {
        return 0.0;
    }
    let falloff = 1.0 - dist / max_dist;
    (falloff * (opacity_a + opacity_b) * 0.5 * edge_a.min(edge_b)).clamp(0.0, 1.0)
}

/// Bucket index for an alpha; 0 means the link is not drawn.
#[inline]
pub fn bucket_for(alpha: f32) -> usize {
    ((alpha * LINK_BUCKETS as f32).round() as usize).min(LINK_BUCKETS)
}

#[inline]
pub fn bucket_alpha(bucket: usize) -> f32 {
    bucket as f32 / LINK_BUCKETS as f32
}

/// Line segments grouped by quantized alpha, reused between frames.
#[derive(Clone, Debug)]
pub struct LinkBatches {
    buckets: Vec<Vec<Segment>>,
}

impl Default for LinkBatches {
    fn default() -> Self {
        Self {
            buckets: vec![Vec::new(); LINK_BUCKETS],
        }
    }
}

impl LinkBatches {
    pub fn rebuild(&mut self, particles: &[Particle], max_dist: f32) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        let max_sq = max_dist * max_dist;
        for (i, a) in particles.iter().enumerate() {
            for b in &particles[i + 1..] {
                let dist_sq = (b.pos - a.pos).length_squared();
                if dist_sq > max_sq {
                    continue;
                }
                let alpha = link_alpha(
                    dist_sq.sqrt(),
                    max_dist,
                    a.opacity,
                    b.opacity,
                    a.edge,
                    b.edge,
                );
                let k = bucket_for(alpha);
                if k > 0 {
                    self.buckets[k - 1].push((a.pos, b.pos));
                }
            }
        }
    }

    /// Non-empty buckets as `(alpha, segments)`, faintest first.
    pub fn batches(&self) -> impl Iterator<Item = (f32, &[Segment])> + '_ {
        self.buckets
            .iter()
            .enumerate()
            .filter(|(_, segs)| !segs.is_empty())
            .map(|(i, segs)| (bucket_alpha(i + 1), segs.as_slice()))
    }

    pub fn segment_count(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        for (alpha, segments) in self.batches() {
            surface.stroke_segments(segments, LINK_WIDTH, Rgba::rgb(LINK_RGB, alpha));
        }
    }
}
