use crate::constants::*;
use glam::Vec2;

/// Pointer position plus the decaying energies derived from it.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    pub pos: Vec2,
    /// False until the first pointer event and after the pointer leaves.
    pub active: bool,
    pub speed: f32,
    pub poke_timer: f32,
    pub ring_timer: f32,
    last_sample: Option<(Vec2, f64)>,
}

/// Multiplies `value` by `rate` once per elapsed reference frame and snaps it
/// to zero below `snap`.
#[inline]
pub fn geometric_decay(value: f32, rate: f32, dt_frames: f32, snap: f32) -> f32 {
    let v = value * rate.powf(dt_frames);
    if v < snap {
        0.0
    } else {
        v
    }
}

/// Converts an event timestamp to epoch milliseconds.
///
/// Browsers report either epoch-like values or high-resolution values
/// relative to the page's time origin. Relative values are shifted by
/// `time_origin` when the host knows it; otherwise they are returned as-is,
/// which is still consistent between two events of the same page.
#[inline]
pub fn normalize_timestamp(timestamp_ms: f64, time_origin_ms: Option<f64>) -> f64 {
    if timestamp_ms >= EPOCH_TIMESTAMP_MIN {
        return timestamp_ms;
    }
    match time_origin_ms {
        Some(origin) if origin.is_finite() => origin + timestamp_ms,
        _ => timestamp_ms,
    }
}

/// Maps a raw pointer speed (px/ms) onto the bounded energy unit.
#[inline]
pub fn speed_energy(px_per_ms: f32) -> f32 {
    if !px_per_ms.is_finite() {
        return 0.0;
    }
    (px_per_ms * POINTER_SPEED_GAIN).clamp(0.0, POINTER_SPEED_MAX)
}

impl PointerState {
    /// Records a move sample; `timestamp_ms` must already be normalized.
    pub fn moved(&mut self, pos: Vec2, timestamp_ms: f64) {
        if let Some((prev_pos, prev_t)) = self.last_sample {
            let dt = timestamp_ms - prev_t;
            if dt > 0.0 && dt <= POINTER_GAP_MAX_MS {
                let energy = speed_energy(pos.distance(prev_pos) / dt as f32);
                self.speed = self.speed.max(energy);
                self.ring_timer = self.ring_timer.max(energy * RING_PER_SPEED);
            }
        }
        self.pos = pos;
        self.active = true;
        self.last_sample = Some((pos, timestamp_ms));
    }

    /// Click or tap: arms the poke and swells the ring.
    pub fn tapped(&mut self, pos: Vec2, timestamp_ms: f64) {
        self.pos = pos;
        self.active = true;
        self.last_sample = Some((pos, timestamp_ms));
        self.poke_timer = POKE_START;
        self.ring_timer = (self.ring_timer + TAP_RING_BOOST).min(RING_MAX);
        self.speed = self.speed.max(TAP_SPEED);
    }

    pub fn left(&mut self) {
        self.active = false;
        self.last_sample = None;
    }

    pub fn decay(&mut self, dt_frames: f32) {
        self.speed = geometric_decay(self.speed, SPEED_DECAY, dt_frames, SPEED_SNAP);
        self.ring_timer = geometric_decay(self.ring_timer, RING_DECAY, dt_frames, RING_SNAP);
        self.poke_timer = geometric_decay(self.poke_timer, POKE_DECAY, dt_frames, POKE_SNAP);
    }
}
