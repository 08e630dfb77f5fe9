use crate::boundary::BoundaryPolicy;
use crate::constants::*;
use crate::forces;
use crate::input::{geometric_decay, PointerState};
use crate::keyboard::KeyboardImpulse;
use crate::particle::{Bounds, Particle};
use crate::scaling::ScalingCoefficients;
use crate::settings::Settings;
use crate::store::ParticleStore;
use rand::prelude::*;
use std::time::Duration;

/// Everything a tick reads and mutates, owned in one place.
#[derive(Clone, Debug)]
pub struct SimState {
    pub bounds: Bounds,
    pub scaling: ScalingCoefficients,
    pub settings: Settings,
    pub store: ParticleStore,
    pub pointer: PointerState,
    pub keyboard: KeyboardImpulse,
}

impl SimState {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            scaling: ScalingCoefficients::for_bounds(bounds),
            settings: Settings::default(),
            store: ParticleStore::default(),
            pointer: PointerState::default(),
            keyboard: KeyboardImpulse::default(),
        }
    }
}

/// Read-only view of the tick inputs handed to the force and boundary code.
pub struct TickContext<'a> {
    pub bounds: Bounds,
    pub scaling: &'a ScalingCoefficients,
    pub settings: &'a Settings,
    pub pointer: &'a PointerState,
    pub keyboard: &'a KeyboardImpulse,
    pub dt_frames: f32,
    pub clamp_limit: f32,
    pub clock_ms: f64,
}

/// Elapsed wall time expressed in reference frames, capped so a long pause
/// does not turn into one huge step.
#[inline]
pub fn dt_frames(elapsed: Duration) -> f32 {
    let ms = elapsed.as_secs_f32() * 1000.0;
    (ms / REFERENCE_FRAME_MS).clamp(0.0, MAX_DT_FRAMES)
}

#[inline]
pub fn update_flash(p: &mut Particle, dt_frames: f32) {
    p.white = geometric_decay(p.white, WHITE_DECAY, dt_frames, WHITE_SNAP);
}

/// Reset, fade, then linger: a near-invisible star snaps back to full
/// brightness (sometimes with a white flash), fades quickly, and spends a long
/// tail barely visible.
pub fn update_twinkle<R: Rng + ?Sized>(p: &mut Particle, dt_frames: f32, rng: &mut R) {
    if p.opacity <= OPACITY_RESET_BELOW {
        p.opacity = OPACITY_RESET_BASE + rng.gen::<f32>() * OPACITY_RESET_SPAN;
        if rng.gen_bool(FLASH_CHANCE) {
            p.white = 1.0;
        }
    } else if p.opacity > OPACITY_TAIL_ABOVE {
        p.opacity -= OPACITY_FADE_RATE * p.fade_speed * dt_frames;
    } else {
        p.opacity -= OPACITY_TAIL_RATE * p.fade_speed * dt_frames;
    }
    p.opacity = p.opacity.max(0.0);
}

pub struct Simulator {
    rng: StdRng,
    boundary: BoundaryPolicy,
    clock_ms: f64,
}

impl Simulator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            boundary: BoundaryPolicy::default(),
            clock_ms: 0.0,
        }
    }

    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Simulation time accumulated from ticks; drives paddle cooldowns.
    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    /// One physics step over every particle, then pointer and keyboard decay.
    pub fn tick(&mut self, state: &mut SimState, dt_frames: f32) {
        if !state.bounds.is_valid() {
            return;
        }
        if state.keyboard.invert_drift {
            state.store.invert_drift();
        }
        let ctx = TickContext {
            bounds: state.bounds,
            scaling: &state.scaling,
            settings: &state.settings,
            pointer: &state.pointer,
            keyboard: &state.keyboard,
            dt_frames,
            clamp_limit: forces::clamp_limit(&state.settings, &state.scaling),
            clock_ms: self.clock_ms,
        };
        let fade_distance = state.scaling.edge_fade_distance;
        for (i, p) in state.store.particles.iter_mut().enumerate() {
            forces::accumulate(p, i, &ctx);
            forces::integrate(p, dt_frames);
            self.boundary.apply(p, i, &ctx);
            update_flash(p, dt_frames);
            update_twinkle(p, dt_frames, &mut self.rng);
            p.refresh_edge(ctx.bounds, fade_distance);
        }

        let dt_ms = dt_frames * REFERENCE_FRAME_MS;
        state.pointer.decay(dt_frames);
        state.keyboard.consume(dt_ms);
        self.clock_ms += dt_ms as f64;
    }
}
