use crate::input::normalize_timestamp;
use crate::keyboard::KeyCommand;
use crate::links::LinkBatches;
use crate::particle::{Bounds, Particle};
use crate::persist::{self, PersistedMeta, PersistedState, Storage};
use crate::render::{self, Surface};
use crate::scaling::ScalingCoefficients;
use crate::settings::{SettingKey, Settings};
use crate::simulator::{dt_frames, SimState, Simulator};
use glam::Vec2;
use std::time::Duration;

/// The whole starfield: simulation state, link batches and the freeze gate.
///
/// Hosts call [`Starfield::frame`] once per display refresh and forward
/// pointer, keyboard, resize and page-lifecycle events between frames.
pub struct Starfield {
    state: SimState,
    simulator: Simulator,
    links: LinkBatches,
    frozen: bool,
    // last usable size the stars are laid out in; survives collapsed canvases
    layout: Bounds,
    // persisted stars waiting for the canvas to reach a usable size
    pending: Option<PersistedState>,
}

impl Starfield {
    /// A fresh field; stars are created as soon as `bounds` is usable.
    pub fn new(bounds: Bounds, seed: u64) -> Self {
        let mut field = Self {
            state: SimState::new(bounds),
            simulator: Simulator::new(seed),
            links: LinkBatches::default(),
            frozen: false,
            layout: bounds,
            pending: None,
        };
        field.populate();
        field
    }

    /// Restores the field from `storage`, falling back to fresh stars when
    /// nothing usable was saved. Storage faults are logged, never returned.
    pub fn boot<S: Storage + ?Sized>(bounds: Bounds, storage: &S, key: &str, seed: u64) -> Self {
        let pending = match persist::load(storage, key) {
            Ok(loaded) => loaded,
            Err(e) => {
                log::warn!("[persist] {}; starting fresh", e);
                None
            }
        };
        let mut field = Self {
            state: SimState::new(bounds),
            simulator: Simulator::new(seed),
            links: LinkBatches::default(),
            frozen: false,
            layout: bounds,
            pending,
        };
        if let Some(saved) = &field.pending {
            field.state.settings = saved.meta.settings.clone().sanitized();
        }
        field.populate();
        field
    }

    fn populate(&mut self) {
        if !self.state.bounds.is_valid() || !self.state.store.is_empty() {
            return;
        }
        let (particles, old_bounds) = match self.pending.take() {
            Some(saved) => (Some(saved.particles), saved.meta.bounds()),
            None => (None, self.state.bounds),
        };
        let bounds = self.state.bounds;
        self.layout = bounds;
        self.state.store.restore(
            particles,
            old_bounds,
            bounds,
            &self.state.scaling,
            self.simulator.rng_mut(),
        );
    }

    /// Adopts a new canvas size. A collapsed canvas pauses the field; the
    /// next usable size rescales from the last usable layout.
    pub fn resize(&mut self, bounds: Bounds) {
        if bounds == self.state.bounds {
            return;
        }
        self.state.bounds = bounds;
        if !bounds.is_valid() {
            log::debug!("[resize] canvas collapsed to {}x{}", bounds.width, bounds.height);
            return;
        }
        let old = self.layout;
        self.state.scaling = ScalingCoefficients::for_bounds(bounds);
        if self.state.store.is_empty() {
            self.populate();
        } else {
            self.state.store.rescale(old, bounds);
            self.state
                .store
                .refresh_edges(bounds, self.state.scaling.edge_fade_distance);
            self.layout = bounds;
        }
        log::info!(
            "[resize] {}x{} -> {}x{} links<={:.1}px",
            old.width,
            old.height,
            bounds.width,
            bounds.height,
            self.state.scaling.max_link_distance
        );
    }

    /// One animation frame: physics unless frozen, then render. Returns false
    /// when there was nothing to draw.
    pub fn frame<S: Surface + ?Sized>(&mut self, elapsed: Duration, surface: &mut S) -> bool {
        if !self.state.bounds.is_valid() || self.state.store.is_empty() {
            return false;
        }
        if !self.frozen {
            self.simulator.tick(&mut self.state, dt_frames(elapsed));
        }
        render::draw_frame(&self.state, &mut self.links, surface);
        true
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn set_frozen(&mut self, frozen: bool) {
        if self.frozen != frozen {
            log::info!("[loop] frozen={}", frozen);
        }
        self.frozen = frozen;
    }

    pub fn pointer_moved(&mut self, pos: Vec2, timestamp_ms: f64, time_origin_ms: Option<f64>) {
        let t = normalize_timestamp(timestamp_ms, time_origin_ms);
        self.state.pointer.moved(pos, t);
    }

    pub fn pointer_tapped(&mut self, pos: Vec2, timestamp_ms: f64, time_origin_ms: Option<f64>) {
        let t = normalize_timestamp(timestamp_ms, time_origin_ms);
        self.state.pointer.tapped(pos, t);
    }

    pub fn pointer_left(&mut self) {
        self.state.pointer.left();
    }

    pub fn handle_key(&mut self, command: KeyCommand) {
        match command {
            KeyCommand::ToggleFreeze => self.set_frozen(!self.frozen),
            KeyCommand::ToggleRing => {
                self.state.settings.ring_enabled = !self.state.settings.ring_enabled;
            }
            impulse => {
                self.state.keyboard.apply(impulse);
            }
        }
    }

    pub fn set_setting(&mut self, key: SettingKey, value: f32) {
        self.state.settings.set(key, value);
    }

    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SimState {
        &mut self.state
    }

    pub fn particles(&self) -> &[Particle] {
        &self.state.store.particles
    }

    pub fn links(&self) -> &LinkBatches {
        &self.links
    }

    pub fn snapshot(&self) -> PersistedState {
        PersistedState {
            particles: self.state.store.particles.clone(),
            meta: PersistedMeta {
                width: self.layout.width,
                height: self.layout.height,
                settings: self.state.settings.clone(),
            },
        }
    }

    /// Writes the snapshot; failures are logged and swallowed.
    pub fn save<S: Storage + ?Sized>(&self, storage: &mut S, key: &str) {
        if self.state.store.is_empty() {
            return;
        }
        match persist::save(storage, key, &self.snapshot()) {
            Ok(()) => log::debug!("[persist] saved {} stars", self.state.store.len()),
            Err(e) => log::warn!("[persist] {}", e),
        }
    }
}
