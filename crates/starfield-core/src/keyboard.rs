use crate::constants::*;
use glam::Vec2;
use smallvec::{smallvec, SmallVec};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Wall {
    Left,
    Right,
    Top,
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaddleSide {
    Left,
    Right,
}

/// A player paddle, centred at a viewport-percent position on one wall.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paddle {
    pub center_pct: Vec2,
}

impl Paddle {
    pub fn at_percent(x_pct: f32, y_pct: f32) -> Self {
        Self {
            center_pct: Vec2::new(x_pct, y_pct),
        }
    }

    /// The wall nearest to the paddle centre.
    pub fn wall(&self) -> Wall {
        let c = self.center_pct;
        let candidates = [
            (c.x, Wall::Left),
            (100.0 - c.x, Wall::Right),
            (c.y, Wall::Top),
            (100.0 - c.y, Wall::Bottom),
        ];
        let mut best = candidates[0];
        for cand in &candidates[1..] {
            if cand.0 < best.0 {
                best = *cand;
            }
        }
        best.1
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyCommand {
    Nudge(Vec2),
    Boost,
    Brake,
    /// Numpad-style cell 1..=9, 7 being top-left.
    Magnet(u8),
    InvertDrift,
    ToggleOrbit,
    MovePaddle(PaddleSide, f32),
    ToggleFreeze,
    ToggleRing,
}

#[inline]
pub fn command_for_key(key: &str) -> Option<KeyCommand> {
    match key {
        "ArrowUp" => Some(KeyCommand::Nudge(Vec2::new(0.0, -NUDGE))),
        "ArrowDown" => Some(KeyCommand::Nudge(Vec2::new(0.0, NUDGE))),
        "ArrowLeft" => Some(KeyCommand::Nudge(Vec2::new(-NUDGE, 0.0))),
        "ArrowRight" => Some(KeyCommand::Nudge(Vec2::new(NUDGE, 0.0))),
        "b" | "B" => Some(KeyCommand::Boost),
        "x" | "X" => Some(KeyCommand::Brake),
        "i" | "I" => Some(KeyCommand::InvertDrift),
        "o" | "O" => Some(KeyCommand::ToggleOrbit),
        "q" | "Q" => Some(KeyCommand::MovePaddle(PaddleSide::Left, -PADDLE_STEP_PCT)),
        "a" | "A" => Some(KeyCommand::MovePaddle(PaddleSide::Left, PADDLE_STEP_PCT)),
        "p" | "P" => Some(KeyCommand::MovePaddle(PaddleSide::Right, -PADDLE_STEP_PCT)),
        "l" | "L" => Some(KeyCommand::MovePaddle(PaddleSide::Right, PADDLE_STEP_PCT)),
        " " => Some(KeyCommand::ToggleFreeze),
        "g" | "G" => Some(KeyCommand::ToggleRing),
        _ => magnet_cell_for_digit(key).map(KeyCommand::Magnet),
    }
}

#[inline]
fn magnet_cell_for_digit(key: &str) -> Option<u8> {
    match key {
        "1" => Some(1),
        "2" => Some(2),
        "3" => Some(3),
        "4" => Some(4),
        "5" => Some(5),
        "6" => Some(6),
        "7" => Some(7),
        "8" => Some(8),
        "9" => Some(9),
        _ => None,
    }
}

/// Viewport-percent target of a numpad cell.
#[inline]
pub fn magnet_target_pct(cell: u8) -> Vec2 {
    let i = cell.clamp(1, 9) - 1;
    let col = (i % 3) as f32;
    let row = (2 - i / 3) as f32;
    Vec2::new(25.0 + 25.0 * col, 25.0 + 25.0 * row)
}

/// Keyboard-driven input consumed by the simulator.
///
/// `add`, `mul`, `magnet_pct` and `invert_drift` live for a single tick and are
/// reset by [`KeyboardImpulse::consume`]. Paddles, their visibility timer and
/// the orbit flag persist.
#[derive(Clone, Debug)]
pub struct KeyboardImpulse {
    pub add: Vec2,
    pub mul: Vec2,
    pub magnet_pct: Option<Vec2>,
    pub invert_drift: bool,
    pub orbit: bool,
    pub paddles: SmallVec<[Paddle; 4]>,
    pub paddle_timer_ms: f32,
}

impl Default for KeyboardImpulse {
    fn default() -> Self {
        Self {
            add: Vec2::ZERO,
            mul: Vec2::ONE,
            magnet_pct: None,
            invert_drift: false,
            orbit: false,
            paddles: smallvec![Paddle::at_percent(0.0, 50.0), Paddle::at_percent(100.0, 50.0)],
            paddle_timer_ms: 0.0,
        }
    }
}

impl KeyboardImpulse {
    #[inline]
    pub fn paddles_active(&self) -> bool {
        self.paddle_timer_ms > 0.0 && !self.paddles.is_empty()
    }

    /// Folds one command into the pending impulse. Returns false for commands
    /// that are not impulses (freeze, ring) so the caller can handle them.
    pub fn apply(&mut self, command: KeyCommand) -> bool {
        match command {
            KeyCommand::Nudge(delta) => self.add += delta,
            KeyCommand::Boost => self.mul *= BOOST_FACTOR,
            KeyCommand::Brake => self.mul *= BRAKE_FACTOR,
            KeyCommand::Magnet(cell) => self.magnet_pct = Some(magnet_target_pct(cell)),
            KeyCommand::InvertDrift => self.invert_drift = !self.invert_drift,
            KeyCommand::ToggleOrbit => {
                self.orbit = !self.orbit;
                log::info!("[keys] orbit={}", self.orbit);
            }
            KeyCommand::MovePaddle(side, step) => self.move_paddle(side, step),
            KeyCommand::ToggleFreeze | KeyCommand::ToggleRing => return false,
        }
        true
    }

    fn move_paddle(&mut self, side: PaddleSide, step_pct: f32) {
        let wall = match side {
            PaddleSide::Left => Wall::Left,
            PaddleSide::Right => Wall::Right,
        };
        if let Some(p) = self.paddles.iter_mut().find(|p| p.wall() == wall) {
            p.center_pct.y = (p.center_pct.y + step_pct).clamp(0.0, 100.0);
        }
        self.paddle_timer_ms = PADDLE_VISIBLE_MS;
    }

    /// Resets the one-tick fields and runs down the paddle timer.
    pub fn consume(&mut self, dt_ms: f32) {
        self.add = Vec2::ZERO;
        self.mul = Vec2::ONE;
        self.magnet_pct = None;
        self.invert_drift = false;
        self.paddle_timer_ms = (self.paddle_timer_ms - dt_ms).max(0.0);
    }
}
