pub mod boundary;
pub mod constants;
pub mod engine;
pub mod error;
pub mod forces;
pub mod input;
pub mod keyboard;
pub mod links;
pub mod particle;
pub mod persist;
pub mod render;
pub mod scaling;
pub mod settings;
pub mod simulator;
pub mod store;

pub use engine::Starfield;
pub use error::StarfieldError;
pub use input::PointerState;
pub use keyboard::{command_for_key, KeyCommand, KeyboardImpulse, Paddle, PaddleSide, Wall};
pub use links::LinkBatches;
pub use particle::{Bounds, Particle};
pub use persist::{MemoryStorage, PersistedMeta, PersistedState, Storage};
pub use render::{Rgba, Surface};
pub use scaling::ScalingCoefficients;
pub use settings::{SettingKey, Settings};
pub use simulator::{SimState, Simulator, TickContext};
pub use store::ParticleStore;
