pub mod keyboard;
pub mod lifecycle;
pub mod pointer;

pub use keyboard::wire_keyboard;
pub use lifecycle::{wire_persistence, wire_resize};
pub use pointer::wire_pointer;
