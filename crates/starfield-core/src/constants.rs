// Shared simulation/render tuning constants for the starfield.

// Frame timing
pub const REFERENCE_FRAME_MS: f32 = 16.67; // one "tick" of the tuned formulas
pub const MAX_DT_FRAMES: f32 = 4.0; // cap after tab backgrounding

// Screen scaling
pub const SCREEN_PERIMETER_REF: f32 = 1200.0;
pub const SCREEN_PERIMETER_MAX: f32 = 4000.0;
pub const SCALE_EXPONENT: f32 = 0.35;
pub const STAR_COUNT_DIVISOR: f32 = 10.0;
pub const STAR_COUNT_MIN: usize = 150;
pub const STAR_COUNT_MAX: usize = 450;
pub const LINK_DISTANCE_BASE: f32 = 16.0;
pub const LINK_DISTANCE_EXPONENT: f32 = 6.5;
pub const ATTRACT_GRADIENT_EXPONENT: f32 = 1.0;
pub const REPEL_GRADIENT_EXPONENT: f32 = 0.9;
pub const ATTRACT_SHAPE_EXPONENT: f32 = 0.6;
pub const REPEL_SHAPE_EXPONENT: f32 = 0.5;
pub const ATTRACT_FORCE_EXPONENT: f32 = 1.2;
pub const REPEL_FORCE_EXPONENT: f32 = 1.1;
pub const CLAMP_SCALE_EXPONENT: f32 = 2.0;
pub const STAR_SIZE_MIN: f32 = 0.6;
pub const STAR_SIZE_MAX: f32 = 1.8;
pub const EDGE_FADE_DISTANCE: f32 = 40.0;

// Particle creation
pub const DRIFT_MAX: f32 = 0.25; // px per frame, per axis
pub const BALL_DRIFT: [f32; 2] = [0.25, 0.25]; // particle 0 in paddle mode
pub const OPACITY_MAX: f32 = 1.8;
pub const FADE_SPEED_MIN: f32 = 0.5;
pub const FADE_SPEED_MAX: f32 = 1.5;

// Pointer forces
pub const INFLUENCE_RANGE_FACTOR: f32 = 0.2; // of the screen perimeter
pub const DISTANCE_EPSILON: f32 = 1e-4;
pub const SHAPE_EXPONENT_MIN: f32 = 0.1;
pub const ATTRACT_RADIUS_K: f32 = 5.0;
pub const ATTRACT_SHAPE_K: f32 = 0.02;
pub const ATTRACT_STRENGTH_K: f32 = 0.005;
pub const REPEL_RADIUS_K: f32 = 3.0;
pub const REPEL_SHAPE_K: f32 = 0.02;
pub const REPEL_STRENGTH_K: f32 = 0.008;
pub const POKE_RADIUS_MULT: f32 = 2.0; // relative to the repulsion radius
pub const POKE_STRENGTH_K: f32 = 0.00008;
pub const PADDLE_POKE_EXPONENT: f32 = 2.0;
pub const ORBIT_TANGENT_RATIO: f32 = 0.8;
pub const DRIFT_BOOST_COEFF: f32 = 0.6;
pub const DRIFT_BOOST_CAP: f32 = 3.0;
pub const MAGNET_STRENGTH: f32 = 4.0; // one-tick pull per keypress
pub const CLAMP_K: f32 = 0.1;
pub const MOMENTUM_DAMPING: f32 = 0.98;

// Boundary handling
pub const WRAP_DISTANCE_SQ: f32 = 200.0;
pub const POKE_WRAP_THRESHOLD: f32 = 10.0;
pub const PADDLE_SPAN_FRACTION: f32 = 0.2; // of the wall length
pub const PADDLE_THICKNESS: f32 = 12.0; // px, screen scaled
pub const PADDLE_MAX_ANGLE: f32 = 1.25; // radians
pub const PADDLE_COOLDOWN_MS: f64 = 60.0;
pub const BALL_INDEX: usize = 0;

// Flash and twinkle
pub const WHITE_DECAY: f32 = 0.98;
pub const WHITE_SNAP: f32 = 1e-3;
pub const OPACITY_RESET_BELOW: f32 = 0.005;
pub const OPACITY_RESET_BASE: f32 = 1.0;
pub const OPACITY_RESET_SPAN: f32 = 0.8;
pub const FLASH_CHANCE: f64 = 0.08;
pub const OPACITY_TAIL_ABOVE: f32 = 0.2;
pub const OPACITY_FADE_RATE: f32 = 0.004;
pub const OPACITY_TAIL_RATE: f32 = 0.0003;

// Pointer state decay (per reference frame)
pub const SPEED_DECAY: f32 = 0.9;
pub const SPEED_SNAP: f32 = 1e-3;
pub const RING_DECAY: f32 = 0.95;
pub const RING_SNAP: f32 = 0.01;
pub const POKE_DECAY: f32 = 0.85;
pub const POKE_SNAP: f32 = 1.0;

// Pointer input
pub const EPOCH_TIMESTAMP_MIN: f64 = 1e12; // ms; smaller values are relative
pub const POINTER_SPEED_GAIN: f32 = 1.5;
pub const POINTER_SPEED_MAX: f32 = 10.0;
pub const POINTER_GAP_MAX_MS: f64 = 250.0;
pub const RING_PER_SPEED: f32 = 0.3;
pub const POKE_START: f32 = 2500.0;
pub const TAP_RING_BOOST: f32 = 2.0;
pub const RING_MAX: f32 = 4.0;
pub const TAP_SPEED: f32 = 2.0;

// Keyboard impulses
pub const NUDGE: f32 = 1.5;
pub const BOOST_FACTOR: f32 = 1.5;
pub const BRAKE_FACTOR: f32 = 0.5;
pub const PADDLE_STEP_PCT: f32 = 5.0;
pub const PADDLE_VISIBLE_MS: f32 = 5000.0;

// Links
pub const LINK_BUCKETS: usize = 18;
pub const LINK_WIDTH: f32 = 0.6;
pub const LINK_RGB: [u8; 3] = [170, 190, 255];

// Pointer ring
pub const RING_VISIBLE_MIN: f32 = 0.05;
pub const RING_BASE_RADIUS: f32 = 8.0;
pub const RING_GROWTH: f32 = 40.0;
pub const RING_ALPHA: f32 = 0.35;
pub const RING_RGB: [u8; 3] = [200, 220, 255];

// Star tint
pub const STAR_BASE_RGB: [u8; 3] = [180, 200, 255];
pub const STAR_RED_SPAN: f32 = 75.0;
pub const PADDLE_RGBA: [u8; 4] = [200, 220, 255, 180]; // alpha in 0..255
