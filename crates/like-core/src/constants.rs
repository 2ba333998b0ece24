use std::time::Duration;

// Shared tuning constants used by both web and native frontends.

// Button layout
pub const DEFAULT_BUTTON_SIZE: f32 = 40.0; // px, outer diameter
pub const HEART_SIZE_RATIO: f32 = 0.6; // heart glyph width relative to button size
pub const DEFAULT_CONFETTI_PIECES: i32 = 10;

// Confetti layout
pub const CONFETTI_ANGLE_STEP_DEG: u32 = 28;
pub const CONFETTI_DISTANCE_MIN_PX: f32 = 13.0;
pub const CONFETTI_DISTANCE_MAX_PX: f32 = 28.0; // exclusive
pub const CONFETTI_PIECE_PX: f32 = 4.0;

// Fixed palette, assigned to confetti by `index % len`
pub const PARTICLE_COLORS: [&str; 5] = ["#e53935", "#1e88e5", "#43a047", "#fdd835", "#fb8c00"];
pub const POPPING_CIRCLE_COLOR: &str = "#E790F7";
pub const LIKE_COLOR: &str = "#e0245e";
pub const RETWEET_COLOR: &str = "#17bf63";
pub const IDLE_ICON_COLOR: &str = "#657786";

// Spring defaults (stiffness/damping in 1/s^2 and 1/s with unit mass)
pub const SPRING_STIFFNESS: f32 = 200.0;
pub const SPRING_DAMPING: f32 = 12.0;
pub const SPRING_MASS: f32 = 1.0;
pub const SPRING_EPSILON: f32 = 1e-3;
pub const SPRING_SUBSTEP_SEC: f32 = 0.001;
pub const MAX_FRAME_DT_SEC: f32 = 0.064;

// Popping circle timing
pub const BURST_SCALE_DURATION: Duration = Duration::from_millis(300);
pub const BURST_FADE_DURATION: Duration = Duration::from_millis(500);
pub const BURST_SCALE_CURVE: [f32; 4] = [0.44, 0.11, 0.93, 0.72];
pub const EASE_IN_CURVE: [f32; 4] = [0.42, 0.0, 1.0, 1.0];
