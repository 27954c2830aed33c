// Tuning constants shared by the pure effect modules.

// Scroll showcase
pub const ANIMATION_END: f32 = 0.85; // fraction of scroll travel at which the animation completes
pub const SHOWCASE_SCALE_MIN: f32 = 0.5;
pub const SHOWCASE_SCALE_SPAN: f32 = 2.0;
pub const SHOWCASE_ROTATE_MAX_DEG: f32 = 90.0;
pub const TEXT_REVEAL_THRESHOLD: f32 = 0.6; // strictly greater reveals
pub const TEXT_HIDDEN_OFFSET_PX: f32 = 20.0;

// Cube scroll
pub const CUBE_FULL_TURN_VIEWPORTS: f32 = 1.5; // viewport heights per full rotation
pub const SCENE_FADE_RATE: f32 = 2.0;

// Particle field
pub const PARTICLE_COUNT: usize = 25;
pub const MAX_PARTICLE_COUNT: usize = 400; // pairwise links are O(n^2) per frame
pub const INTERACTION_RADIUS: f32 = 300.0;
pub const REPEL_RADIUS: f32 = 150.0;
pub const LINK_RADIUS: f32 = 120.0;
pub const AMBIENT_SPEED: f32 = 0.1; // velocity components drawn from ±this
pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
pub const PARTICLE_RADIUS_SPAN: f32 = 2.0;
pub const REPEL_PUSH: f32 = 0.1; // velocity change per frame inside the repel radius
pub const MAX_SPEED: f32 = 3.0; // cap applied after repulsion
pub const TOUCH_RAMP_UP: f32 = 0.05; // intensity gained per frame while touching
pub const TOUCH_DECAY: f32 = 0.02; // intensity lost per frame after release

// Particle field drawing
pub const PARTICLE_RGB: [u8; 3] = [139, 92, 246];
pub const PARTICLE_ALPHA: f32 = 0.5;
pub const LINK_ALPHA_SCALE: f32 = 0.5;
pub const LINK_LINE_WIDTH: f32 = 0.8;
pub const POINTER_LINE_WIDTH: f32 = 2.0; // scaled by intensity

// Text scramble
pub const SCRAMBLE_GLYPHS: &str = "!<>-_\\/[]{}—=+*^?#________";
pub const SCRAMBLE_MAX_START: u32 = 40;
pub const SCRAMBLE_MAX_SPAN: u32 = 40;
pub const SCRAMBLE_REFRESH_PROBABILITY: f64 = 0.28;

// Tilt cards
pub const TILT_MAX_DEG: f32 = 10.0;
pub const TILT_PERSPECTIVE_PX: f32 = 1000.0;
pub const TILT_RESET_TRANSFORM: &str = "perspective(1000px) rotateX(0deg) rotateY(0deg)";

// Cursor and orbs
pub const CURSOR_OUTLINE_TAU_SEC: f32 = 0.5 / 3.0; // exponential follow, settles in ~0.5 s
pub const ORB_PARALLAX_DIVISOR: f32 = 100.0; // px of pointer travel per px of orb travel
