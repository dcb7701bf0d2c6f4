// World dimensions (pixel units; the UI scales them to the terminal)
pub const SCREEN_WIDTH: u32 = 1200;
pub const SCREEN_HEIGHT: u32 = 800;

// Bird physics (per tick)
pub const GRAVITY: f64 = 0.5;
pub const FLAP_STRENGTH: f64 = -10.0;
pub const BIRD_SIZE: u32 = 40;
pub const BIRD_X: f64 = 100.0;

// Pipes
pub const PIPE_WIDTH: u32 = 70;
pub const PIPE_GAP: u32 = 200;
pub const PIPE_SPEED: f64 = 3.0;
pub const PIPE_SPACING: f64 = 300.0;
pub const PIPE_GAP_MARGIN: u32 = 150;
pub const FIRST_PIPE_OFFSET: f64 = 200.0;

// Frame rates
pub const PLAY_FPS: u32 = 60;
pub const MENU_FPS: u32 = 30;

// Gesture detection: wrist must be this far above the shoulder (normalised image units)
pub const RAISE_MARGIN: f32 = 0.1;

// Simulated pose: frames an arm raise is held after one key press
pub const SIM_RAISE_HOLD_FRAMES: u32 = 8;
