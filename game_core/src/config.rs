use glam::Vec2;

/// Game tuning parameters for Pong
///
/// Speeds are in pixels per millisecond; the frame clock hands `step` a dt
/// in milliseconds.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court
    pub const COURT_WIDTH: f32 = 1280.0;
    pub const COURT_HEIGHT: f32 = 720.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 1.0;
    pub const PADDLE_MARGIN: f32 = 50.0;

    // Ball
    pub const BALL_WIDTH: f32 = 15.0;
    pub const BALL_HEIGHT: f32 = 15.0;
    pub const BALL_SPEED: f32 = 0.75;

    // Vertical deflection is this fraction of BALL_SPEED (three-valued
    // model: 0 or +/- this times BALL_SPEED)
    pub const DEFLECT_FACTOR: f32 = 0.75;
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub court_width: f32,
    pub court_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_margin: f32,
    pub ball_width: f32,
    pub ball_height: f32,
    pub ball_speed: f32,
    pub deflect_factor: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            court_width: Params::COURT_WIDTH,
            court_height: Params::COURT_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_width: Params::BALL_WIDTH,
            ball_height: Params::BALL_HEIGHT,
            ball_speed: Params::BALL_SPEED,
            deflect_factor: Params::DEFLECT_FACTOR,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position for paddle based on player ID
    pub fn paddle_x(&self, player_id: u8) -> f32 {
        if player_id == 0 {
            self.paddle_margin // Left paddle
        } else {
            self.court_width - self.paddle_margin // Right paddle
        }
    }

    /// Clamp paddle Y so the paddle box stays fully inside the court
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.court_height - self.paddle_height)
    }

    /// Court midpoint, where the ball spawns and respawns
    pub fn court_center(&self) -> Vec2 {
        Vec2::new(self.court_width / 2.0, self.court_height / 2.0)
    }

    /// Vertical speed applied on Top/Bottom paddle deflections
    pub fn deflect_speed(&self) -> f32 {
        self.deflect_factor * self.ball_speed
    }
}
