/// Time resource for tracking simulation time
///
/// Both fields are in milliseconds. `dt` is the measured duration of the
/// previous frame, not a fixed tick.
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self { dt: 0.0, now: 0.0 }
    }
}

/// Game score tracking
///
/// A match is a single endless rally; the counters only ever grow.
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub left: u32,  // Left player score
    pub right: u32, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }
}

/// Events that occurred during this frame
///
/// Cleared at the start of every step; the score flags are the display
/// collaborator's cue to rebuild its text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }
}

/// Pressed/released state of the four paddle controls
///
/// The shell translates key events into these booleans; the quit signal
/// never reaches the simulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub paddle_one_up: bool,
    pub paddle_one_down: bool,
    pub paddle_two_up: bool,
    pub paddle_two_down: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// (up, down) pair for the given paddle
    pub fn controls(&self, player_id: u8) -> (bool, bool) {
        if player_id == 0 {
            (self.paddle_one_up, self.paddle_one_down)
        } else {
            (self.paddle_two_up, self.paddle_two_down)
        }
    }
}
