//! Score display: cached text per player, rebuilt on score changes

use ggez::graphics::{self, Font, Text};
use ggez::nalgebra as na;
use ggez::{Context, GameResult};

type Point2 = na::Point2<f32>;

const SCORE_SCALE: f32 = 40.0;

/// One player's score readout, anchored near a top quarter of the court.
///
/// The text is rendered once per score change, not per frame; the
/// simulation only ever says "score changed to N".
pub struct ScoreDisplay {
    anchor: Point2,
    font: Font,
    text: Text,
}

impl ScoreDisplay {
    pub fn new(anchor: Point2) -> Self {
        let font = Font::default();
        let text = Text::new(("0".to_string(), font, SCORE_SCALE));
        Self { anchor, font, text }
    }

    /// Re-render the cached text for the new score
    pub fn set_score(&mut self, score: u32) {
        self.text = Text::new((score.to_string(), self.font, SCORE_SCALE));
    }

    pub fn draw(&self, ctx: &mut Context) -> GameResult {
        graphics::draw(ctx, &self.text, (self.anchor, 0.0, graphics::WHITE))
    }
}
