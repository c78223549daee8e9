use glam::Vec2;

use crate::contact::{Contact, ContactKind};
use crate::court::Aabb;
use crate::Config;

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub player_id: u8, // 0 = left, 1 = right
    pub pos: Vec2,     // Top-left corner
    pub vel: Vec2,
}

impl Paddle {
    pub fn new(player_id: u8, pos: Vec2) -> Self {
        Self {
            player_id,
            pos,
            vel: Vec2::ZERO,
        }
    }

    /// Integrate position, then clamp so the paddle box stays fully inside
    /// the vertical court bounds.
    pub fn update(&mut self, dt: f32, config: &Config) {
        self.pos += self.vel * dt;
        self.pos.y = config.clamp_paddle_y(self.pos.y);
    }

    /// Bounding box, derived on demand (never cached)
    pub fn aabb(&self, config: &Config) -> Aabb {
        Aabb::from_top_left(self.pos, Vec2::new(config.paddle_width, config.paddle_height))
    }
}

/// Ball component - the pong ball
///
/// Horizontal speed magnitude is always exactly `config.ball_speed` (only
/// the sign flips); vertical speed is 0 or +/- `config.deflect_speed()`.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // Top-left corner
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Integrate position. The ball is never clamped; walls and paddles
    /// push it back via contacts.
    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Bounding box, derived on demand (never cached)
    pub fn aabb(&self, config: &Config) -> Aabb {
        Aabb::from_top_left(self.pos, Vec2::new(config.ball_width, config.ball_height))
    }

    /// Apply a paddle contact: push out along x, reflect horizontally, and
    /// deflect vertically by which third of the paddle was struck. A
    /// Middle hit leaves the vertical velocity untouched.
    pub fn collide_with_paddle(&mut self, contact: &Contact, config: &Config) {
        self.pos.x += contact.penetration;
        self.vel.x = -self.vel.x;

        match contact.kind {
            ContactKind::Top => self.vel.y = -config.deflect_speed(),
            ContactKind::Bottom => self.vel.y = config.deflect_speed(),
            _ => {}
        }
    }

    /// Apply a wall contact: Top/Bottom bounce off the court edge;
    /// Left/Right re-serve from the center toward the side that conceded.
    /// The respawn velocity is a fixed diagonal, independent of the
    /// velocity the ball arrived with.
    pub fn collide_with_wall(&mut self, contact: &Contact, config: &Config) {
        match contact.kind {
            ContactKind::Top | ContactKind::Bottom => {
                self.pos.y += contact.penetration;
                self.vel.y = -self.vel.y;
            }
            ContactKind::Left => {
                self.pos = config.court_center();
                self.vel = Vec2::new(config.ball_speed, config.deflect_speed());
            }
            ContactKind::Right => {
                self.pos = config.court_center();
                self.vel = Vec2::new(-config.ball_speed, config.deflect_speed());
            }
            ContactKind::Middle => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_clamps_to_court() {
        let config = Config::new();
        let mut paddle = Paddle::new(0, Vec2::new(50.0, 360.0));

        paddle.vel.y = -config.paddle_speed;
        paddle.update(10_000.0, &config);
        assert_eq!(paddle.pos.y, 0.0, "Paddle should stop at the top edge");

        paddle.vel.y = config.paddle_speed;
        paddle.update(10_000.0, &config);
        assert_eq!(
            paddle.pos.y,
            config.court_height - config.paddle_height,
            "Paddle should stop at the bottom edge"
        );
    }

    #[test]
    fn test_paddle_clamp_invariant_holds_for_any_velocity() {
        let config = Config::new();
        for vy in [-5.0, -1.0, -0.25, 0.0, 0.25, 1.0, 5.0] {
            let mut paddle = Paddle::new(0, Vec2::new(50.0, 360.0));
            paddle.vel.y = vy;
            for _ in 0..50 {
                paddle.update(17.0, &config);
                assert!(
                    paddle.pos.y >= 0.0
                        && paddle.pos.y <= config.court_height - config.paddle_height,
                    "Paddle left the court at vy={}, y={}",
                    vy,
                    paddle.pos.y
                );
            }
        }
    }

    #[test]
    fn test_ball_integrates_without_clamp() {
        let mut ball = Ball::new(Vec2::new(640.0, 360.0), Vec2::new(0.75, -0.5625));
        ball.update(1000.0);
        assert_eq!(ball.pos, Vec2::new(1390.0, -202.5), "Ball may leave the court");
    }

    #[test]
    fn test_paddle_hit_always_flips_horizontal_velocity() {
        let config = Config::new();
        for kind in [ContactKind::Top, ContactKind::Middle, ContactKind::Bottom] {
            let mut ball = Ball::new(Vec2::new(55.0, 300.0), Vec2::new(-0.75, 0.0));
            ball.collide_with_paddle(&Contact::new(kind, 5.0), &config);
            assert_eq!(ball.vel.x, 0.75, "vel.x should flip for {:?}", kind);
        }
    }

    #[test]
    fn test_paddle_hit_deflects_by_zone() {
        let config = Config::new();
        let deflect = config.deflect_speed();

        let mut ball = Ball::new(Vec2::new(55.0, 300.0), Vec2::new(-0.75, deflect));
        ball.collide_with_paddle(&Contact::new(ContactKind::Top, 5.0), &config);
        assert_eq!(ball.vel.y, -deflect, "Top hit deflects upward");

        let mut ball = Ball::new(Vec2::new(55.0, 300.0), Vec2::new(-0.75, -deflect));
        ball.collide_with_paddle(&Contact::new(ContactKind::Bottom, 5.0), &config);
        assert_eq!(ball.vel.y, deflect, "Bottom hit deflects downward");

        let mut ball = Ball::new(Vec2::new(55.0, 300.0), Vec2::new(-0.75, -deflect));
        ball.collide_with_paddle(&Contact::new(ContactKind::Middle, 5.0), &config);
        assert_eq!(ball.vel.y, -deflect, "Middle hit leaves vel.y unchanged");
    }

    #[test]
    fn test_paddle_hit_applies_penetration_push() {
        let config = Config::new();
        let mut ball = Ball::new(Vec2::new(55.0, 300.0), Vec2::new(-0.75, 0.0));
        ball.collide_with_paddle(&Contact::new(ContactKind::Middle, 5.0), &config);
        assert_eq!(ball.pos.x, 60.0, "Ball should be pushed out of the paddle");
    }

    #[test]
    fn test_wall_bounce_reflects_vertical_velocity() {
        let config = Config::new();
        let mut ball = Ball::new(Vec2::new(640.0, -4.0), Vec2::new(0.75, -0.5625));
        ball.collide_with_wall(&Contact::new(ContactKind::Top, 4.0), &config);
        assert_eq!(ball.pos.y, 0.0, "Ball pushed back below the top edge");
        assert_eq!(ball.vel.y, 0.5625, "vel.y reflected");
        assert_eq!(ball.vel.x, 0.75, "vel.x unchanged by a wall bounce");
    }

    #[test]
    fn test_scoring_wall_respawns_with_fixed_serve() {
        let config = Config::new();

        let mut ball = Ball::new(Vec2::new(-3.0, 100.0), Vec2::new(-0.75, -0.5625));
        ball.collide_with_wall(&Contact::new(ContactKind::Left, 0.0), &config);
        assert_eq!(ball.pos, config.court_center(), "Ball recentered");
        assert_eq!(
            ball.vel,
            Vec2::new(config.ball_speed, config.deflect_speed()),
            "Serve toward the right player"
        );

        let mut ball = Ball::new(Vec2::new(1290.0, 100.0), Vec2::new(0.75, 0.5625));
        ball.collide_with_wall(&Contact::new(ContactKind::Right, 0.0), &config);
        assert_eq!(ball.pos, config.court_center(), "Ball recentered");
        assert_eq!(
            ball.vel,
            Vec2::new(-config.ball_speed, config.deflect_speed()),
            "Serve toward the left player"
        );
    }
}
