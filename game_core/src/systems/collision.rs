use hecs::World;
use log::{debug, info};

use crate::{Ball, Config, Contact, ContactKind, Events, Paddle, Score};

/// Check the ball against one paddle.
///
/// Returns `None` unless the boxes overlap on both axes (half-open
/// comparisons: touching edges do not collide). On overlap the penetration
/// is taken from the horizontal velocity direction alone; a ball with zero
/// horizontal velocity gets a zero push. The contact kind records which
/// vertical third of the paddle the ball's bottom edge landed in.
pub fn check_paddle_collision(ball: &Ball, paddle: &Paddle, config: &Config) -> Option<Contact> {
    let b = ball.aabb(config);
    let p = paddle.aabb(config);

    if b.min.x >= p.max.x {
        return None;
    }
    if b.max.x <= p.min.x {
        return None;
    }
    if b.min.y >= p.max.y {
        return None;
    }
    if b.max.y <= p.min.y {
        return None;
    }

    let range_upper = p.max.y - 2.0 * config.paddle_height / 3.0;
    let range_middle = p.max.y - config.paddle_height / 3.0;

    let mut penetration = 0.0;
    if ball.vel.x < 0.0 {
        // Moving left: push rightward, out of the paddle's right edge
        penetration = p.max.x - b.min.x;
    } else if ball.vel.x > 0.0 {
        // Moving right: push leftward (negative by construction)
        penetration = p.min.x - b.max.x;
    }

    let kind = if b.max.y > p.min.y && b.max.y < range_upper {
        ContactKind::Top
    } else if b.max.y > range_upper && b.max.y < range_middle {
        ContactKind::Middle
    } else {
        ContactKind::Bottom
    };

    Some(Contact::new(kind, penetration))
}

/// Check the ball against the court boundary.
///
/// A mutually exclusive chain; the first matching edge wins, so a corner
/// overshoot reports only the earlier edge. Left/Right are the scoring
/// walls and carry no penetration; Top/Bottom carry the signed overshoot
/// needed to push the ball back inside.
pub fn check_wall_collision(ball: &Ball, config: &Config) -> Option<Contact> {
    let b = ball.aabb(config);

    if b.min.x < 0.0 {
        Some(Contact::new(ContactKind::Left, 0.0))
    } else if b.max.x > config.court_width {
        Some(Contact::new(ContactKind::Right, 0.0))
    } else if b.min.y < 0.0 {
        Some(Contact::new(ContactKind::Top, -b.min.y))
    } else if b.max.y > config.court_height {
        Some(Contact::new(ContactKind::Bottom, config.court_height - b.max.y))
    } else {
        None
    }
}

/// Evaluate contacts in strict priority order - paddle one, paddle two,
/// then the walls - and resolve only the first one found. At most one
/// resolution happens per frame; a contact shadowed by an earlier one is
/// simply not seen until the next frame.
pub fn resolve_collisions(world: &mut World, config: &Config, score: &mut Score, events: &mut Events) {
    // Snapshot paddles in player order before taking the ball mutably
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| paddle.player_id);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let paddle_contact = paddles
            .iter()
            .find_map(|paddle| check_paddle_collision(ball, paddle, config));

        if let Some(contact) = paddle_contact {
            debug!("paddle contact: {:?}", contact);
            ball.collide_with_paddle(&contact, config);
            events.ball_hit_paddle = true;
        } else if let Some(contact) = check_wall_collision(ball, config) {
            ball.collide_with_wall(&contact, config);
            match contact.kind {
                ContactKind::Left => {
                    score.increment_right();
                    events.right_scored = true;
                    info!("point to the right player: {}-{}", score.left, score.right);
                }
                ContactKind::Right => {
                    score.increment_left();
                    events.left_scored = true;
                    info!("point to the left player: {}-{}", score.left, score.right);
                }
                _ => {
                    debug!("wall contact: {:?}", contact);
                    events.ball_hit_wall = true;
                }
            }
        }
    }
}
