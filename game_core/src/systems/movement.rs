use hecs::World;

use crate::{Ball, Config, Paddle, Time};

/// Integrate paddle positions; each paddle re-clamps itself to the court
pub fn move_paddles(world: &mut World, time: &Time, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.update(time.dt, config);
    }
}

/// Integrate the ball position (no clamp)
pub fn move_ball(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.update(time.dt);
    }
}
