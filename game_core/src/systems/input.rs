use hecs::World;

use crate::{Config, InputState, Paddle};

/// Map the pressed controls to paddle vertical velocity.
///
/// Down is checked first and overrides up when both are held; with neither
/// held the paddle stops.
pub fn apply_inputs(world: &mut World, input: &InputState, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        let (up, down) = input.controls(paddle.player_id);

        paddle.vel.y = if down {
            config.paddle_speed
        } else if up {
            -config.paddle_speed
        } else {
            0.0
        };
    }
}
