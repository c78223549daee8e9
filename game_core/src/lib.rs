pub mod components;
pub mod config;
pub mod contact;
pub mod court;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use contact::*;
pub use court::*;
pub use resources::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Advance the Pong simulation by one frame.
///
/// Fixed pipeline: clear events, apply input to paddle velocities,
/// integrate paddles, integrate the ball, then resolve at most one contact
/// (paddle one, paddle two, walls, in that order). `time.dt` is whatever
/// the previous frame measured - it is fed in unclamped, so a long stall
/// can step the ball straight through an obstacle; the next frame's checks
/// see only where it landed.
pub fn step(
    world: &mut World,
    time: &mut Time,
    input: &InputState,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) {
    events.clear();

    // 1. Map pressed controls to paddle velocities
    apply_inputs(world, input, config);

    // 2. Move paddles (clamped to the court)
    move_paddles(world, time, config);

    // 3. Move ball
    move_ball(world, time);

    // 4. Resolve the frame's first contact, scoring on Left/Right walls
    resolve_collisions(world, config, score, events);

    time.now += time.dt;
}

/// Helper to create a paddle entity at its serve position
pub fn create_paddle(world: &mut World, config: &Config, player_id: u8) -> hecs::Entity {
    let pos = Vec2::new(config.paddle_x(player_id), config.court_height / 2.0);
    world.spawn((Paddle::new(player_id, pos),))
}

/// Helper to create the ball entity, serving toward the right player
pub fn create_ball(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((Ball::new(
        config.court_center(),
        Vec2::new(config.ball_speed, 0.0),
    ),))
}
