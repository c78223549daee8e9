//! Native shell for the Pong simulation.
//!
//! Owns the window, keyboard state, rectangle rendering, the score HUD and
//! frame timing; every game rule lives in `game_core`. Each frame feeds the
//! previous frame's measured duration (in milliseconds) into the simulation
//! step, then draws whatever the world contains.

use ggez::conf;
use ggez::event::{self, EventHandler, KeyCode, KeyMods};
use ggez::graphics::{self, DrawMode, DrawParam, Mesh, MeshBuilder, Rect};
use ggez::nalgebra as na;
use ggez::timer;
use ggez::{Context, ContextBuilder, GameResult};
use hecs::World;
use log::info;

use game_core::{
    create_ball, create_paddle, step, Ball, Config, Events, InputState, Paddle, Params, Score,
    Time,
};

mod hud;
use hud::ScoreDisplay;

type Point2 = na::Point2<f32>;

struct MainState {
    world: World,
    config: Config,
    time: Time,
    score: Score,
    events: Events,
    input: InputState,
    paddle_mesh: Mesh,
    ball_mesh: Mesh,
    net_mesh: Mesh,
    left_score: ScoreDisplay,
    right_score: ScoreDisplay,
}

impl MainState {
    fn new(ctx: &mut Context) -> GameResult<MainState> {
        let config = Config::new();

        let mut world = World::new();
        create_paddle(&mut world, &config, 0);
        create_paddle(&mut world, &config, 1);
        create_ball(&mut world, &config);

        let paddle_mesh = Mesh::new_rectangle(
            ctx,
            DrawMode::fill(),
            Rect::new(0.0, 0.0, config.paddle_width, config.paddle_height),
            graphics::WHITE,
        )?;
        let ball_mesh = Mesh::new_rectangle(
            ctx,
            DrawMode::fill(),
            Rect::new(0.0, 0.0, config.ball_width, config.ball_height),
            graphics::WHITE,
        )?;
        let net_mesh = build_net_mesh(ctx, &config)?;

        let left_score = ScoreDisplay::new(Point2::new(config.court_width / 4.0, 20.0));
        let right_score = ScoreDisplay::new(Point2::new(3.0 * config.court_width / 4.0, 20.0));

        Ok(MainState {
            world,
            config,
            time: Time::default(),
            score: Score::new(),
            events: Events::new(),
            input: InputState::new(),
            paddle_mesh,
            ball_mesh,
            net_mesh,
            left_score,
            right_score,
        })
    }
}

/// Dashed center divider: four pixels on, one off, down the middle column
fn build_net_mesh(ctx: &mut Context, config: &Config) -> GameResult<Mesh> {
    let mut builder = MeshBuilder::new();
    let x = config.court_width / 2.0;
    let mut y = 0.0;
    while y < config.court_height {
        builder.rectangle(
            DrawMode::fill(),
            Rect::new(x, y + 1.0, 1.0, 4.0),
            graphics::WHITE,
        );
        y += 5.0;
    }
    builder.build(ctx)
}

impl EventHandler for MainState {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        // Variable-step: dt is the previous frame's wall-clock duration
        self.time.dt = timer::delta(ctx).as_secs_f32() * 1000.0;

        step(
            &mut self.world,
            &mut self.time,
            &self.input,
            &self.config,
            &mut self.score,
            &mut self.events,
        );

        if self.events.left_scored {
            info!("left player scores: {}-{}", self.score.left, self.score.right);
            self.left_score.set_score(self.score.left);
        }
        if self.events.right_scored {
            info!("right player scores: {}-{}", self.score.left, self.score.right);
            self.right_score.set_score(self.score.right);
        }

        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        graphics::clear(ctx, graphics::BLACK);

        graphics::draw(ctx, &self.net_mesh, DrawParam::default())?;

        for (_entity, paddle) in self.world.query::<&Paddle>().iter() {
            let dest = Point2::new(paddle.pos.x, paddle.pos.y);
            graphics::draw(ctx, &self.paddle_mesh, DrawParam::new().dest(dest))?;
        }

        for (_entity, ball) in self.world.query::<&Ball>().iter() {
            let dest = Point2::new(ball.pos.x, ball.pos.y);
            graphics::draw(ctx, &self.ball_mesh, DrawParam::new().dest(dest))?;
        }

        self.left_score.draw(ctx)?;
        self.right_score.draw(ctx)?;

        graphics::present(ctx)?;
        timer::yield_now();
        Ok(())
    }

    fn key_down_event(
        &mut self,
        ctx: &mut Context,
        keycode: KeyCode,
        _keymod: KeyMods,
        _repeat: bool,
    ) {
        match keycode {
            KeyCode::W => self.input.paddle_one_up = true,
            KeyCode::S => self.input.paddle_one_down = true,
            KeyCode::Up => self.input.paddle_two_up = true,
            KeyCode::Down => self.input.paddle_two_down = true,
            KeyCode::Escape => event::quit(ctx),
            _ => (),
        }
    }

    fn key_up_event(&mut self, _ctx: &mut Context, keycode: KeyCode, _keymod: KeyMods) {
        match keycode {
            KeyCode::W => self.input.paddle_one_up = false,
            KeyCode::S => self.input.paddle_one_down = false,
            KeyCode::Up => self.input.paddle_two_up = false,
            KeyCode::Down => self.input.paddle_two_down = false,
            _ => (),
        }
    }
}

pub fn main() -> GameResult {
    env_logger::init();

    let cb = ContextBuilder::new("pong", "game_core")
        .window_setup(conf::WindowSetup::default().title("Pong"))
        .window_mode(
            conf::WindowMode::default().dimensions(Params::COURT_WIDTH, Params::COURT_HEIGHT),
        );

    let (ctx, events_loop) = &mut cb.build()?;
    info!(
        "window created ({}x{})",
        Params::COURT_WIDTH,
        Params::COURT_HEIGHT
    );

    let state = &mut MainState::new(ctx)?;
    event::run(ctx, events_loop, state)
}
