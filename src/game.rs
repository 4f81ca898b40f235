use std::time::Duration;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::EngineConfig;
use crate::input::{Direction, DirectionBuffer, GameInput};
use crate::placement::{place_food, place_obstacles};
use crate::snake::{Position, Snake};
use crate::snapshot::Snapshot;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Idle,
    Running,
    GameOver,
}

/// What ended the session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
    ObstacleCollision,
}

/// Explicit board layout, used to resume from a known position.
#[derive(Debug, Clone)]
pub struct Layout {
    pub snake: Snake,
    pub direction: Direction,
    pub food: Option<Position>,
    pub obstacles: Vec<Position>,
}

/// State owned by one session; replaced wholesale on every reset.
#[derive(Debug, Clone)]
struct Session {
    snake: Snake,
    direction: DirectionBuffer,
    food: Option<Position>,
    obstacles: Vec<Position>,
    score: u32,
    speed_ms: u64,
    tick_count: u64,
    status: GameStatus,
    death_reason: Option<DeathReason>,
}

impl Session {
    fn fresh(config: &EngineConfig, rng: &mut StdRng, status: GameStatus) -> Self {
        let bounds = config.grid_size;
        let snake = Snake::new(Position::center(bounds));
        let obstacles = place_obstacles(rng, bounds, &snake, config.obstacle_count);
        let food = place_food(rng, bounds, &snake, &obstacles);

        Self::from_layout(
            config,
            Layout {
                snake,
                direction: Direction::Right,
                food,
                obstacles,
            },
            status,
        )
    }

    fn from_layout(config: &EngineConfig, layout: Layout, status: GameStatus) -> Self {
        Self {
            snake: layout.snake,
            direction: DirectionBuffer::new(layout.direction),
            food: layout.food,
            obstacles: layout.obstacles,
            score: 0,
            speed_ms: config.initial_speed_ms,
            tick_count: 0,
            status,
            death_reason: None,
        }
    }
}

/// Discrete-time snake simulation.
///
/// Input only touches the direction buffer; [`Engine::tick`] is the single
/// place where the board changes.
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    rng: StdRng,
    session: Session,
}

impl Engine {
    /// Creates an idle engine seeded from OS entropy.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic idle engine for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(config: EngineConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Creates a running engine from an explicit layout.
    ///
    /// Score, speed and tick count start from their initial values.
    #[must_use]
    pub fn from_layout(config: EngineConfig, seed: u64, layout: Layout) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
            session: Session::from_layout(&config, layout, GameStatus::Running),
        }
    }

    fn with_rng(config: EngineConfig, mut rng: StdRng) -> Self {
        debug_assert!(config.validate().is_ok(), "engine config must be validated");
        let session = Session::fresh(&config, &mut rng, GameStatus::Idle);

        Self {
            config,
            rng,
            session,
        }
    }

    /// Idle → Running. Ignored while a session is already running.
    pub fn start(&mut self) -> Snapshot {
        if self.session.status != GameStatus::Running {
            self.reset();
        }
        self.snapshot()
    }

    /// GameOver → Running. Same reset as [`Engine::start`].
    pub fn restart(&mut self) -> Snapshot {
        self.start()
    }

    fn reset(&mut self) {
        self.session = Session::fresh(&self.config, &mut self.rng, GameStatus::Running);
        info!(
            "session started: food {:?}, {} obstacles",
            self.session.food,
            self.session.obstacles.len()
        );
    }

    /// Buffers a direction for the next tick.
    ///
    /// Ignored unless running or when it reverses the committed direction.
    /// Returns whether the request was accepted.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if self.session.status != GameStatus::Running {
            return false;
        }

        self.session.direction.request(direction)
    }

    /// Applies one external input event.
    ///
    /// `Confirm` starts or restarts a session; `Quit` is left to the host.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => {
                let _ = self.request_direction(direction);
            }
            GameInput::Confirm => {
                let _ = self.start();
            }
            GameInput::Quit => {}
        }
    }

    /// Advances the simulation by one tick and returns the resulting snapshot.
    ///
    /// Does nothing outside [`GameStatus::Running`].
    pub fn tick(&mut self) -> Snapshot {
        if self.session.status == GameStatus::Running {
            self.step();
        }
        self.snapshot()
    }

    fn step(&mut self) {
        let bounds = self.config.grid_size;
        let session = &mut self.session;
        session.tick_count += 1;

        let direction = session.direction.commit();
        let new_head = session.snake.head().stepped(direction);

        // The tail still counts as occupied even though it may move away.
        let collision = if !new_head.is_within_bounds(bounds) {
            Some(DeathReason::WallCollision)
        } else if session.snake.occupies(new_head) {
            Some(DeathReason::SelfCollision)
        } else if session.obstacles.contains(&new_head) {
            Some(DeathReason::ObstacleCollision)
        } else {
            None
        };

        if let Some(reason) = collision {
            session.status = GameStatus::GameOver;
            session.death_reason = Some(reason);
            info!(
                "game over after {} ticks: {reason:?} at {new_head:?}, score {}",
                session.tick_count, session.score
            );
            return;
        }

        session.snake.push_head(new_head);

        if session.food == Some(new_head) {
            session.score += 1;
            session.speed_ms = session
                .speed_ms
                .saturating_sub(self.config.speed_step_ms)
                .max(self.config.min_speed_ms);
            session.food = place_food(&mut self.rng, bounds, &session.snake, &session.obstacles);
            debug!(
                "food eaten at {new_head:?}: score {}, speed {} ms, next food {:?}",
                session.score, session.speed_ms, session.food
            );
        } else {
            let _ = session.snake.pop_tail();
        }
    }

    /// Returns an owned copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let session = &self.session;
        Snapshot {
            grid_size: self.config.grid_size,
            snake: session.snake.segments().copied().collect(),
            food: session.food,
            obstacles: session.obstacles.clone(),
            score: session.score,
            speed: self.speed(),
            direction: session.direction.committed(),
            status: session.status,
            death_reason: session.death_reason,
            tick_count: session.tick_count,
        }
    }

    /// Current tick interval.
    #[must_use]
    pub fn speed(&self) -> Duration {
        Duration::from_millis(self.session.speed_ms)
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.session.status
    }
}
