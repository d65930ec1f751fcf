//! Game session - the input controller state machine
//!
//! A [`GameSession`] owns the grid and the game status. Pointer events come in
//! as device-pixel coordinates; the session maps them to cells, runs the
//! reveal engine and decides whether the game is over.
//!
//! End-of-game notifications are not returned directly. They are queued with a
//! short delay ([`NOTIFY_DELAY_MS`]) so the final board can be drawn before
//! the message appears, and are collected with [`GameSession::poll_notification`].

use tracing::{debug, info, warn};

use crate::config::BoardConfig;
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::reveal::reveal;
use crate::rng::BombRng;
use crate::schedule::DeferredQueue;
use crate::types::{GameStatus, Outcome, PointerEvent, PointerKind, Pos, NOTIFY_DELAY_MS};

/// One game, from the first frame until the process exits.
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    status: GameStatus,
    device_pixel_ratio: f32,
    notifications: DeferredQueue<Outcome>,
}

impl GameSession {
    /// Generate a fresh board for `config`.
    pub fn new(
        config: &BoardConfig,
        device_pixel_ratio: f32,
        rng: &mut BombRng,
    ) -> Result<Self, ConfigError> {
        let grid = Grid::generate(config, rng)?;
        info!(seed = rng.seed(), bombs = config.bombs, "new game");
        Self::from_grid(grid, device_pixel_ratio)
    }

    /// Start a game on an existing grid.
    pub fn from_grid(grid: Grid, device_pixel_ratio: f32) -> Result<Self, ConfigError> {
        if !device_pixel_ratio.is_finite() || device_pixel_ratio <= 0.0 {
            return Err(ConfigError::InvalidPixelRatio(device_pixel_ratio));
        }
        Ok(Self {
            grid,
            status: GameStatus::Playing,
            device_pixel_ratio,
            notifications: DeferredQueue::new(),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn device_pixel_ratio(&self) -> f32 {
        self.device_pixel_ratio
    }

    /// Cell under a device-pixel coordinate, `None` off the grid.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<Pos> {
        self.grid
            .pos_at(x / self.device_pixel_ratio, y / self.device_pixel_ratio)
    }

    /// Dispatch a pointer event.
    ///
    /// Returns the new status if this event ended the game.
    pub fn handle_pointer(&mut self, event: PointerEvent, now_ms: u64) -> Option<GameStatus> {
        match event.kind {
            PointerKind::Down => self.pointer_down(event.x, event.y, now_ms),
            PointerKind::Move => {
                self.pointer_move(event.x, event.y);
                None
            }
        }
    }

    /// Pointer press on the canvas.
    ///
    /// Ignored once the game is over or when the point is off the grid.
    /// Returns the new status if this press ended the game.
    pub fn pointer_down(&mut self, x: f32, y: f32, now_ms: u64) -> Option<GameStatus> {
        if self.is_game_over() {
            return None;
        }
        if !x.is_finite() || !y.is_finite() {
            warn!(x, y, "ignoring non-finite pointer coordinates");
            return None;
        }
        let pos = self.cell_at(x, y)?;
        let newly_shown = reveal(&mut self.grid, pos);
        debug!(row = pos.row, col = pos.col, newly_shown, "pointer down");

        let hit_bomb = self.grid.get(pos).is_some_and(|c| c.is_bomb());
        let outcome = if hit_bomb {
            Outcome::Lost
        } else if self.grid.is_win() {
            Outcome::Won
        } else {
            return None;
        };

        self.status = GameStatus::GameOver(outcome);
        self.notifications.schedule(now_ms, NOTIFY_DELAY_MS, outcome);
        info!(?outcome, row = pos.row, col = pos.col, "game over");
        Some(self.status)
    }

    /// Pointer movement over the canvas.
    ///
    /// Only resolves the hovered cell; the game state is not affected.
    pub fn pointer_move(&self, x: f32, y: f32) -> Option<Pos> {
        self.cell_at(x, y)
    }

    /// The end-of-game notification, once its delay has elapsed.
    ///
    /// Yields at most one notification per game.
    pub fn poll_notification(&mut self, now_ms: u64) -> Option<Outcome> {
        self.notifications.pop_due(now_ms)
    }

    /// Due time of the pending notification, if any.
    pub fn next_notification_ms(&self) -> Option<u64> {
        self.notifications.next_due()
    }
}
