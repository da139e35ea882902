//! Game session - ties the grid, the queue, the controller and scoring together
//!
//! A session is driven by two inputs: player commands through
//! [`GameSession::apply`] and elapsed time through [`GameSession::tick`].
//! Gravity accumulates tick time and lets the piece fall once the interval
//! is reached; a piece that cannot fall locks, full rows clear, the score
//! updates and the next piece spawns. A spawn that does not fit ends the game.

use blockfall_types::{Cell, Command, Point};

use crate::config::{ConfigError, RotationPolicy, SessionConfig, SpawnSource};
use crate::events::SessionEvent;
use crate::grid::{Grid, GridSnapshot};
use crate::piece::{try_fall, try_move, try_rotate, ActivePiece};
use crate::rng::{PieceQueue, QueueEntry, SimpleRng};
use crate::scoring::{clear_full_rows, lock_piece, Scoreboard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    GameOver,
}

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Gravity interval not reached yet, or the game is over
    Idle,
    /// The active piece moved down one row
    Fell,
    /// The active piece locked and the next one spawned
    Locked { rows_cleared: usize },
    /// The active piece locked and the next one did not fit
    GameOver,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    config: SessionConfig,
    grid: Grid,
    active: Option<ActivePiece>,
    /// None when pieces are drawn inline
    queue: Option<PieceQueue>,
    rng: SimpleRng,
    scoreboard: Scoreboard,
    state: SessionState,
    soft_drop: bool,
    gravity_timer_ms: u32,
    events: Vec<SessionEvent>,
}

impl GameSession {
    /// Start a session: seed garbage rows, fill the queue, spawn the first piece.
    ///
    /// The session may already be over if the garbage blocks the spawn cells.
    pub fn new(config: SessionConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = SimpleRng::new(seed);
        let mut grid = Grid::new(config.columns, config.rows);
        seed_garbage(&mut grid, config.effective_garbage_height(), &mut rng);
        Ok(Self::start(config, grid, rng))
    }

    /// Start a session on a prepared field instead of random garbage.
    pub fn with_grid(
        config: SessionConfig,
        seed: u32,
        field: GridSnapshot,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut grid = Grid::new(config.columns, config.rows);
        if field.columns() != config.columns || field.rows() != config.rows {
            return Err(ConfigError::FieldSize {
                expected: (config.columns, config.rows),
                got: (field.columns(), field.rows()),
            });
        }
        grid.replace(field);
        Ok(Self::start(config, grid, SimpleRng::new(seed)))
    }

    fn start(config: SessionConfig, grid: Grid, mut rng: SimpleRng) -> Self {
        let queue = match config.spawn {
            SpawnSource::Queue => Some(PieceQueue::new(config.queue_depth, &mut rng)),
            SpawnSource::Inline => None,
        };

        let mut session = Self {
            config,
            grid,
            active: None,
            queue,
            rng,
            scoreboard: Scoreboard::default(),
            state: SessionState::Running,
            soft_drop: false,
            gravity_timer_ms: 0,
            events: Vec::new(),
        };
        session.spawn_next();
        session
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state == SessionState::GameOver
    }

    pub fn score(&self) -> u32 {
        self.scoreboard.score()
    }

    pub fn lines(&self) -> u32 {
        self.scoreboard.lines()
    }

    /// The current grid, including the active piece's colored cells
    pub fn grid(&self) -> &GridSnapshot {
        self.grid.current()
    }

    pub fn snapshot(&self) -> GridSnapshot {
        self.grid.snapshot()
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    /// Upcoming pieces, next first. Empty when pieces are drawn inline.
    pub fn upcoming(&self) -> Vec<QueueEntry> {
        match &self.queue {
            Some(queue) => queue.preview().copied().collect(),
            None => Vec::new(),
        }
    }

    pub fn is_soft_dropping(&self) -> bool {
        self.soft_drop
    }

    /// Current gravity interval
    pub fn gravity_interval_ms(&self) -> u32 {
        if self.soft_drop {
            self.config.fast_speed_ms
        } else {
            self.config.normal_speed_ms
        }
    }

    /// Drain the events recorded since the last call.
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Apply one player command. Returns whether it changed anything.
    ///
    /// Commands are ignored once the game is over. Moves and rotations are
    /// validated against the grid and dropped when invalid; none of them
    /// lock the piece. A hard drop falls as far as possible and the piece
    /// locks on the next gravity step.
    pub fn apply(&mut self, command: Command) -> bool {
        if self.is_game_over() {
            return false;
        }

        match command {
            Command::SoftDropStart => {
                let changed = !self.soft_drop;
                self.soft_drop = true;
                return changed;
            }
            Command::SoftDropEnd => {
                let changed = self.soft_drop;
                self.soft_drop = false;
                return changed;
            }
            _ => {}
        }

        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        let grid = &mut self.grid;
        let policy: RotationPolicy = self.config.rotation;

        match command {
            Command::MoveLeft => try_move(grid, piece, -1),
            Command::MoveRight => try_move(grid, piece, 1),
            Command::RotateCw => try_rotate(grid, piece, 1, policy),
            Command::RotateCcw => try_rotate(grid, piece, -1, policy),
            Command::HardDrop => {
                let mut moved = false;
                while try_fall(grid, piece) {
                    moved = true;
                }
                moved
            }
            Command::SoftDropStart | Command::SoftDropEnd => false,
        }
    }

    /// Advance time by `elapsed_ms`.
    pub fn tick(&mut self, elapsed_ms: u32) -> TickOutcome {
        if self.is_game_over() {
            return TickOutcome::Idle;
        }

        self.gravity_timer_ms = self.gravity_timer_ms.saturating_add(elapsed_ms);
        if self.gravity_timer_ms < self.gravity_interval_ms() {
            return TickOutcome::Idle;
        }
        self.gravity_timer_ms = 0;

        let Some(piece) = self.active.as_mut() else {
            return TickOutcome::Idle;
        };
        if try_fall(&mut self.grid, piece) {
            return TickOutcome::Fell;
        }

        self.lock_active()
    }

    fn lock_active(&mut self) -> TickOutcome {
        let Some(piece) = self.active.take() else {
            return TickOutcome::Idle;
        };

        lock_piece(&mut self.grid, &piece);
        self.events.push(SessionEvent::Locked {
            kind: piece.kind,
            cells: *piece.cells(),
        });

        let rows = clear_full_rows(&mut self.grid);
        let rows_cleared = rows.len();
        if rows_cleared > 0 {
            let points = self.scoreboard.record_clear(rows_cleared);
            self.events.push(SessionEvent::LinesCleared {
                rows,
                points,
                score: self.scoreboard.score(),
                lines: self.scoreboard.lines(),
            });
        }

        if self.spawn_next() {
            TickOutcome::Locked { rows_cleared }
        } else {
            TickOutcome::GameOver
        }
    }

    fn spawn_next(&mut self) -> bool {
        let entry = match &mut self.queue {
            Some(queue) => queue.draw(&mut self.rng),
            None => QueueEntry::random(&mut self.rng),
        };

        match ActivePiece::spawn(&mut self.grid, entry.kind, entry.color) {
            Some(piece) => {
                self.active = Some(piece);
                self.events.push(SessionEvent::Spawned {
                    kind: entry.kind,
                    color: entry.color,
                });
                true
            }
            None => {
                self.active = None;
                self.state = SessionState::GameOver;
                self.events.push(SessionEvent::GameOver {
                    score: self.scoreboard.score(),
                    lines: self.scoreboard.lines(),
                });
                false
            }
        }
    }
}

/// Fill the bottom `height` rows with random dropped cells. The last column
/// stays empty so no garbage row starts out full.
pub fn seed_garbage(grid: &mut Grid, height: u16, rng: &mut SimpleRng) {
    if height == 0 {
        return;
    }

    let mut next = grid.snapshot();
    let rows = i32::from(grid.rows());
    let columns = i32::from(grid.columns());

    for y in rows - i32::from(height)..rows {
        for x in 0..columns - 1 {
            if rng.next_bool() {
                next.set(Point::new(x, y), Cell::Dropped);
            }
        }
    }
    grid.replace(next);
}
