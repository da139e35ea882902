//! Session configuration
//!
//! Defaults describe the revised engine: 20x10 grid, edge-correcting rotation
//! and a five-deep piece queue. The older engine's behavior is available
//! through [`RotationPolicy::Reject`] and [`SpawnSource::Inline`].

use thiserror::Error;

use blockfall_types::{
    DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_SPEED_MS, FAST_SPEED_MS, QUEUE_MIN_DEPTH,
};

/// Smallest grid that fits every spawn geometry at the center pivot.
pub const MIN_COLUMNS: u16 = 5;
pub const MIN_ROWS: u16 = 2;

/// Largest grid a session accepts.
pub const MAX_COLUMNS: u16 = 255;
pub const MAX_ROWS: u16 = 255;
pub const MAX_QUEUE_DEPTH: usize = 64;

/// How a rotation that pokes out of the side walls is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationPolicy {
    /// Shift all four candidate cells back inside by the largest overrun.
    #[default]
    EdgeCorrect,
    /// Refuse the rotation.
    Reject,
}

/// Where the next piece comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpawnSource {
    /// Front of the lookahead queue.
    #[default]
    Queue,
    /// Drawn from the RNG at spawn time.
    Inline,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid needs at least {min} columns, got {0}", min = MIN_COLUMNS)]
    TooFewColumns(u16),
    #[error("grid needs at least {min} rows, got {0}", min = MIN_ROWS)]
    TooFewRows(u16),
    #[error("grid allows at most {max} columns, got {0}", max = MAX_COLUMNS)]
    TooManyColumns(u16),
    #[error("grid allows at most {max} rows, got {0}", max = MAX_ROWS)]
    TooManyRows(u16),
    #[error("{name} must be greater than zero")]
    ZeroInterval { name: &'static str },
    #[error("queue depth must be at least 1")]
    EmptyQueue,
    #[error("queue depth allows at most {max}, got {0}", max = MAX_QUEUE_DEPTH)]
    QueueTooDeep(usize),
    #[error("field is {}x{}, session expects {}x{}", got.0, got.1, expected.0, expected.1)]
    FieldSize {
        expected: (u16, u16),
        got: (u16, u16),
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub rows: u16,
    pub columns: u16,
    /// Bottom rows pre-seeded with random garbage. Clamped to `rows`.
    pub garbage_height: u16,
    /// Gravity interval
    pub normal_speed_ms: u32,
    /// Gravity interval while soft drop is held
    pub fast_speed_ms: u32,
    pub rotation: RotationPolicy,
    pub spawn: SpawnSource,
    pub queue_depth: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            garbage_height: 0,
            normal_speed_ms: DEFAULT_SPEED_MS,
            fast_speed_ms: FAST_SPEED_MS,
            rotation: RotationPolicy::default(),
            spawn: SpawnSource::default(),
            queue_depth: QUEUE_MIN_DEPTH,
        }
    }
}

impl SessionConfig {
    pub fn with_garbage_height(mut self, height: u16) -> Self {
        self.garbage_height = height;
        self
    }

    pub fn with_size(mut self, columns: u16, rows: u16) -> Self {
        self.columns = columns;
        self.rows = rows;
        self
    }

    /// Garbage rows actually seeded
    pub fn effective_garbage_height(&self) -> u16 {
        self.garbage_height.min(self.rows)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns < MIN_COLUMNS {
            return Err(ConfigError::TooFewColumns(self.columns));
        }
        if self.rows < MIN_ROWS {
            return Err(ConfigError::TooFewRows(self.rows));
        }
        if self.columns > MAX_COLUMNS {
            return Err(ConfigError::TooManyColumns(self.columns));
        }
        if self.rows > MAX_ROWS {
            return Err(ConfigError::TooManyRows(self.rows));
        }
        if self.normal_speed_ms == 0 {
            return Err(ConfigError::ZeroInterval {
                name: "normal_speed_ms",
            });
        }
        if self.fast_speed_ms == 0 {
            return Err(ConfigError::ZeroInterval {
                name: "fast_speed_ms",
            });
        }
        if self.queue_depth == 0 {
            return Err(ConfigError::EmptyQueue);
        }
        if self.queue_depth > MAX_QUEUE_DEPTH {
            return Err(ConfigError::QueueTooDeep(self.queue_depth));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SessionConfig::default();
        assert_eq!(config.rows, 20);
        assert_eq!(config.columns, 10);
        assert_eq!(config.queue_depth, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_grids_too_small_to_spawn() {
        let config = SessionConfig::default().with_size(4, 20);
        assert_eq!(config.validate(), Err(ConfigError::TooFewColumns(4)));

        let config = SessionConfig::default().with_size(10, 1);
        assert_eq!(config.validate(), Err(ConfigError::TooFewRows(1)));
    }

    #[test]
    fn test_rejects_oversized_grids() {
        let config = SessionConfig::default().with_size(40000, 2);
        assert_eq!(config.validate(), Err(ConfigError::TooManyColumns(40000)));

        let config = SessionConfig::default().with_size(10, u16::MAX);
        assert_eq!(config.validate(), Err(ConfigError::TooManyRows(u16::MAX)));

        let config = SessionConfig::default().with_size(MAX_COLUMNS, MAX_ROWS);
        assert!(config.validate().is_ok());

        let config = SessionConfig {
            queue_depth: usize::MAX,
            ..SessionConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::QueueTooDeep(usize::MAX)));
    }

    #[test]
    fn test_garbage_height_is_clamped() {
        let config = SessionConfig::default().with_garbage_height(99);
        assert_eq!(config.effective_garbage_height(), 20);
    }

    #[test]
    fn test_error_messages() {
        let err = SessionConfig {
            fast_speed_ms: 0,
            ..SessionConfig::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.to_string(), "fast_speed_ms must be greater than zero");
    }
}
