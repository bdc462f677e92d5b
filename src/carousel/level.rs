//! Level arithmetic: where each item sits relative to the active one.
//!
//! A level is the signed distance `active - item`, folded once around the
//! ends of the ring. Positive levels sit on one side of the centre, negative
//! on the other; the stylesheet keys off the `level{n}` class names.

use std::fmt;

/// Fold bound. Raw distances beyond ±2 wrap by the item count once.
pub const MAX_LEVEL: i64 = 2;

/// Every level class a display update may leave behind.
pub const LEVEL_CLASSES: &[&str] = &["level0", "level1", "level2", "level-2", "level-1"];

/// Enter/leave marker classes. Always cleared, never applied.
pub const TRANSITION_CLASSES: &[&str] = &[
    "left-enter",
    "left-enter-active",
    "left-leave",
    "left-leave-active",
    "right-enter",
    "right-enter-active",
    "right-leave",
    "right-leave-active",
];

/// Signed distance of an item from the active item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(pub i64);

impl Level {
    pub fn value(self) -> i64 {
        self.0
    }

    /// `level0`, `level1`, `level-2`, ...
    pub fn class_name(self) -> String {
        format!("level{}", self.0)
    }

    pub fn is_center(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction of the move that triggered a display update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Level of `item_index` when `active_index` is centred in a ring of `total` items.
///
/// The fold is applied once, so for rings much larger than five the result can
/// fall outside `-2..=2`.
pub fn calculate_level(item_index: usize, active_index: usize, total: usize) -> Level {
    let total = total as i64;
    let mut level = active_index as i64 - item_index as i64;
    if level > MAX_LEVEL {
        level -= total;
    } else if level < -MAX_LEVEL {
        level += total;
    }
    Level(level)
}

/// Items leaving and entering the centre after a move in `direction`.
///
/// Returns `(leave, enter)`. `total` must be non-zero.
pub fn transition_indices(direction: Direction, active_index: usize, total: usize) -> (usize, usize) {
    let (a, n) = (active_index, total);
    match direction {
        Direction::Right => ((a + n - 1) % n, (a + 2) % n),
        Direction::Left => ((a + 1) % n, (a + 2 * n - 2) % n),
    }
}
