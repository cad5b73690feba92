//! Observable transition state.

use std::fmt;

/// Progress the entering ticker climbs to before the midpoint.
pub const ENTERING_PROGRESS_CAP: u8 = 40;
/// Progress at the navigation midpoint.
pub const MIDPOINT_PROGRESS: u8 = 50;
/// Progress when the overlay starts exiting.
pub const EXIT_PROGRESS: u8 = 70;
/// Progress once the run's full duration has elapsed.
pub const FINISHED_PROGRESS: u8 = 100;

/// Direction the overlay slides in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Idle,
    Entering,
    Exiting,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Entering => "entering",
            Phase::Exiting => "exiting",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the single process-wide transition.
///
/// INVARIANT: `!is_transitioning` implies `phase == Idle && progress == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionState {
    pub is_transitioning: bool,
    pub direction: Direction,
    pub phase: Phase,
    /// 0..=100
    pub progress: u8,
}

impl TransitionState {
    pub const IDLE: TransitionState = TransitionState {
        is_transitioning: false,
        direction: Direction::Up,
        phase: Phase::Idle,
        progress: 0,
    };

    pub fn is_idle(&self) -> bool {
        *self == Self::IDLE
    }

    /// Whether the idle invariant holds (or the state is transitioning).
    pub fn is_consistent(&self) -> bool {
        self.progress <= FINISHED_PROGRESS
            && (self.is_transitioning || (self.phase == Phase::Idle && self.progress == 0))
    }
}

impl Default for TransitionState {
    fn default() -> Self {
        Self::IDLE
    }
}
