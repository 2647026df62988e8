//! Page-transition state machine.
//!
//! A navigation produces a [`Sweep`]: a numbered run of timed [`Step`]s that
//! walks the overlay through `Idle -> Exit -> Enter -> Idle` and swaps the
//! displayed content while the overlay is mid-sweep. The caller owns the
//! timers; this module only decides what each step does.
//!
//! Every sweep carries a generation number. Starting a new sweep bumps the
//! generation, so steps still in flight from an older sweep are rejected by
//! [`TransitionCoordinator::apply`] and can never swap in stale content.

use crate::route::{Direction, direction_between};

/// Offsets (ms from the path change) at which each step of a sweep fires.
pub const SCHEDULE: [(u32, Step); 4] = [
    (0, Step::Exit),
    (10, Step::Enter),
    (400, Step::Swap),
    (800, Step::Settle),
];

/// Visual stage of the overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransitionStage {
    #[default]
    Idle,
    Exit,
    Enter,
}

/// A scheduled action within a sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Park the overlay on the entry side.
    Exit,
    /// Start the sweep across the viewport.
    Enter,
    /// Replace the displayed content with the pending path.
    Swap,
    /// Sweep finished; back to idle.
    Settle,
}

/// What caused a path change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationCause {
    /// Router push (intercepted link or programmatic navigation).
    Push,
    /// Browser back/forward.
    Pop,
}

/// Handle for one in-flight sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sweep {
    pub generation: u64,
    pub direction: Direction,
}

impl Sweep {
    /// Steps of this sweep with their delays, in firing order.
    pub fn schedule(&self) -> impl Iterator<Item = (u32, Step)> {
        SCHEDULE.into_iter()
    }
}

/// Overlay transform for a given direction and stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayFrame {
    /// Horizontal translation in percent of the viewport width.
    pub offset_percent: i32,
    /// Whether the move to this frame is animated.
    pub animated: bool,
}

impl OverlayFrame {
    /// CSS `transform` value for this frame.
    pub fn transform(&self) -> String {
        format!("translateX({}%)", self.offset_percent)
    }
}

/// Fixed lookup from `(direction, stage)` to the overlay position.
///
/// Idle and exit park the overlay off-screen on the side the sweep enters
/// from; enter moves it all the way to the opposite side.
pub fn overlay_frame(direction: Direction, stage: TransitionStage) -> OverlayFrame {
    let entry_side = match direction {
        Direction::Forward => 100,
        Direction::Backward => -100,
    };

    match stage {
        TransitionStage::Idle | TransitionStage::Exit => OverlayFrame {
            offset_percent: entry_side,
            animated: false,
        },
        TransitionStage::Enter => OverlayFrame {
            offset_percent: -entry_side,
            animated: true,
        },
    }
}

/// Transition table: stage reached by applying `step` in `stage`.
///
/// `None` means the step is not valid in that stage and is dropped.
fn next_stage(stage: TransitionStage, step: Step) -> Option<TransitionStage> {
    use TransitionStage::*;

    match (stage, step) {
        (_, Step::Exit) => Some(Exit),
        (Exit, Step::Enter) => Some(Enter),
        (Enter, Step::Swap) => Some(Enter),
        (Enter, Step::Settle) => Some(Idle),
        _ => None,
    }
}

/// Owner of the transition state.
#[derive(Clone, Debug)]
pub struct TransitionCoordinator {
    stage: TransitionStage,
    direction: Direction,
    generation: u64,
    previous_path: String,
    displayed_path: String,
    pending_path: Option<String>,
    history: Vec<String>,
}

impl TransitionCoordinator {
    /// Creates an idle coordinator showing `initial_path`.
    pub fn new(initial_path: impl Into<String>) -> Self {
        let path = initial_path.into();
        Self {
            stage: TransitionStage::Idle,
            direction: Direction::Forward,
            generation: 0,
            previous_path: path.clone(),
            displayed_path: path.clone(),
            pending_path: None,
            history: vec![path],
        }
    }

    pub fn stage(&self) -> TransitionStage {
        self.stage
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Path whose content is currently on screen.
    pub fn displayed_path(&self) -> &str {
        &self.displayed_path
    }

    /// Generation of the newest sweep.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Current overlay frame.
    pub fn frame(&self) -> OverlayFrame {
        overlay_frame(self.direction, self.stage)
    }

    /// Client-side history stack used to classify back/forward.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Reacts to the transition-start signal.
    ///
    /// Only an idle coordinator moves to `Exit`; returns whether it did.
    pub fn on_transition_start(&mut self) -> bool {
        if self.stage != TransitionStage::Idle {
            return false;
        }
        self.stage = TransitionStage::Exit;
        true
    }

    /// Reacts to a path change.
    ///
    /// Returns the sweep to schedule, or `None` when the path did not change.
    /// Any sweep already in flight is superseded.
    pub fn on_navigation(&mut self, path: &str, cause: NavigationCause) -> Option<Sweep> {
        if path == self.previous_path {
            return None;
        }

        self.direction = match cause {
            NavigationCause::Push => {
                if self.history.last().map(String::as_str) != Some(path) {
                    self.history.push(path.to_string());
                }
                direction_between(&self.previous_path, path)
            }
            NavigationCause::Pop => self.visit_from_history(path),
        };

        self.previous_path = path.to_string();
        self.pending_path = Some(path.to_string());
        self.generation += 1;

        Some(Sweep {
            generation: self.generation,
            direction: self.direction,
        })
    }

    /// Seen before: going back, truncate to it. New: going forward, append.
    fn visit_from_history(&mut self, path: &str) -> Direction {
        match self.history.iter().rposition(|p| p == path) {
            Some(index) => {
                self.history.truncate(index + 1);
                Direction::Backward
            }
            None => {
                self.history.push(path.to_string());
                Direction::Forward
            }
        }
    }

    /// Applies one step of sweep `generation`.
    ///
    /// Returns `false` for steps of superseded sweeps and for steps the
    /// transition table does not allow in the current stage.
    pub fn apply(&mut self, generation: u64, step: Step) -> bool {
        if generation != self.generation {
            return false;
        }

        let Some(stage) = next_stage(self.stage, step) else {
            return false;
        };

        if step == Step::Swap {
            match self.pending_path.take() {
                Some(path) => self.displayed_path = path,
                None => return false,
            }
        }

        self.stage = stage;
        true
    }

    /// Runs every step of `sweep` at once, for reduced-motion users.
    pub fn complete(&mut self, sweep: Sweep) {
        for (_, step) in sweep.schedule() {
            self.apply(sweep.generation, step);
        }
    }
}
