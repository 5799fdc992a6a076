//! Review session state machine.
//!
//! One session is a single pass over a fixed queue of card snapshots:
//! reveal the answer, grade it, move on. The machine is pure — it never
//! talks to the backend. Callers submit the verdict to the grading
//! endpoint first and invoke [`ReviewSession::record_grade`] only once
//! the server has accepted it, so a failed request leaves the session
//! exactly where it was.

use crate::error::{Result, SessionError};
use crate::types::{Difficulty, Flashcard, SessionTally};

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Active,
    Complete,
}

/// Backward navigation target. There is deliberately no forward skip:
/// advancing past a card only happens by grading it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigateTarget {
    Prev,
    First,
}

/// What a recorded grade did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeOutcome {
    /// Cursor moved to the next card.
    Advanced,
    /// That was the last card; the session is complete.
    Completed,
}

/// State machine driving one study session.
///
/// Invariant: `cursor < queue.len()` while `Active`. The queue is fixed
/// at start (no reshuffling) and cleared on completion; the tally
/// survives completion for summary display.
#[derive(Debug, Clone)]
pub struct ReviewSession {
    phase: SessionPhase,
    queue: Vec<Flashcard>,
    cursor: usize,
    revealed: bool,
    tally: SessionTally,
}

impl Default for ReviewSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewSession {
    /// Create an idle session with no cards.
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::Idle,
            queue: Vec::new(),
            cursor: 0,
            revealed: false,
            tally: SessionTally::default(),
        }
    }

    /// Start a fresh session over `cards`.
    ///
    /// Resets the cursor, reveal flag, and tally. An empty card list is
    /// not an error: the session goes straight to `Complete` with a
    /// zero tally.
    pub fn start(&mut self, cards: Vec<Flashcard>) {
        self.queue = cards;
        self.cursor = 0;
        self.revealed = false;
        self.tally = SessionTally::default();
        self.phase = if self.queue.is_empty() {
            SessionPhase::Complete
        } else {
            SessionPhase::Active
        };
    }

    /// Show the answer face of the current card. Idempotent.
    pub fn reveal(&mut self) -> Result<()> {
        if self.phase != SessionPhase::Active {
            return Err(SessionError::NotActive);
        }
        self.revealed = true;
        Ok(())
    }

    /// Record a grading decision the backend has already accepted.
    ///
    /// Rejected while the answer is still hidden. On the last card the
    /// queue is cleared and the session completes; the tally is kept.
    pub fn record_grade(&mut self, difficulty: Difficulty) -> Result<GradeOutcome> {
        if self.phase != SessionPhase::Active {
            return Err(SessionError::NotActive);
        }
        if !self.revealed {
            return Err(SessionError::AnswerHidden);
        }

        self.tally.record(difficulty);

        if self.cursor + 1 < self.queue.len() {
            self.cursor += 1;
            self.revealed = false;
            Ok(GradeOutcome::Advanced)
        } else {
            self.queue.clear();
            self.cursor = 0;
            self.revealed = false;
            self.phase = SessionPhase::Complete;
            Ok(GradeOutcome::Completed)
        }
    }

    /// Move the cursor backward. `Prev` at the first card is a no-op.
    /// Any navigation hides the answer again.
    pub fn navigate(&mut self, target: NavigateTarget) -> Result<()> {
        if self.phase != SessionPhase::Active {
            return Err(SessionError::NotActive);
        }
        match target {
            NavigateTarget::Prev => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
            }
            NavigateTarget::First => self.cursor = 0,
        }
        self.revealed = false;
        Ok(())
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The card under the cursor, if the session is active.
    pub fn current(&self) -> Option<&Flashcard> {
        if self.phase == SessionPhase::Active {
            self.queue.get(self.cursor)
        } else {
            None
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn tally(&self) -> &SessionTally {
        &self.tally
    }

    /// Cards not yet graded, including the current one.
    pub fn remaining(&self) -> usize {
        self.queue.len().saturating_sub(self.cursor)
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }
}
