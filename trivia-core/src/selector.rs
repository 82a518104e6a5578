//! Quiz question selection.
//!
//! Picks one question the player has not been served yet from a candidate
//! pool, or reports that the pool is exhausted. Exhaustion is decided by
//! count alone: once the session history is at least as long as the pool,
//! the round is over even if some candidate ids never appeared in it.

use std::collections::HashSet;

use rand::Rng;

use crate::domain::{Question, QuestionId};
use crate::error::{CoreError, Result};

/// Result of one selection round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    /// An unseen question from the pool.
    Next(Question),
    /// Nothing left to serve in this pool.
    Exhausted,
}

impl QuizOutcome {
    pub fn into_question(self) -> Option<Question> {
        match self {
            QuizOutcome::Next(question) => Some(question),
            QuizOutcome::Exhausted => None,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, QuizOutcome::Exhausted)
    }
}

/// Select a question from `candidates` whose id is not in `previous`.
///
/// `previous` is the raw session history; its length (duplicates included)
/// is compared to the pool size for the exhaustion test. Returns
/// [`CoreError::NoCandidates`] for an empty pool.
pub fn select_question<R>(
    candidates: &[Question],
    previous: &[QuestionId],
    rng: &mut R,
) -> Result<QuizOutcome>
where
    R: Rng,
{
    if candidates.is_empty() {
        return Err(CoreError::NoCandidates);
    }

    if previous.len() >= candidates.len() {
        return Ok(QuizOutcome::Exhausted);
    }

    let seen: HashSet<QuestionId> = previous.iter().copied().collect();

    // At least one candidate is unseen here, so this terminates with probability 1.
    loop {
        let candidate = &candidates[rng.gen_range(0..candidates.len())];
        if !seen.contains(&candidate.id) {
            return Ok(QuizOutcome::Next(candidate.clone()));
        }
    }
}
