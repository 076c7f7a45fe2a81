//! crates/trivia_core/src/quiz.rs
//!
//! Picks the next quiz question for a player.

use crate::domain::Question;
use rand::Rng;
use std::collections::HashSet;

/// Which questions a quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizTarget {
    All,
    Category(i32),
}

impl QuizTarget {
    /// Category id 0 is how clients ask for every category.
    pub fn from_category_id(id: Option<i32>) -> Self {
        match id {
            None | Some(0) => QuizTarget::All,
            Some(id) => QuizTarget::Category(id),
        }
    }

    fn includes(&self, question: &Question) -> bool {
        match self {
            QuizTarget::All => true,
            QuizTarget::Category(id) => question.category == *id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    Next(Question),
    /// No question of the target is left outside the seen set.
    Exhausted,
}

/// Draws uniformly among the `candidates` in `target` whose id is not in `seen`.
pub fn select_question<R: Rng + ?Sized>(
    candidates: Vec<Question>,
    target: QuizTarget,
    seen: &HashSet<i32>,
    rng: &mut R,
) -> QuizOutcome {
    let mut eligible: Vec<Question> = candidates
        .into_iter()
        .filter(|q| target.includes(q) && !seen.contains(&q.id))
        .collect();

    if eligible.is_empty() {
        return QuizOutcome::Exhausted;
    }
    let index = rng.gen_range(0..eligible.len());
    QuizOutcome::Next(eligible.swap_remove(index))
}
