//! crates/trivia_core/src/listing.rs
//!
//! Pagination and text search over question listings.

use crate::domain::{Page, Question};

/// Default number of questions served per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Slices `items` into the 1-based page `page` of `per_page` items.
///
/// Page 0 is served as page 1. A page past the end yields no items.
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> Page<T> {
    let number = page.max(1);
    let per_page = per_page.max(1);
    let total = items.len();
    let start = (number - 1).saturating_mul(per_page);

    let items = items.into_iter().skip(start).take(per_page).collect();
    Page {
        items,
        number,
        total,
    }
}

/// Keeps the questions whose text contains `term`, ignoring case.
pub fn search(questions: Vec<Question>, term: &str) -> Vec<Question> {
    let needle = term.to_lowercase();
    questions
        .into_iter()
        .filter(|q| q.question.to_lowercase().contains(&needle))
        .collect()
}
