//! services/api/src/adapters/memory.rs
//!
//! An in-process implementation of the `QuestionStore` port. Nothing survives a
//! restart; it backs the test suite and `STORE_BACKEND=memory`.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use trivia_core::domain::{Category, NewQuestion, Question};
use trivia_core::ports::{PortError, PortResult, QuestionStore};

/// The categories the initial migration seeds, in id order starting at 1.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

struct Tables {
    categories: BTreeMap<i32, Category>,
    questions: BTreeMap<i32, Question>,
    next_question_id: i32,
}

pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// A store holding the default categories and no questions.
    pub fn new() -> Self {
        let categories = DEFAULT_CATEGORIES
            .iter()
            .zip(1..)
            .map(|(kind, id)| {
                (
                    id,
                    Category {
                        id,
                        kind: kind.to_string(),
                    },
                )
            })
            .collect();

        Self {
            tables: RwLock::new(Tables {
                categories,
                questions: BTreeMap::new(),
                next_question_id: 1,
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuestionStore for MemoryStore {
    async fn list_categories(&self) -> PortResult<Vec<Category>> {
        let tables = self.tables.read().await;
        Ok(tables.categories.values().cloned().collect())
    }

    async fn get_category(&self, category_id: i32) -> PortResult<Category> {
        let tables = self.tables.read().await;
        tables
            .categories
            .get(&category_id)
            .cloned()
            .ok_or_else(|| PortError::NotFound(format!("Category {} not found", category_id)))
    }

    async fn list_questions(&self) -> PortResult<Vec<Question>> {
        let tables = self.tables.read().await;
        Ok(tables.questions.values().cloned().collect())
    }

    async fn list_questions_by_category(&self, category_id: i32) -> PortResult<Vec<Question>> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| q.category == category_id)
            .cloned()
            .collect())
    }

    async fn get_question(&self, question_id: i32) -> PortResult<Question> {
        let tables = self.tables.read().await;
        tables
            .questions
            .get(&question_id)
            .cloned()
            .ok_or_else(|| PortError::NotFound(format!("Question {} not found", question_id)))
    }

    async fn create_question(&self, question: NewQuestion) -> PortResult<Question> {
        let mut tables = self.tables.write().await;
        // Mirrors the foreign key on questions.category.
        if !tables.categories.contains_key(&question.category()) {
            return Err(PortError::Unexpected(format!(
                "Category {} does not exist",
                question.category()
            )));
        }
        let id = tables.next_question_id;
        tables.next_question_id += 1;

        let question = question.into_question(id);
        tables.questions.insert(id, question.clone());
        Ok(question)
    }

    async fn delete_question(&self, question_id: i32) -> PortResult<()> {
        let mut tables = self.tables.write().await;
        tables
            .questions
            .remove(&question_id)
            .map(|_| ())
            .ok_or_else(|| PortError::NotFound(format!("Question {} not found", question_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_question(text: &str, category: i32) -> NewQuestion {
        NewQuestion::new(text, "an answer", category, 2).unwrap()
    }

    #[tokio::test]
    async fn seeds_default_categories() {
        let store = MemoryStore::new();
        let categories = store.list_categories().await.unwrap();
        assert_eq!(categories.len(), 6);
        assert_eq!(categories[1].id, 2);
        assert_eq!(categories[1].kind, "Art");
        assert!(matches!(
            store.get_category(7).await,
            Err(PortError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let store = MemoryStore::new();
        let first = store.create_question(new_question("first?", 1)).await.unwrap();
        let second = store.create_question(new_question("second?", 2)).await.unwrap();
        assert_eq!((first.id, second.id), (1, 2));
        assert_eq!(store.get_question(2).await.unwrap(), second);
    }

    #[tokio::test]
    async fn create_rejects_unknown_category() {
        let store = MemoryStore::new();
        assert!(store.create_question(new_question("q?", 42)).await.is_err());
        assert!(store.list_questions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn filters_by_category() {
        let store = MemoryStore::new();
        store.create_question(new_question("a?", 1)).await.unwrap();
        store.create_question(new_question("b?", 2)).await.unwrap();
        store.create_question(new_question("c?", 2)).await.unwrap();

        let ids: Vec<i32> = store
            .list_questions_by_category(2)
            .await
            .unwrap()
            .iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let store = MemoryStore::new();
        let q = store.create_question(new_question("gone?", 3)).await.unwrap();

        store.delete_question(q.id).await.unwrap();
        assert!(matches!(store.get_question(q.id).await, Err(PortError::NotFound(_))));
        assert!(matches!(store.delete_question(q.id).await, Err(PortError::NotFound(_))));
    }
}
