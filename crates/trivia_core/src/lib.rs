pub mod domain;
pub mod listing;
pub mod ports;
pub mod quiz;

pub use domain::{Category, NewQuestion, Page, Question, ValidationError};
pub use listing::{paginate, search, QUESTIONS_PER_PAGE};
pub use ports::{PortError, PortResult, QuestionStore};
pub use quiz::{select_question, QuizOutcome, QuizTarget};
