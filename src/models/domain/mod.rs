pub mod candidate;
pub mod concept;
pub mod difficulty;
pub mod quiz_question;

pub use candidate::{Candidate, CandidateSource, PatternKind, Rejection};
pub use concept::Concept;
pub use difficulty::Difficulty;
pub use quiz_question::{letter_to_index, QuizQuestion};
