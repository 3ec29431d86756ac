pub mod fallback_bank;
pub mod notes_prompt;
pub mod quiz_prompt;
