pub mod fallback_service;
pub mod generation_registry;
pub mod mcq_parser;
pub mod model_service;
pub mod notes_service;
pub mod orchestrator_steps;
pub mod performance_service;
pub mod quiz_service;
