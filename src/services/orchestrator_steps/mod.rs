pub mod quiz_steps;
