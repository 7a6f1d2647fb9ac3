// Task distiller: long prompt → concise task description.

pub mod distiller;
pub mod handlers;
pub mod prompts;
