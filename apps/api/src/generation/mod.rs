//! Recipe generation: prompt construction, the model output schema, and the
//! endpoint handler.

pub mod handlers;
pub mod models;
pub mod prompts;
