pub mod errors;
pub mod forms;
pub mod models;
pub mod services;
pub mod validation;
