pub mod config;
pub mod constants;
pub mod core;
pub mod infrastructure;

pub use crate::core::errors::{FieldError, UserDeskError};
pub use crate::core::forms::{EditUserForm, FormState, Navigation, UserField};
pub use crate::core::models::{NewUser, User};
pub use crate::core::services::{IdStrategy, UserService};
pub use infrastructure::logging::in_memory::InMemoryAuditLogger;
pub use infrastructure::notify::ChangeStream;
pub use infrastructure::storage::in_memory::InMemoryStorage;

#[cfg(test)]
mod tests; // Include integration tests
