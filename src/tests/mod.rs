mod user_service_tests;

use crate::core::models::NewUser;
use crate::core::services::UserService;
use crate::infrastructure::logging::in_memory::InMemoryAuditLogger;
use crate::infrastructure::storage::in_memory::InMemoryStorage;

pub fn create_test_service() -> UserService<InMemoryStorage, InMemoryAuditLogger> {
    let _ = env_logger::try_init();
    UserService::seeded()
}

pub fn new_user(name: &str, email: &str, role: &str, password: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        password: password.to_string(),
    }
}
