use crate::core::models::User;

/// Ordered backing collection behind `UserService`.
///
/// Misses are reported through `Option`/`bool` rather than errors: the
/// service decides whether a miss is worth a notification.
pub trait Storage {
    fn get_user(&self, user_id: u32) -> Option<User>;
    fn list_users(&self) -> Vec<User>;
    fn count_users(&self) -> usize;
    fn insert_user(&mut self, user: User);
    /// Replaces the record with the same id. Returns `false` when no record matched.
    fn replace_user(&mut self, user: User) -> bool;
    /// Removes the first record with `user_id`, returning it.
    fn remove_user(&mut self, user_id: u32) -> Option<User>;
}

pub mod in_memory;
