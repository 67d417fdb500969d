use crate::core::errors::UserDeskError;
use crate::core::models::{AuditAction, AuditLogEntry, NewUser, User};
use crate::infrastructure::logging::AuditLogger;
use crate::infrastructure::logging::in_memory::InMemoryAuditLogger;
use crate::infrastructure::notify::{ChangeFeed, ChangeStream};
use crate::infrastructure::storage::Storage;
use crate::infrastructure::storage::in_memory::InMemoryStorage;
use log::{debug, info, warn};
use serde_json::json;
use std::str::FromStr;

/// How `UserService::add_user` picks the id of a new record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IdStrategy {
    /// One past the highest id ever handed out. Ids are never reused.
    #[default]
    Monotonic,
    /// Current collection size plus one. Can reuse a live id once records
    /// have been deleted; collisions are logged but not prevented.
    CollectionLength,
}

impl FromStr for IdStrategy {
    type Err = UserDeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monotonic" => Ok(IdStrategy::Monotonic),
            "length" | "collection_length" => Ok(IdStrategy::CollectionLength),
            other => Err(UserDeskError::InvalidConfig(format!(
                "unknown id strategy `{}`",
                other
            ))),
        }
    }
}

/// The authoritative user collection. Every mutation that changes the
/// collection publishes a full snapshot to the change subscribers.
pub struct UserService<S: Storage, L: AuditLogger> {
    storage: S,
    audit_logger: L,
    changes: ChangeFeed<Vec<User>>,
    id_strategy: IdStrategy,
    last_assigned_id: u32,
}

impl UserService<InMemoryStorage, InMemoryAuditLogger> {
    pub fn in_memory() -> Self {
        Self::new(InMemoryStorage::new(), InMemoryAuditLogger::new())
    }

    /// A service over the four demo records (ids 1 to 4).
    pub fn seeded() -> Self {
        Self::new(InMemoryStorage::seeded(), InMemoryAuditLogger::new())
    }
}

impl<S: Storage, L: AuditLogger> UserService<S, L> {
    pub fn new(storage: S, audit_logger: L) -> Self {
        let last_assigned_id = storage.list_users().iter().map(|u| u.id).max().unwrap_or(0);
        info!(
            "Initializing UserService with {} users",
            storage.count_users()
        );
        UserService {
            storage,
            audit_logger,
            changes: ChangeFeed::new(),
            id_strategy: IdStrategy::default(),
            last_assigned_id,
        }
    }

    pub fn with_id_strategy(mut self, id_strategy: IdStrategy) -> Self {
        self.id_strategy = id_strategy;
        self
    }

    pub fn id_strategy(&self) -> IdStrategy {
        self.id_strategy
    }

    pub fn audit_logger(&self) -> &L {
        &self.audit_logger
    }

    // QUERIES

    pub fn get_user(&self, user_id: u32) -> Option<User> {
        let user = self.storage.get_user(user_id);
        if user.is_none() {
            debug!("No user with ID: {}", user_id);
        }
        user
    }

    pub fn list_users(&self) -> Vec<User> {
        self.storage.list_users()
    }

    /// Users ordered for a selector: case-insensitive by name, then by id.
    pub fn list_users_sorted_by_name(&self) -> Vec<User> {
        let mut users = self.storage.list_users();
        users.sort_by_cached_key(|u| (u.name.to_lowercase(), u.id));
        users
    }

    pub fn count_users(&self) -> usize {
        self.storage.count_users()
    }

    pub fn count_users_by_role(&self, role: &str) -> usize {
        self.storage
            .list_users()
            .iter()
            .filter(|u| u.role == role)
            .count()
    }

    // MUTATIONS

    /// Stores `user` under a fresh id. Fails without touching the collection
    /// when no id is left to hand out.
    pub fn add_user(&mut self, user: NewUser) -> Result<User, UserDeskError> {
        let id = self.next_id()?;
        let created = user.with_id(id);
        info!("Adding user with ID: {}", id);

        self.storage.insert_user(created.clone());
        self.last_assigned_id = self.last_assigned_id.max(id);
        self.audit(&created, AuditAction::AddUser);
        self.publish();

        Ok(created)
    }

    /// Replaces the record with the same id. A miss is a silent no-op and
    /// publishes nothing; the return value tells the caller which happened.
    pub fn update_user(&mut self, user: User) -> bool {
        let snapshot = user.clone();
        if !self.storage.replace_user(user) {
            debug!("Update skipped, no user with ID: {}", snapshot.id);
            return false;
        }
        info!("Updated user with ID: {}", snapshot.id);
        self.audit(&snapshot, AuditAction::UpdateUser);
        self.publish();
        true
    }

    /// Removes the first record with `user_id` and always publishes the
    /// resulting collection, even when nothing was removed.
    pub fn delete_user(&mut self, user_id: u32) -> Option<User> {
        let removed = self.storage.remove_user(user_id);
        match &removed {
            Some(user) => {
                info!("Deleted user with ID: {}", user_id);
                self.audit(user, AuditAction::DeleteUser);
            }
            None => debug!("Delete found no user with ID: {}", user_id),
        }
        self.publish();
        removed
    }

    // NOTIFICATIONS

    pub fn subscribe_to_changes(&mut self) -> ChangeStream<Vec<User>> {
        self.changes.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.changes.subscriber_count()
    }

    fn next_id(&self) -> Result<u32, UserDeskError> {
        let id = match self.id_strategy {
            IdStrategy::Monotonic => self.last_assigned_id.checked_add(1),
            IdStrategy::CollectionLength => u32::try_from(self.storage.count_users())
                .ok()
                .and_then(|len| len.checked_add(1)),
        };
        let Some(id) = id else {
            warn!("No user id left to assign under {:?}", self.id_strategy);
            return Err(UserDeskError::IdSpaceExhausted);
        };
        if self.id_strategy == IdStrategy::CollectionLength && self.storage.get_user(id).is_some() {
            warn!(
                "Collection-length id {} is already taken; records now share an id",
                id
            );
        }
        Ok(id)
    }

    fn publish(&mut self) {
        let snapshot = self.storage.list_users();
        debug!("Publishing {} users", snapshot.len());
        self.changes.publish(&snapshot);
    }

    fn audit(&mut self, user: &User, action: AuditAction) {
        self.audit_logger.log(AuditLogEntry::new(
            user.id,
            action,
            &json!({ "user_id": user.id, "name": user.name, "email": user.email, "role": user.role }),
        ));
    }
}
