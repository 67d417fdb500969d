use crate::core::models::User;
use crate::infrastructure::storage::Storage;

#[derive(Clone, Debug, Default)]
pub struct InMemoryStorage {
    users: Vec<User>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage { users: Vec::new() }
    }

    pub fn with_users(users: Vec<User>) -> Self {
        InMemoryStorage { users }
    }

    /// The four records the user-management screen ships with.
    pub fn seeded() -> Self {
        let seed = [
            (1, "Lucas Jeronymo Ribeiro", "lucas@gmail.com", "Engenheiro de FE", "Ladmin"),
            (2, "Vinicius Matheus Nunes Araujo", "vinicius@gmail.com", "Engenheiro de BE", "Vadmin"),
            (3, "Thiago Jun Honma", "thiago@gmail.com", "Analista de dados", "Tadmin"),
            (4, "Leonardo Almeida Proença", "leonardo@gmail.com", "Líder Técnico", "Ladmin"),
        ];
        Self::with_users(
            seed.into_iter()
                .map(|(id, name, email, role, password)| User {
                    id,
                    name: name.to_string(),
                    email: email.to_string(),
                    role: role.to_string(),
                    password: password.to_string(),
                })
                .collect(),
        )
    }
}

impl Storage for InMemoryStorage {
    fn get_user(&self, user_id: u32) -> Option<User> {
        self.users.iter().find(|u| u.id == user_id).cloned()
    }

    fn list_users(&self) -> Vec<User> {
        self.users.clone()
    }

    fn count_users(&self) -> usize {
        self.users.len()
    }

    fn insert_user(&mut self, user: User) {
        self.users.push(user);
    }

    fn replace_user(&mut self, user: User) -> bool {
        match self.users.iter_mut().find(|u| u.id == user.id) {
            Some(slot) => {
                *slot = user;
                true
            }
            None => false,
        }
    }

    fn remove_user(&mut self, user_id: u32) -> Option<User> {
        let index = self.users.iter().position(|u| u.id == user_id)?;
        Some(self.users.remove(index))
    }
}
