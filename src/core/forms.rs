use crate::constants::{
    FIELD_EMAIL, FIELD_NAME, FIELD_PASSWORD, FIELD_ROLE, PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH,
    USERS_ROUTE,
};
use crate::core::errors::{FieldError, UserDeskError};
use crate::core::models::User;
use crate::core::services::UserService;
use crate::core::validation::{Validator, run_validators};
use crate::infrastructure::logging::AuditLogger;
use crate::infrastructure::storage::Storage;
use log::{debug, error, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserField {
    Name,
    Email,
    Role,
    Password,
}

impl UserField {
    pub const ALL: [UserField; 4] = [
        UserField::Name,
        UserField::Email,
        UserField::Role,
        UserField::Password,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserField::Name => FIELD_NAME,
            UserField::Email => FIELD_EMAIL,
            UserField::Role => FIELD_ROLE,
            UserField::Password => FIELD_PASSWORD,
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }

    fn validators(&self) -> Vec<Validator> {
        match self {
            UserField::Name | UserField::Role => vec![Validator::Required],
            UserField::Email => vec![Validator::Required, Validator::Email],
            UserField::Password => vec![
                Validator::Required,
                Validator::MinLength(PASSWORD_MIN_LENGTH),
                Validator::MaxLength(PASSWORD_MAX_LENGTH),
            ],
        }
    }
}

#[derive(Clone, Debug)]
pub struct FormControl {
    value: String,
    validators: Vec<Validator>,
    dirty: bool,
}

impl FormControl {
    fn new(validators: Vec<Validator>) -> Self {
        FormControl {
            value: String::new(),
            validators,
            dirty: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormState {
    /// No record bound
    Idle,
    /// A record's fields are bound into the form
    Loaded,
}

/// Where the screen should go after a successful submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub route: &'static str,
}

/// Reads a route parameter the way the edit screen does: a positive integer
/// selects a user, anything else leaves the form alone.
pub fn parse_route_id(param: &str) -> Result<u32, UserDeskError> {
    match param.trim().parse::<u32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(UserDeskError::InvalidRouteParam(param.to_string())),
    }
}

// Leading decimal digits after optional whitespace; the rest is ignored.
fn parse_leading_int(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}

/// Edit screen for a single user. Reads from the injected service on load and
/// selection, and writes a full replacement record back on submit.
pub struct EditUserForm<'a, S: Storage, L: AuditLogger> {
    service: &'a mut UserService<S, L>,
    controls: [FormControl; 4],
    users: Vec<User>,
    user_id: Option<u32>,
    user: Option<User>,
    state: FormState,
}

impl<'a, S: Storage, L: AuditLogger> EditUserForm<'a, S, L> {
    /// Builds the empty form and loads the selector list.
    pub fn initialize(service: &'a mut UserService<S, L>) -> Self {
        let mut form = EditUserForm {
            service,
            controls: UserField::ALL.map(|f| FormControl::new(f.validators())),
            users: Vec::new(),
            user_id: None,
            user: None,
            state: FormState::Idle,
        };
        form.refresh_users();
        form
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn selected_id(&self) -> Option<u32> {
        self.user_id
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn service(&self) -> &UserService<S, L> {
        &*self.service
    }

    pub fn refresh_users(&mut self) {
        self.users = self.service.list_users_sorted_by_name();
    }

    /// Binds the record with `user_id`. On a miss the id is still retained as
    /// the subject but the fields keep their current values.
    pub fn select_user(&mut self, user_id: u32) {
        self.user_id = Some(user_id);
        self.user = self.service.get_user(user_id);
        match &self.user {
            Some(user) => {
                let values = [&user.name, &user.email, &user.role, &user.password];
                for (control, value) in self.controls.iter_mut().zip(values) {
                    control.value = value.clone();
                    control.dirty = false;
                }
                self.state = FormState::Loaded;
                info!("Loaded user {} into edit form", user_id);
            }
            None => debug!("User {} not found, form left as is", user_id),
        }
    }

    /// Route-parameter entry point. Returns whether a selection was made.
    pub fn select_from_route(&mut self, param: &str) -> bool {
        match parse_route_id(param) {
            Ok(id) => {
                self.select_user(id);
                true
            }
            Err(e) => {
                debug!("{}", e);
                false
            }
        }
    }

    /// Selector change handler; the raw option value is read as an integer.
    pub fn on_user_select(&mut self, raw: &str) -> bool {
        match parse_leading_int(raw) {
            Some(id) => {
                self.select_user(id);
                true
            }
            None => false,
        }
    }

    pub fn value(&self, field: UserField) -> &str {
        self.controls[field.index()].value()
    }

    pub fn control(&self, field: UserField) -> &FormControl {
        &self.controls[field.index()]
    }

    pub fn set_field(&mut self, field: UserField, value: impl Into<String>) {
        let control = &mut self.controls[field.index()];
        control.value = value.into();
        control.dirty = true;
    }

    pub fn field_errors(&self, field: UserField) -> Vec<FieldError> {
        let control = &self.controls[field.index()];
        run_validators(field.as_str(), &control.value, &control.validators)
    }

    pub fn errors(&self) -> Vec<FieldError> {
        UserField::ALL
            .iter()
            .flat_map(|f| self.field_errors(*f))
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        UserField::ALL.iter().all(|f| self.field_errors(*f).is_empty())
    }

    /// First validation failure as an error, for callers that want `?`.
    pub fn validate(&self) -> Result<(), UserDeskError> {
        match self.errors().into_iter().next() {
            Some(e) => Err(UserDeskError::InvalidInput(e.field.clone(), e)),
            None => Ok(()),
        }
    }

    /// What the UI checks before enabling submit.
    pub fn can_submit(&self) -> bool {
        self.user_id.is_some() && self.is_valid()
    }

    /// Writes the form values back under the selected id. Does not
    /// re-validate; gating on `can_submit` is the caller's job.
    pub fn submit(&mut self) -> Result<Navigation, UserDeskError> {
        let Some(id) = self.user_id else {
            error!("User ID is not set");
            return Err(UserDeskError::NoSubjectSelected);
        };

        let updated = User {
            id,
            name: self.value(UserField::Name).to_string(),
            email: self.value(UserField::Email).to_string(),
            role: self.value(UserField::Role).to_string(),
            password: self.value(UserField::Password).to_string(),
        };
        if self.service.update_user(updated.clone()) {
            info!("User edited: {:?}", updated);
        } else {
            debug!("User {} no longer exists, nothing was edited", id);
        }

        self.reset();
        self.refresh_users();
        Ok(Navigation { route: USERS_ROUTE })
    }

    fn reset(&mut self) {
        for control in self.controls.iter_mut() {
            control.value.clear();
            control.dirty = false;
        }
        self.user_id = None;
        self.user = None;
        self.state = FormState::Idle;
    }
}
