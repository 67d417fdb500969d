/// Route the edit screen navigates to after a successful submit.
pub const USERS_ROUTE: &str = "app/users";

pub const PASSWORD_MIN_LENGTH: usize = 6;
pub const PASSWORD_MAX_LENGTH: usize = 15;

// RFC 5321 limits, applied before the shape regex
pub const EMAIL_MAX_LENGTH: usize = 254;
pub const EMAIL_LOCAL_PART_MAX_LENGTH: usize = 64;

pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_ROLE: &str = "role";
pub const FIELD_PASSWORD: &str = "password";
