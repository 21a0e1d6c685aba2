use std::fmt;

/// Registered user as seen by the authentication engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub password_hash: String,
}

/// User unique identifier, assigned by the credential store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Client application a token can be issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    pub id: AppId,
    pub name: String,
    pub secret: String,
}

/// Application unique identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppId(pub i64);

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password held only for the duration of one call.
///
/// `Debug` is redacted so the value cannot leak through logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn new(password: String) -> Self {
        Self(password)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Credential presented for authentication against a client application.
///
/// The email is only a lookup key and is not checked for syntax.
#[derive(Debug)]
pub struct LoginCommand {
    pub email: String,
    pub password: Password,
    pub app_id: AppId,
}

impl LoginCommand {
    pub fn new(email: String, password: Password, app_id: AppId) -> Self {
        Self {
            email,
            password,
            app_id,
        }
    }
}

/// Command to register a new user.
#[derive(Debug)]
pub struct RegisterCommand {
    pub email: String,
    pub password: Password,
}

impl RegisterCommand {
    pub fn new(email: String, password: Password) -> Self {
        Self { email, password }
    }
}
