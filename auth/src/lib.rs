//! Authentication primitives for the SSO service
//!
//! - Password hashing (Argon2id, PHC strings)
//! - Session token signing and validation (HS256 JWT, one secret per application)
//!
//! The service wraps these behind its own ports so the domain never depends on
//! the concrete algorithms.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! assert!(!hasher.verify("other", &hash).unwrap());
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::{Claims, JwtHandler};
//! use chrono::Duration;
//!
//! let handler = JwtHandler::new(b"app_secret_key_at_least_32_bytes!").unwrap();
//! let claims = Claims::for_session(1, "alice@example.com", 7, Duration::hours(1));
//! let token = handler.encode(&claims).unwrap();
//! let decoded: Claims = handler.decode(&token).unwrap();
//! assert_eq!(decoded.app_id, 7);
//! ```

pub mod jwt;
pub mod password;

pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
