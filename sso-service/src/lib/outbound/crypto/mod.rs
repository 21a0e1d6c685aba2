pub mod hasher;
pub mod token_issuer;

pub use hasher::Argon2CredentialHasher;
pub use token_issuer::JwtTokenIssuer;
