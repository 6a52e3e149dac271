//! Authentication building blocks for the client API.
//!
//! - Password hashing (Argon2id, PHC string format)
//! - Compact bearer tokens (HS256 JWT) carrying a subject id and expiry
//! - An [`Authenticator`] coordinating password verification with token
//!   issuance
//!
//! The service keeps its own domain types; this crate only deals in strings
//! and claims.
//!
//! # Examples
//!
//! ```
//! use auth::{Authenticator, Claims};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Registration: hash the password before storing it.
//! let hash = auth.hash_password("securepw").unwrap();
//!
//! // Login: verify the password and issue a token valid for 24 hours.
//! let claims = Claims::for_subject(42, 24);
//! let result = auth.authenticate("securepw", &hash, &claims).unwrap();
//!
//! // Per-request: validate the token and recover the subject.
//! let decoded = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(decoded.sub.as_deref(), Some("42"));
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
