pub mod claims;
pub mod error;
pub mod secret;
pub mod verifier;

pub use claims::{ClaimValue, Claims};
pub use error::AuthError;
pub use secret::{Secret, resolve_secret};
pub use verifier::{DecodedToken, TokenVerifier, verify_token};
