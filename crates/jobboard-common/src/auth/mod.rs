//! Authentication utilities

mod jwt;
mod password;
mod verification;

pub use jwt::{AccessToken, Claims, JwtService};
pub use password::{
    hash_password, validate_password_strength, verify_dummy_password, verify_password,
};
pub use verification::{decode_uid, encode_uid, VerificationTokenService};
