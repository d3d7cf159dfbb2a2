//! # WeatherApp Security
//! 
//! Security primitives: access-token signing, refresh-token generation, password hashing.

pub mod jwt;
pub mod password;
pub mod refresh;

pub use jwt::{Claims, JwtError, JwtService};
pub use password::{PasswordError, PasswordService};
pub use refresh::generate_refresh_token;
