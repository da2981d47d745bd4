pub mod claims;
pub mod errors;
pub mod minter;

pub use claims::Claims;
pub use errors::JwtError;
pub use minter::TokenMinter;
