mod endpoint;
mod error;
mod outcome;

pub use endpoint::*;
pub use error::*;
pub use outcome::*;
