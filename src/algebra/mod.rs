mod blocking;
mod probe;
mod request;

pub use blocking::*;
pub use probe::*;
pub use request::*;
