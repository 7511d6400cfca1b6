mod algebra;
mod domain;
mod service;

pub use algebra::*;
pub use domain::*;
pub use service::*;
