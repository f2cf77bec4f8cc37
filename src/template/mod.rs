pub mod binding;
pub mod constraints;

pub use binding::*;
pub use constraints::*;
