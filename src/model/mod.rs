pub mod definition;
pub mod kind;
pub mod parameter;

pub use definition::*;
pub use kind::*;
pub use parameter::*;
