mod core;
pub use self::core::*;
mod slicing;
pub use slicing::*;
