mod container;
mod descriptor;
mod field;

pub use container::*;
pub use descriptor::*;
pub use field::*;
