pub mod tables;
pub mod utils;

pub use tables::*;
pub use utils::*;
