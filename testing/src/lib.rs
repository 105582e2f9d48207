pub mod ac;
pub mod core;

mod utils;
pub use utils::*;
