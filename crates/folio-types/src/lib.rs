pub mod records;
mod util;

pub use records::*;
pub use util::*;
