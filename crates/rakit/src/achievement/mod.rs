mod bucket;
mod enums;
mod flags;
mod record;

pub use bucket::*;
pub use enums::*;
pub use flags::*;
pub use record::*;
