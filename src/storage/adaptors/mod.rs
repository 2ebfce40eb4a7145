mod mem;
mod sled;

pub use self::sled::*;
pub use mem::*;
