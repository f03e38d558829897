pub mod macros;
pub mod session;

pub use session::{Cache, CacheKey};
