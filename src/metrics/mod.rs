pub mod detail;
pub mod score;
pub mod store;

pub use detail::*;
pub use score::*;
pub use store::*;
