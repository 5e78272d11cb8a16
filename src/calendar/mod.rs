pub mod date;
pub mod grid;
pub mod view;

pub use date::*;
pub use grid::*;
pub use view::*;
