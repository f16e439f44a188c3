pub mod board;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod history;
pub mod interaction;
pub mod persistence;
pub mod scene;

pub use board::*;
pub use error::*;
pub use geometry::*;
pub use history::*;
pub use interaction::*;
pub use persistence::*;
pub use scene::*;
