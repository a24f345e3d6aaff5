pub mod event;
pub mod group;
pub mod user;

pub use event::*;
pub use group::*;
pub use user::*;
