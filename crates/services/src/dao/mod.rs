pub mod base;
pub mod event;
pub mod group;
pub mod user;

pub use base::{BaseDao, DaoError, DaoResult};
