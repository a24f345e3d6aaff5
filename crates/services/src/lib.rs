pub mod dao;
pub mod validation;

pub use dao::*;
