pub mod common;
pub mod domain;
pub mod io;
pub mod ops;
