#![allow(nonstandard_style)]

pub mod assigning;
pub mod classifying;
pub mod commanding;
pub mod config;
pub mod error_handling;
pub mod evaluating;
pub mod parsing;
pub mod scanning;
pub mod session;
pub mod variables;

pub use error_handling::{CalcError, Result};
pub use session::{run, Calculator, Reply};
