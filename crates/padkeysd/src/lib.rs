pub mod app;
pub mod logging;
mod runner;
mod runtime;

pub use runtime::{run_loop, Error};
