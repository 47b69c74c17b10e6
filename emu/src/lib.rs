//! Fetch-execute interpreter for the Little Man Computer.

pub mod computer;
pub mod error;
pub mod hooks;
pub mod io;
pub mod model;

pub use computer::{run, Computer};
pub use error::Error;
pub use model::{Snapshot, State};
