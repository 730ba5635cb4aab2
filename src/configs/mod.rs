pub mod base;
pub mod client;
pub mod logging;

pub use base::*;
pub use client::*;
pub use logging::*;
