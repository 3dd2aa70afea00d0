mod client;
mod domain;

pub use client::*;
pub use domain::*;
