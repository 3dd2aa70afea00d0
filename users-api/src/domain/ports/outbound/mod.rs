mod avatar;
mod events;
mod profile;
mod user_repository;

#[cfg(test)]
pub(crate) mod mock;

pub use avatar::*;
pub use events::*;
pub use profile::*;
pub use user_repository::*;
