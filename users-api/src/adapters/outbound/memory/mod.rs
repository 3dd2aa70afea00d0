mod avatar_cache;
mod user;

pub use avatar_cache::{PerUrlCache, SingleSlotCache};
pub use user::InMemoryUserRepository;
