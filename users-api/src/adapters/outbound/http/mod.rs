mod avatar_fetcher;

pub use avatar_fetcher::{HttpAvatarFetcher, DEFAULT_MAX_AVATAR_BYTES};
