mod avatar;
mod event;
mod ids;
mod profile;
mod user;

pub use avatar::*;
pub use event::*;
pub use ids::*;
pub use profile::*;
pub use user::*;
