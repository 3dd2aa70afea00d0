pub mod events;
pub mod filesystem;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod reqres;
