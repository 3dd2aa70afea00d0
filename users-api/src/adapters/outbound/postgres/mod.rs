mod user;

pub use user::PostgresUserRepository;
