pub mod profile;
pub mod record;
pub mod session;
pub mod stop;
