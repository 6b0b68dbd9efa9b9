pub mod migrator;

pub use migrator::{migrate, Migrator};
