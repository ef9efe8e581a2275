pub mod clean;
pub mod version;
