pub mod commands;
pub mod metadata;
pub mod session;
