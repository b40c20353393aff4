// Infrastructure layer module
// Contains the database adapters
// Follows Hexagonal Architecture

pub mod database;
pub mod repositories;
