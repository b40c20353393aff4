// Domain layer module exports
// Records and repository contracts, independent of the database

pub mod author;
pub mod book;
pub mod category;
pub mod repositories;
