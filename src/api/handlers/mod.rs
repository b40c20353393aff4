// HTTP handlers, one module per resource

pub mod auth;
pub mod authors;
pub mod books;
pub mod categories;
