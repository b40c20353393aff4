// Book domain module
// Book record, its read view and the ISDN value object

#![allow(clippy::module_inception)]

pub mod book;
pub mod value_objects;

pub use book::{Book, BookDetails, MAX_PAGES, MIN_PAGES};
pub use value_objects::{Isdn, ISDN_LENGTH};
