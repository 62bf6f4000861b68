//! Domain models for Lectern entities

pub mod book;
pub mod borrowing_record;
pub mod member;

pub use book::{Book, CreateBook, UpdateBook};
pub use borrowing_record::BorrowingRecord;
pub use member::{CreateMember, Member, UpdateMember};
