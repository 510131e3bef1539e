//! Data models for Biblioteca

pub mod address;
pub mod book;
pub mod catalog;
pub mod client;
pub mod copy;
pub mod loan;
pub mod reserve;
pub mod review;

// Re-export commonly used types
pub use address::Address;
pub use book::Book;
pub use catalog::{Author, Branch, Collection, Language, Publisher};
pub use client::{Client, ClientType};
pub use copy::{CopyStatus, PhysicalBook};
pub use loan::{BookLoan, LoanStatus};
pub use reserve::Reserve;
pub use review::BookReview;
