//! Storage records and database access for the student directory.

pub mod errors;
pub mod db;
pub mod student;
