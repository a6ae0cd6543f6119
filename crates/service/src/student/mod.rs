//! Student directory: DTOs, storage port with its adapters, and the
//! application service on top.

pub mod domain;
pub mod memory;
pub mod repository;
pub mod service;

pub use domain::{Student, StudentInput};
pub use memory::InMemoryStudentRepository;
pub use repository::{SeaOrmStudentRepository, StudentRepository};
pub use service::StudentDirectory;
