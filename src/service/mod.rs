//! Book validation ahead of the repository.

mod validation;
pub use validation::BookValidator;
