pub mod aggregate;

pub use aggregate::{Compte, CompteId, CompteType, CompteValidationError};
