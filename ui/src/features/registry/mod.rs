pub mod form_validation;
pub mod logic;
pub mod types;

pub use form_validation::*;
pub use logic::*;
pub use types::*;
