pub mod degree_form;
pub mod university_form;

pub use degree_form::*;
pub use university_form::*;
