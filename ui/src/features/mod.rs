//! Feature modules grouping state, validation, and orchestration per page.

pub mod registry;
