//! User Interface Components
//!
//! This module contains reusable Dioxus components for the registry UI:
//!
//! - **forms**: university and degree registration forms
//! - **display**: listing views, tables, loading and preview displays
//! - **inputs**: validated input fields and form controls

pub mod display;
pub mod forms;
pub mod inputs;
