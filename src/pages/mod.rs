//! Page Initializers
//!
//! One module per enhanced page, dispatched from the entry point.

pub mod contact;
pub mod enquiry;
pub mod service;
