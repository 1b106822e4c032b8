//! This crate contains all shared UI for the workspace.

mod navbar;
pub use navbar::Navbar;

mod layout;
pub use layout::Layout;

mod backend;
pub use backend::*;

pub mod hooks;

mod components;
pub use components::*;
