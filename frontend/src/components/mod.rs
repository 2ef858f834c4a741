//! UI Components for the Token Launchpad.
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with wallet connection
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`SessionProvider`] - RPC connection and wallet context
//! - [`LaunchForm`] - Token fields with the Create and Mint actions
//! - [`Toaster`] - Transient notifications

mod session;
mod header;
mod hero;
mod launch_form;
mod toaster;
mod footer;

pub use session::*;
pub use header::*;
pub use hero::*;
pub use launch_form::*;
pub use toaster::*;
pub use footer::*;
