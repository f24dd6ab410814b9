//! User module - identity and role of whoever is driving the dashboard.
//!
//! Sign-in is a mock stand-in: it never checks credentials and only decides
//! the role. The role in turn picks the navigation the view layer offers.

mod account;
mod role;

pub use account::User;
pub use role::{UserRole, View};
