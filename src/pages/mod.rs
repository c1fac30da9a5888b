//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is the view a route renders once the navigation gate lets the
//! transition through. Account and catalogue flows live behind the API and
//! are not wired here.

pub mod book_detail;
pub mod home;
pub mod login;
pub mod profile;
pub mod search;
pub mod signup;
