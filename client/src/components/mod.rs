//! Region components for the single-page layout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module renders one region of the page. Components take their content
//! as props from the home page; the mobile menu signal is read from context
//! where navigation is involved.

pub mod booking;
pub mod contact;
pub mod footer;
pub mod gallery;
pub mod header;
pub mod hero;
