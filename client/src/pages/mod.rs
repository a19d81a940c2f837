//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site has one route. The home page owns content distribution and
//! delegates all rendering to `components`.

pub mod home;
