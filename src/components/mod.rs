//! Page-level components for the CozyUI showcase.

pub mod sections;

mod footer;
mod hero;
mod navbar;

pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
