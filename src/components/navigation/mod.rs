pub mod navbar;

pub use navbar::{Navbar, NavbarView};
