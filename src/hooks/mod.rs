pub mod use_disclosure_state;
pub mod use_navigation_state;
