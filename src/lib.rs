//! TRIBE Club - single-page site for the Santa Barbara running club.
//!
//! The page is a column of static sections (hero, about, schedule, rules,
//! footer) under a fixed navbar. Two pieces of UI hold state, both as
//! component-local signals:
//! - the navbar's compact menu ([`hooks::use_navigation_state::NavigationState`])
//! - each rules accordion entry ([`hooks::use_disclosure_state::DisclosureItem`])
//!
//! Accordion entries are independent; any number may be open at once.

pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod hooks;
pub mod pages;
pub mod types;
pub mod utils;

pub use config::SiteConfig;
pub use error::{SiteConfigError, SiteConfigResult};
