pub mod animate_in;
pub mod disclosure_panel;
pub mod footer;
pub mod section_heading;

pub use animate_in::{AnimateIn, Direction};
pub use disclosure_panel::DisclosurePanel;
pub use footer::Footer;
pub use section_heading::SectionHeading;
