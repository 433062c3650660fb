use dioxus::prelude::*;
use crate::components::layout::Footer;
use crate::components::navigation::Navbar;
use crate::components::sections::{About, Hero, Rules, Schedule};

#[component]
pub fn Home() -> Element {
    rsx! {
        main {
            Navbar {}
            Hero {}
            About {}
            Schedule {}
            Rules {}
            Footer {}
        }
    }
}
