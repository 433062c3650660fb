use dioxus::prelude::*;
use crate::components::icons::{HeartIcon, TrendingUpIcon, UsersIcon};
use crate::components::layout::SectionHeading;
use crate::content::{ABOUT_INTRO, VALUES};
use crate::types::ValueIcon;

#[component]
fn ValueBadge(icon: ValueIcon) -> Element {
    match icon {
        ValueIcon::Users => rsx! { UsersIcon { class: "icon-lg" } },
        ValueIcon::Heart => rsx! { HeartIcon { class: "icon-lg" } },
        ValueIcon::TrendingUp => rsx! { TrendingUpIcon { class: "icon-lg" } },
    }
}

#[component]
pub fn About() -> Element {
    rsx! {
        section { id: "nosotros", class: "section",
            div { class: "container",
                SectionHeading {
                    kicker: "Nosotros",
                    title: "Mas que un club",
                    intro: ABOUT_INTRO,
                }

                div { class: "card-grid card-grid-3",
                    for value in VALUES.iter() {
                        div { key: "{value.title}", class: "card value-card",
                            div { class: "value-icon",
                                ValueBadge { icon: value.icon }
                            }
                            h3 { class: "card-title", "{value.title}" }
                            p { class: "card-text", "{value.description}" }
                        }
                    }
                }
            }
        }
    }
}
