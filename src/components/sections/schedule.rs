use dioxus::prelude::*;
use crate::components::icons::{ClockIcon, MapPinIcon};
use crate::components::layout::SectionHeading;
use crate::content::{LOCATION, SCHEDULE};

#[component]
pub fn Schedule() -> Element {
    rsx! {
        section { id: "horarios", class: "section section-bordered",
            div { class: "container",
                SectionHeading { kicker: "Horarios", title: "Cuando corremos" }

                div { class: "card-grid card-grid-2",
                    for item in SCHEDULE.iter() {
                        div { key: "{item.day}", class: "card schedule-card",
                            div { class: "schedule-stripe" }
                            span { class: "kicker kicker-sm", "{item.label}" }
                            h3 { class: "schedule-day", "{item.day}" }
                            p { class: "card-text", "{item.description}" }
                            div { class: "schedule-meta",
                                div { class: "schedule-meta-item",
                                    ClockIcon { class: "icon-sm text-primary" }
                                    span { "{item.time}" }
                                }
                                div { class: "schedule-meta-item",
                                    MapPinIcon { class: "icon-sm text-primary" }
                                    span { "{LOCATION}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
