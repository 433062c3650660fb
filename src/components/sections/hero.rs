use dioxus::prelude::*;
use crate::components::icons::{ArrowDownIcon, CalendarIcon, MapPinIcon};
use crate::components::layout::{AnimateIn, Direction};
use crate::content::{CLUB_NAME, HERO_TAGLINE, LOCATION, RUN_DAYS};

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { id: "inicio", class: "hero",
            div { class: "hero-backdrop",
                div { class: "hero-overlay" }
                div { class: "hero-gradient" }
            }

            div { class: "hero-content",
                AnimateIn { delay: 200, direction: Direction::Fade,
                    span { class: "kicker", "Running Club" }
                }

                AnimateIn { delay: 400,
                    h1 { class: "hero-title", "{CLUB_NAME}" }
                    div { class: "accent-bar accent-bar-wide" }
                }

                AnimateIn { delay: 600,
                    p { class: "hero-tagline", "{HERO_TAGLINE}" }
                }

                AnimateIn { delay: 800,
                    div { class: "hero-badges",
                        div { class: "hero-badge",
                            MapPinIcon { class: "icon-sm text-primary" }
                            span { "{LOCATION}" }
                        }
                        div { class: "hero-divider" }
                        div { class: "hero-badge",
                            CalendarIcon { class: "icon-sm text-primary" }
                            span { "{RUN_DAYS}" }
                        }
                    }
                }

                AnimateIn { delay: 1000,
                    a { class: "hero-cta", href: "#nosotros",
                        "Conoce mas"
                        ArrowDownIcon { class: "icon-sm bounce" }
                    }
                }
            }
        }
    }
}
