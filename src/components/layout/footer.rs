use dioxus::prelude::*;
use crate::components::icons::{HeartIcon, InstagramIcon};
use crate::components::layout::{AnimateIn, Direction};
use crate::content::{AUTHOR_NAME, AUTHOR_URL, CLUB_NAME, FOOTER_TAGLINE, INSTAGRAM};

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "container",
                AnimateIn { direction: Direction::Up,
                    div { class: "footer-row",
                        div { class: "brand",
                            span { class: "brand-name brand-name-sm", "{CLUB_NAME}" }
                            span { class: "brand-tag brand-tag-sm", "Club" }
                        }
                        div { class: "footer-meta",
                            p { class: "footer-tagline", "{FOOTER_TAGLINE}" }
                            a {
                                class: "footer-social",
                                href: INSTAGRAM.href,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                aria_label: "Instagram de TRIBE Club",
                                InstagramIcon { class: "icon-sm" }
                            }
                        }
                    }

                    // Credit line
                    div { class: "footer-credit",
                        span { class: "muted", "Made with" }
                        span { class: "heart-pulse",
                            HeartIcon { class: "icon-sm icon-heart" }
                        }
                        span { class: "muted", "by" }
                        a {
                            class: "footer-author",
                            href: AUTHOR_URL,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{AUTHOR_NAME}"
                        }
                    }
                }
            }
        }
    }
}
