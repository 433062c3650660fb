use dioxus::prelude::*;
use crate::components::icons::{CloseIcon, InstagramIcon, MenuIcon};
use crate::content::{CLUB_NAME, HOME_HREF, INSTAGRAM, NAV_LINKS};
use crate::hooks::use_navigation_state::{menu_toggle_label, use_navigation_state};
use crate::types::NavLink;

#[component]
pub fn Navbar() -> Element {
    let mut navigation = use_navigation_state();

    rsx! {
        NavbarView {
            menu_open: navigation.menu_open(),
            on_toggle: move |_| navigation.toggle(),
            on_select: move |href: String| navigation.select_link(&href),
        }
    }
}

/// Fixed top bar. The desktop link list is always present; the compact list
/// only exists while `menu_open` is set. Every link reports through `on_select`.
#[component]
pub fn NavbarView(
    menu_open: bool,
    on_toggle: EventHandler<()>,
    on_select: EventHandler<String>,
    #[props(default = NAV_LINKS)] links: &'static [NavLink],
) -> Element {
    let toggle_label = menu_toggle_label(menu_open);

    rsx! {
        nav { class: "navbar",
            div { class: "navbar-inner",
                a {
                    class: "brand",
                    href: HOME_HREF,
                    onclick: move |_| on_select.call(HOME_HREF.to_string()),
                    span { class: "brand-name", "{CLUB_NAME}" }
                    span { class: "brand-tag", "Club" }
                }

                // Desktop nav
                div { class: "navbar-desktop",
                    ul { class: "navbar-links",
                        for link in links.iter() {
                            li { key: "{link.href}",
                                a {
                                    class: "navbar-link",
                                    href: link.href,
                                    onclick: move |_| on_select.call(link.href.to_string()),
                                    "{link.label}"
                                }
                            }
                        }
                    }
                    a {
                        class: "instagram-pill",
                        href: INSTAGRAM.href,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        aria_label: INSTAGRAM.aria_label,
                        onclick: move |_| on_select.call(INSTAGRAM.href.to_string()),
                        InstagramIcon { class: "icon-sm" }
                        span { "Seguinos" }
                    }
                }

                // Mobile toggle
                button {
                    class: "navbar-toggle",
                    r#type: "button",
                    aria_label: toggle_label,
                    aria_expanded: "{menu_open}",
                    onclick: move |_| on_toggle.call(()),
                    if menu_open {
                        CloseIcon { class: "icon-md" }
                    } else {
                        MenuIcon { class: "icon-md" }
                    }
                }
            }

            if menu_open {
                div { class: "navbar-compact",
                    ul { class: "navbar-compact-links",
                        for link in links.iter() {
                            li { key: "{link.href}",
                                a {
                                    class: "navbar-link",
                                    href: link.href,
                                    onclick: move |_| on_select.call(link.href.to_string()),
                                    "{link.label}"
                                }
                            }
                        }
                        li {
                            a {
                                class: "navbar-compact-instagram",
                                href: INSTAGRAM.href,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                onclick: move |_| on_select.call(INSTAGRAM.href.to_string()),
                                InstagramIcon { class: "icon-sm" }
                                "Instagram"
                            }
                        }
                    }
                }
            }
        }
    }
}
