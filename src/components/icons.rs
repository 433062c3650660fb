//! Inline SVG icons (Lucide outlines plus the Instagram glyph).

use dioxus::prelude::*;

#[component]
fn StrokeIcon(class: String, children: Element) -> Element {
    rsx! {
        svg {
            class: "{class}",
            "viewBox": "0 0 24 24",
            "fill": "none",
            "stroke": "currentColor",
            "stroke-width": "2",
            "stroke-linecap": "round",
            "stroke-linejoin": "round",
            "aria-hidden": "true",
            {children}
        }
    }
}

#[component]
pub fn MenuIcon(class: String) -> Element {
    rsx! {
        StrokeIcon { class,
            path { "d": "M4 6h16" }
            path { "d": "M4 12h16" }
            path { "d": "M4 18h16" }
        }
    }
}

#[component]
pub fn CloseIcon(class: String) -> Element {
    rsx! {
        StrokeIcon { class,
            path { "d": "M18 6 6 18" }
            path { "d": "m6 6 12 12" }
        }
    }
}

#[component]
pub fn ChevronDownIcon(class: String) -> Element {
    rsx! {
        StrokeIcon { class,
            path { "d": "m6 9 6 6 6-6" }
        }
    }
}

#[component]
pub fn MapPinIcon(class: String) -> Element {
    rsx! {
        StrokeIcon { class,
            path { "d": "M20 10c0 4.993-5.539 10.193-7.399 11.799a1 1 0 0 1-1.202 0C9.539 20.193 4 14.993 4 10a8 8 0 0 1 16 0" }
            circle { "cx": "12", "cy": "10", "r": "3" }
        }
    }
}

#[component]
pub fn CalendarIcon(class: String) -> Element {
    rsx! {
        StrokeIcon { class,
            path { "d": "M8 2v4" }
            path { "d": "M16 2v4" }
            rect { "width": "18", "height": "18", "x": "3", "y": "4", "rx": "2" }
            path { "d": "M3 10h18" }
        }
    }
}

#[component]
pub fn ClockIcon(class: String) -> Element {
    rsx! {
        StrokeIcon { class,
            circle { "cx": "12", "cy": "12", "r": "10" }
            path { "d": "M12 6v6l4 2" }
        }
    }
}

#[component]
pub fn UsersIcon(class: String) -> Element {
    rsx! {
        StrokeIcon { class,
            path { "d": "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" }
            circle { "cx": "9", "cy": "7", "r": "4" }
            path { "d": "M22 21v-2a4 4 0 0 0-3-3.87" }
            path { "d": "M16 3.13a4 4 0 0 1 0 7.75" }
        }
    }
}

#[component]
pub fn HeartIcon(class: String) -> Element {
    rsx! {
        StrokeIcon { class,
            path { "d": "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z" }
        }
    }
}

#[component]
pub fn TrendingUpIcon(class: String) -> Element {
    rsx! {
        StrokeIcon { class,
            path { "d": "m22 7-8.5 8.5-5-5L2 17" }
            path { "d": "M16 7h6v6" }
        }
    }
}

#[component]
pub fn ArrowDownIcon(class: String) -> Element {
    rsx! {
        StrokeIcon { class,
            path { "d": "M19 14l-7 7m0 0l-7-7m7 7V3" }
        }
    }
}

#[component]
pub fn InstagramIcon(class: String) -> Element {
    rsx! {
        svg {
            class: "{class}",
            "viewBox": "0 0 24 24",
            "fill": "currentColor",
            "aria-hidden": "true",
            path { "d": "M12 2.163c3.204 0 3.584.012 4.85.07 3.252.148 4.771 1.691 4.919 4.919.058 1.265.069 1.645.069 4.849 0 3.205-.012 3.584-.069 4.849-.149 3.225-1.664 4.771-4.919 4.919-1.266.058-1.644.07-4.85.07-3.204 0-3.584-.012-4.849-.07-3.26-.149-4.771-1.699-4.919-4.92-.058-1.265-.07-1.644-.07-4.849 0-3.204.013-3.583.07-4.849.149-3.227 1.664-4.771 4.919-4.919 1.266-.057 1.645-.069 4.849-.069zM12 0C8.741 0 8.333.014 7.053.072 2.695.272.273 2.69.073 7.052.014 8.333 0 8.741 0 12c0 3.259.014 3.668.072 4.948.2 4.358 2.618 6.78 6.98 6.98C8.333 23.986 8.741 24 12 24c3.259 0 3.668-.014 4.948-.072 4.354-.2 6.782-2.618 6.979-6.98.059-1.28.073-1.689.073-4.948 0-3.259-.014-3.667-.072-4.947-.196-4.354-2.617-6.78-6.979-6.98C15.668.014 15.259 0 12 0zm0 5.838a6.162 6.162 0 100 12.324 6.162 6.162 0 000-12.324zM12 16a4 4 0 110-8 4 4 0 010 8zm6.406-11.845a1.44 1.44 0 100 2.881 1.44 1.44 0 000-2.881z" }
        }
    }
}
