use dioxus::prelude::*;

#[component]
pub fn SectionHeading(
    kicker: &'static str,
    title: &'static str,
    #[props(default)] intro: &'static str,
) -> Element {
    rsx! {
        div { class: "section-heading",
            span { class: "kicker", "{kicker}" }
            h2 { class: "section-title", "{title}" }
            div { class: "accent-bar" }
            if !intro.is_empty() {
                p { class: "section-intro", "{intro}" }
            }
        }
    }
}
