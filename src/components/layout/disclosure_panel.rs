use dioxus::prelude::*;
use crate::components::icons::ChevronDownIcon;
use crate::hooks::use_disclosure_state::{DisclosureItem, Indicator};
use crate::utils::cn;

pub fn chevron_class(indicator: Indicator) -> String {
    cn(&[
        Some("disclosure-chevron"),
        (indicator == Indicator::Expanded).then_some("disclosure-chevron-open"),
    ])
}

/// Header button plus, only while expanded, the item's fragment list.
///
/// Stateless: the owner decides what `on_toggle` does.
#[component]
pub fn DisclosurePanel(item: DisclosureItem, on_toggle: EventHandler<()>) -> Element {
    let expanded = item.expanded();
    let chevron = chevron_class(item.indicator());
    let body_class = cn(&[
        Some("disclosure-body"),
        expanded.then_some("disclosure-body-open"),
    ]);

    rsx! {
        div { class: "disclosure",
            button {
                class: "disclosure-header",
                r#type: "button",
                aria_expanded: "{expanded}",
                onclick: move |_| on_toggle.call(()),

                span { class: "disclosure-title", "{item.id}" }
                ChevronDownIcon { class: chevron }
            }

            div { class: "{body_class}",
                if expanded {
                    ul { class: "disclosure-fragments",
                        for (i, fragment) in item.visible_fragments().iter().enumerate() {
                            li { key: "{i}", class: "disclosure-fragment",
                                span { class: "disclosure-bullet" }
                                "{fragment}"
                            }
                        }
                    }
                }
            }
        }
    }
}
