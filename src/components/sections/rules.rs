use dioxus::prelude::*;
use crate::components::layout::{AnimateIn, DisclosurePanel, SectionHeading};
use crate::content::{RULES, RULES_INTRO};
use crate::hooks::use_disclosure_state::{use_disclosure, DisclosureItem, DisclosureList};

/// Stagger between consecutive rule entrances
const STAGGER_MS: u32 = 80;

/// One accordion entry. Its open/closed state lives here and nowhere else.
#[component]
pub fn RuleItem(item: DisclosureItem, index: usize) -> Element {
    let mut disclosure = use_disclosure(item);
    let delay = index as u32 * STAGGER_MS;

    rsx! {
        AnimateIn { delay,
            div { class: "rule-item",
                DisclosurePanel {
                    item: disclosure.snapshot(),
                    on_toggle: move |_| disclosure.toggle(),
                }
            }
        }
    }
}

#[component]
pub fn Rules() -> Element {
    let items = use_hook(|| DisclosureList::from_rules(RULES).into_items());

    rsx! {
        section { id: "reglamento", class: "section section-bordered",
            div { class: "container container-narrow",
                AnimateIn {
                    SectionHeading {
                        kicker: "Reglamento",
                        title: "Reglas de conducta",
                        intro: RULES_INTRO,
                    }
                }

                div { class: "rules-list",
                    for (index, item) in items.iter().enumerate() {
                        RuleItem { key: "{item.id}", item: item.clone(), index }
                    }
                }
            }
        }
    }
}
