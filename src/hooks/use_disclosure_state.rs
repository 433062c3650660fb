use dioxus::prelude::*;
use tracing::debug;
use crate::types::Rule;

/// A single expand/collapse flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToggleState {
    open: bool,
}

impl ToggleState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Invert the flag
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Cosmetic orientation of a disclosure chevron.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Indicator {
    /// Chevron pointing down
    Collapsed,
    /// Chevron rotated 180 degrees
    Expanded,
}

/// One entry of an accordion: a stable id, its text fragments and its own toggle.
#[derive(Clone, Debug, PartialEq)]
pub struct DisclosureItem {
    pub id: String,
    pub content: Vec<String>,
    state: ToggleState,
}

impl DisclosureItem {
    pub fn new(id: impl Into<String>, content: Vec<String>) -> Self {
        Self {
            id: id.into(),
            content,
            state: ToggleState::default(),
        }
    }

    pub fn from_rule(rule: &Rule) -> Self {
        Self::new(
            rule.title,
            rule.content.iter().map(|fragment| fragment.to_string()).collect(),
        )
    }

    pub fn expanded(&self) -> bool {
        self.state.is_open()
    }

    pub fn toggle(&mut self) {
        self.state.toggle();
    }

    pub fn indicator(&self) -> Indicator {
        if self.expanded() {
            Indicator::Expanded
        } else {
            Indicator::Collapsed
        }
    }

    /// Fragments to show beneath the header. Empty while collapsed.
    pub fn visible_fragments(&self) -> &[String] {
        if self.expanded() {
            &self.content
        } else {
            &[]
        }
    }
}

/// Ordered, fixed-length list of independent disclosure items.
///
/// Every item keeps its own [`ToggleState`]; there is no "currently open" index,
/// so any number of items can be expanded at once.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisclosureList {
    items: Vec<DisclosureItem>,
}

impl DisclosureList {
    pub fn from_rules(rules: &[Rule]) -> Self {
        Self {
            items: rules.iter().map(DisclosureItem::from_rule).collect(),
        }
    }

    pub fn items(&self) -> &[DisclosureItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Flip the item at `index`. Returns false when there is no such item.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                item.toggle();
                true
            }
            None => false,
        }
    }

    pub fn headers(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.id.as_str()).collect()
    }

    pub fn expanded_ids(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter(|item| item.expanded())
            .map(|item| item.id.as_str())
            .collect()
    }

    pub fn into_items(self) -> Vec<DisclosureItem> {
        self.items
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct DisclosureHandle {
    pub item: Signal<DisclosureItem>,
}

/// Hand a disclosure item to the calling component as local state.
pub fn use_disclosure(item: DisclosureItem) -> DisclosureHandle {
    let item = use_signal(move || item);

    DisclosureHandle { item }
}

impl DisclosureHandle {
    pub fn snapshot(&self) -> DisclosureItem {
        self.item.read().clone()
    }

    /// Open or close this item only
    pub fn toggle(&mut self) {
        let mut item = self.item.write();
        item.toggle();
        debug!(id = %item.id, expanded = item.expanded(), "disclosure toggled");
    }
}
