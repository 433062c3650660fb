//! Clicks dispatched through the `VirtualDom` runtime into the real
//! listeners of the stateful components, with the result read back as HTML.

use std::any::Any;
use std::rc::Rc;

use dioxus::dioxus_core::{AttributeValue, ElementId, Event, Mutation};
use dioxus::prelude::*;
use dioxus_html::{
    set_event_converter, PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData,
};

use tribe_club::components::navigation::Navbar;
use tribe_club::components::sections::Rules;
use tribe_club::content::{NAV_LINKS, RULES};

/// A mounted app plus every mutation it has emitted so far.
struct Session {
    dom: VirtualDom,
    edits: Vec<Mutation>,
}

impl Session {
    fn mount(app: fn() -> Element) -> Self {
        set_event_converter(Box::new(SerializedHtmlEventConverter));
        let mut dom = VirtualDom::new(app);
        let edits = dom.rebuild_to_vec().edits;
        Self { dom, edits }
    }

    fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Elements with a click listener whose `attr` was set (to `value`, when
    /// given), ordered by the most recent time the attribute was written.
    fn clickable(&self, attr: &str, value: Option<&str>) -> Vec<ElementId> {
        let listening: Vec<ElementId> = self
            .edits
            .iter()
            .filter_map(|edit| match edit {
                Mutation::NewEventListener { name, id } if name == "click" => Some(*id),
                _ => None,
            })
            .collect();

        let mut found: Vec<ElementId> = Vec::new();
        for edit in &self.edits {
            if let Mutation::SetAttribute { name, value: written, id, .. } = edit {
                let value_matches = match (value, written) {
                    (None, _) => true,
                    (Some(expected), AttributeValue::Text(text)) => text.as_str() == expected,
                    (Some(_), _) => false,
                };
                if *name == attr && value_matches && listening.contains(id) {
                    found.retain(|seen| seen != id);
                    found.push(*id);
                }
            }
        }
        found
    }

    fn click(&mut self, id: ElementId) {
        let event = Event::new(
            Rc::new(PlatformEventData::new(Box::<SerializedMouseData>::default())) as Rc<dyn Any>,
            true,
        );
        self.dom.runtime().handle_event("click", event, id);
        let edits = self.dom.render_immediate_to_vec().edits;
        self.edits.extend(edits);
    }
}

fn navbar() -> Element {
    rsx! { Navbar {} }
}

fn rules() -> Element {
    rsx! { Rules {} }
}

fn menu_is_open(html: &str) -> bool {
    let open = html.contains("navbar-compact");
    assert_eq!(html.contains("Cerrar menú"), open);
    assert_eq!(html.contains("Abrir menú"), !open);
    open
}

/// Which rules currently show their fragments, by position
fn open_rules(html: &str) -> Vec<usize> {
    RULES
        .iter()
        .enumerate()
        .filter(|(_, rule)| {
            let shown = rule.content.iter().filter(|f| html.contains(*f)).count();
            assert!(shown == 0 || shown == rule.content.len(), "{} half rendered", rule.title);
            shown > 0
        })
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn menu_button_opens_and_a_compact_link_closes_it() {
    let mut session = Session::mount(navbar);
    assert!(!menu_is_open(&session.html()));

    let toggle = session.clickable("aria-expanded", None)[0];
    session.click(toggle);
    assert!(menu_is_open(&session.html()));

    // The compact copy is written after the desktop one
    let horarios = *session.clickable("href", Some("#horarios")).last().unwrap();
    session.click(horarios);
    assert!(!menu_is_open(&session.html()));
}

#[test]
fn menu_button_closes_an_open_menu() {
    let mut session = Session::mount(navbar);
    let toggle = session.clickable("aria-expanded", None)[0];

    session.click(toggle);
    session.click(toggle);
    assert!(!menu_is_open(&session.html()));
}

#[test]
fn compact_instagram_link_closes_the_menu() {
    let mut session = Session::mount(navbar);
    let toggle = session.clickable("aria-expanded", None)[0];
    session.click(toggle);

    let instagram = session.clickable("href", Some("https://www.instagram.com/tribeclub__running/"));
    assert_eq!(instagram.len(), 2);
    session.click(instagram[1]);
    assert!(!menu_is_open(&session.html()));
}

#[test]
fn every_persistent_link_dismisses_the_open_menu() {
    let mut session = Session::mount(navbar);
    let toggle = session.clickable("aria-expanded", None)[0];

    // Brand, the desktop section links and the Instagram pill
    let persistent = session.clickable("href", None);
    assert_eq!(persistent.len(), NAV_LINKS.len() + 2);

    for link in persistent {
        session.click(toggle);
        assert!(menu_is_open(&session.html()));

        session.click(link);
        assert!(!menu_is_open(&session.html()), "link {link:?} left the menu open");
    }
}

#[test]
fn persistent_links_keep_a_closed_menu_closed() {
    let mut session = Session::mount(navbar);

    for link in session.clickable("href", None) {
        session.click(link);
        assert!(!menu_is_open(&session.html()));
    }
}

#[test]
fn each_rule_toggles_through_its_own_state() {
    let mut session = Session::mount(rules);
    let headers = session.clickable("aria-expanded", None);
    assert_eq!(headers.len(), RULES.len());
    assert!(open_rules(&session.html()).is_empty());

    session.click(headers[2]);
    assert_eq!(open_rules(&session.html()), vec![2]);

    session.click(headers[2]);
    session.click(headers[0]);
    let html = session.html();
    assert_eq!(open_rules(&html), vec![0]);

    let titles: Vec<usize> = RULES
        .iter()
        .map(|rule| html.find(rule.title).unwrap())
        .collect();
    assert!(titles.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn opening_a_rule_leaves_the_others_open() {
    let mut session = Session::mount(rules);
    let headers = session.clickable("aria-expanded", None);

    session.click(headers[0]);
    session.click(headers[6]);
    session.click(headers[3]);
    assert_eq!(open_rules(&session.html()), vec![0, 3, 6]);

    let html = session.html();
    assert_eq!(html.matches("aria-expanded=\"true\"").count(), 3);
}
