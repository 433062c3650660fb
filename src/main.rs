use dioxus::prelude::*;
use tracing::{error, info, Level};

use tribe_club::pages::Home;
use tribe_club::SiteConfig;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }
    info!("Starting TRIBE Club site");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        SiteConfig::load().unwrap_or_else(|err| {
            error!("Invalid site config, using defaults: {}", err);
            SiteConfig::default()
        })
    });

    let font_variables = config.font_variables();

    rsx! {
        document::Title { "{config.title}" }
        document::Meta { name: "description", content: config.description.clone() }
        document::Meta { name: "theme-color", content: config.theme_color.clone() }
        document::Link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        document::Link { rel: "preconnect", href: "https://fonts.gstatic.com", crossorigin: "anonymous" }
        if let Some(href) = config.google_fonts_href() {
            document::Link { rel: "stylesheet", href }
        }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div { class: "site font-sans antialiased", style: "{font_variables}",
            Router::<Route> {}
        }
    }
}
