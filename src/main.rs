#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;

mod components;
use components::navigation::NavBar;

mod home;
use home::Home;

mod projects;
use projects::Projects;

mod gallery;
use gallery::Gallery;

mod contact;
use contact::Contact;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/projects")]
        Projects {},
        #[route("/gallery")]
        Gallery {},
        #[route("/contact")]
        Contact {},
        // the site used to be static .html pages; keep those URLs working
        #[route("/:..segments")]
        LegacyPath { segments: Vec<String> },
}

#[derive(Clone, PartialEq, Props)]
struct LegacyPathProps {
    segments: Vec<String>,
}

#[component]
fn LegacyPath(props: LegacyPathProps) -> Element {
    let navigator = use_navigator();
    let path = format!("/{}", props.segments.join("/"));

    use_effect(move || {
        navigator.replace(common::pages::route_for_path(&path));
    });

    rsx! {}
}

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{common::style::PAGE_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
