use dioxus::prelude::*;

use crate::components::cards::ProjectCard;

struct Project {
    title: &'static str,
    blurb: &'static str,
    tags: &'static [&'static str],
}

static PROJECTS: [Project; 4] = [
    Project {
        title: "Nimbus Notes",
        blurb: "A tiny note-taking app that saves everything locally and syncs nowhere on purpose.",
        tags: &["offline-first", "design"],
    },
    Project {
        title: "Sundog Weather",
        blurb: "Weather dashboard with hand-drawn icons and forecasts phrased like a friend would say them.",
        tags: &["api", "illustration"],
    },
    Project {
        title: "Drift",
        blurb: "Generative art toy that renders slow-moving cloudscapes you can export as wallpapers.",
        tags: &["canvas", "generative"],
    },
    Project {
        title: "Paper Trail",
        blurb: "Reading tracker for physical books, because not everything needs a feed.",
        tags: &["design", "small-web"],
    },
];

#[component]
pub fn Projects() -> Element {
    rsx! {
        section { class: "page",
            div { class: "container",
                h1 { class: "page-title", "Projects" }
                p { class: "page-subtitle", "A few things I've made and still like." }

                div { class: "project-grid",
                    for project in PROJECTS.iter() {
                        ProjectCard {
                            key: "{project.title}",
                            title: project.title.to_owned(),
                            blurb: project.blurb.to_owned(),
                            tags: project.tags.iter().map(|tag| tag.to_string()).collect(),
                        }
                    }
                }
            }
        }
    }
}
