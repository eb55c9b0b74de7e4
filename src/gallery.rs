use dioxus::prelude::*;

use crate::components::cards::GalleryItem;

static ITEMS: [(&str, &str); 6] = [
    ("Morning cumulus", "tint-blue"),
    ("Pink hour", "tint-pink"),
    ("Storm light", "tint-purple"),
    ("Contrails", "tint-blue"),
    ("Lavender dusk", "tint-purple"),
    ("Cotton candy", "tint-pink"),
];

#[component]
pub fn Gallery() -> Element {
    rsx! {
        section { class: "page",
            div { class: "container",
                h1 { class: "page-title", "Gallery" }
                p { class: "page-subtitle", "Skies I've collected. Hover for a closer look." }

                div { class: "gallery-grid",
                    for (caption, tint) in ITEMS.iter() {
                        GalleryItem {
                            key: "{caption}",
                            caption: caption.to_string(),
                            tint_class: tint.to_string(),
                        }
                    }
                }
            }
        }
    }
}
