use dioxus::prelude::*;

// Inline lift styles, matching the card transition in the stylesheet
const LIFT: &str = "transform: translateY(-10px); box-shadow: var(--shadow-strong);";
const REST: &str = "transform: translateY(0); box-shadow: var(--shadow-soft);";

#[derive(Clone, PartialEq, Props)]
pub struct ProjectCardProps {
    title: String,
    blurb: String,
    tags: Vec<String>,
}

#[component]
pub fn ProjectCard(props: ProjectCardProps) -> Element {
    let mut hovered = use_signal(|| false);
    let style = if hovered() { LIFT } else { REST };

    rsx! {
        div {
            class: "project-card",
            style: "{style}",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),
            h3 { class: "project-title", "{props.title}" }
            p { class: "project-blurb", "{props.blurb}" }
            div { class: "project-tags",
                for tag in props.tags.iter() {
                    span { class: "tag", "{tag}" }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct GalleryItemProps {
    caption: String,
    tint_class: String,
}

#[component]
pub fn GalleryItem(props: GalleryItemProps) -> Element {
    let mut hovered = use_signal(|| false);
    let style = if hovered() { LIFT } else { REST };
    let class = format!("gallery-item {}", props.tint_class);

    rsx! {
        div {
            class: "{class}",
            style: "{style}",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),
            span { class: "gallery-caption", "{props.caption}" }
        }
    }
}
