use dioxus::prelude::*;
use dioxus_router::prelude::*;

use gloo_console::error as console_error;

use crate::common::dom;
use crate::components::ripple::RippleButton;
use crate::Route;

/// Scroll allowance for the sticky header when jumping to an anchor.
const HEADER_OFFSET: f64 = 100.0;

const FLOATING_CIRCLES: usize = 3;

/// Stagger for the hero decoration: each circle drifts a little slower and
/// starts a little later than the one before it.
fn shape_timing(index: usize) -> (f64, f64) {
    (15.0 + index as f64 * 3.0, index as f64 * 2.0)
}

#[derive(Clone, PartialEq, Props)]
struct FloatingCircleProps {
    index: usize,
}

#[component]
fn FloatingCircle(props: FloatingCircleProps) -> Element {
    let (duration, delay) = shape_timing(props.index);
    let style = format!("animation-duration: {duration}s; animation-delay: {delay}s;");

    rsx! {
        div { class: "floating-circle", style: "{style}" }
    }
}

#[component]
pub fn Home() -> Element {
    let navigator = use_navigator();

    rsx! {
        section { class: "hero",
            div { class: "floating-shapes",
                for index in 0..FLOATING_CIRCLES {
                    FloatingCircle { key: "{index}", index: index }
                }
            }
            div { class: "container hero-content",
                h1 { class: "hero-title", "Dreamy Cloud Portfolio" }
                p { class: "hero-subtitle", "Design, code, and a little bit of weather." }
                div { class: "hero-actions",
                    RippleButton {
                        class: "btn-primary btn-lg".to_owned(),
                        onclick: move |_| {
                            navigator.push(Route::Projects {});
                        },
                        "See My Work"
                    }
                    RippleButton {
                        class: "btn-secondary btn-lg".to_owned(),
                        onclick: move |_| {
                            navigator.push(Route::Contact {});
                        },
                        "Say Hello"
                    }
                }
                a {
                    class: "hero-scroll-hint",
                    href: "#about",
                    onclick: move |event| {
                        event.prevent_default();
                        if let Err(err) = dom::smooth_scroll_to("about", HEADER_OFFSET) {
                            console_error!(format!("smooth scroll failed: {err}"));
                        }
                    },
                    "↓ About Me"
                }
            }
        }

        section { id: "about", class: "page-section",
            div { class: "container",
                h2 { class: "section-title", "About" }
                p {
                    "I build small, friendly things for the web: interfaces with "
                    "soft edges, tiny animations, and no dark patterns. When I'm "
                    "not pushing pixels I'm probably photographing clouds."
                }
            }
        }

        section { class: "page-section",
            div { class: "container",
                h2 { class: "section-title", "Currently" }
                p {
                    "Taking on freelance work for spring. The fastest way to "
                    "reach me is the "
                    Link { to: Route::Contact {}, "contact form" }
                    " — I read everything."
                }
            }
        }

        footer { class: "home-footer",
            div { class: "container",
                p { "Dreamy Cloud Portfolio • drawn with rain and starlight" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_timings_stagger_by_index() {
        assert_eq!(shape_timing(0), (15.0, 0.0));
        assert_eq!(shape_timing(1), (18.0, 2.0));
        assert_eq!(shape_timing(2), (21.0, 4.0));
    }
}
