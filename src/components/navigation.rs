use dioxus::prelude::*;
use dioxus_router::prelude::*;

use gloo_console::error as console_error;

use crate::common::{dom, pages};
use crate::components::backdrop::Backdrop;
use crate::components::confetti::ConfettiLayer;
use crate::components::notification::NotificationTray;
use crate::Route;

/// Element ids the document-level handlers use for containment checks.
pub const TRIGGER_ID: &str = "nav-trigger";
pub const PANEL_ID: &str = "nav-panel";

pub static MENU: GlobalSignal<MenuState> = Signal::global(MenuState::new);

// MenuState
//
// the mobile menu is the only stateful piece of the page, so it is an
// explicit value object with a single symmetric transition.  the four
// visual flags are derived from `open` and cannot drift apart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuFlags {
    pub panel_active: bool,
    pub overlay_active: bool,
    pub trigger_active: bool,
    pub scroll_locked: bool,
}

impl MenuState {
    pub fn new() -> Self {
        Self { open: false }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The single transition: CLOSED <-> OPEN.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Escape closes the menu; a stray Escape while closed is ignored.
    pub fn escape(&mut self) -> bool {
        if self.open {
            self.toggle();
            true
        } else {
            false
        }
    }

    /// A document-level click closes the menu unless it landed inside the
    /// panel or on the trigger, both of which have their own handlers.
    pub fn outside_click(&mut self, in_panel: bool, in_trigger: bool) -> bool {
        if self.open && !in_panel && !in_trigger {
            self.toggle();
            true
        } else {
            false
        }
    }

    /// Navigating from a panel link closes the menu.  When the panel is not
    /// shown, the same links form the desktop nav bar and must not flip
    /// state.
    pub fn close_on_navigate(&mut self) -> bool {
        if self.open {
            self.toggle();
            true
        } else {
            false
        }
    }

    pub fn flags(&self) -> MenuFlags {
        MenuFlags {
            panel_active: self.open,
            overlay_active: self.open,
            trigger_active: self.open,
            scroll_locked: self.open,
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    name: String,
    target: Route,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let current: Route = use_route();
    let class = pages::nav_class(&current, &props.target);

    rsx! {
        Link {
            class: "{class}",
            to: props.target.clone(),
            onclick: move |_| {
                MENU.with_mut(|menu| {
                    menu.close_on_navigate();
                });
            },
            "{props.name}"
        }
    }
}

#[component]
fn NavBarInner() -> Element {
    let flags = MENU.read().flags();

    // keep the body scroll lock in step with the menu
    use_effect(move || {
        let locked = MENU.read().flags().scroll_locked;
        if let Err(err) = dom::set_scroll_lock(locked) {
            console_error!(format!("failed to update scroll lock: {err}"));
        }
    });

    // document-level dismissal gestures, registered once for the page
    // lifetime.  both handlers re-check the menu state when they run, and
    // the click handler ignores anything inside the panel or on the trigger,
    // so a click that opens the menu can never immediately re-close it.
    use_hook(|| {
        if let Err(err) = dom::on_document_keydown(|event| {
            if event.key() == "Escape" {
                MENU.with_mut(|menu| {
                    menu.escape();
                });
            }
        }) {
            console_error!(format!("menu keydown listener unavailable: {err}"));
        }

        if let Err(err) = dom::on_document_click(|event| {
            if !MENU.read().is_open() {
                return;
            }
            let in_panel = dom::event_within(&event, PANEL_ID);
            let in_trigger = dom::event_within(&event, TRIGGER_ID);
            MENU.with_mut(|menu| {
                menu.outside_click(in_panel, in_trigger);
            });
        }) {
            console_error!(format!("menu click listener unavailable: {err}"));
        }
    });

    rsx! {
        header { class: "app-header",
            div { class: "nav-container",
                div { class: "logo",
                    Link { to: Route::Home {},
                        span { "☁" }
                        span { "Dreamcloud" }
                    }
                }

                nav {
                    id: PANEL_ID,
                    class: if flags.panel_active { "nav-links active" } else { "nav-links" },
                    NavBarButton { name: "Home".to_owned(), target: Route::Home {} }
                    NavBarButton { name: "Projects".to_owned(), target: Route::Projects {} }
                    NavBarButton { name: "Gallery".to_owned(), target: Route::Gallery {} }
                    NavBarButton { name: "Contact".to_owned(), target: Route::Contact {} }
                }

                button {
                    id: TRIGGER_ID,
                    class: if flags.trigger_active { "hamburger active" } else { "hamburger" },
                    aria_label: "Toggle navigation",
                    onclick: move |event| {
                        // keep this click away from the document-level handler
                        event.stop_propagation();
                        MENU.with_mut(|menu| menu.toggle());
                    },
                    span {}
                    span {}
                    span {}
                }
            }
        }

        div {
            class: if flags.overlay_active { "nav-overlay active" } else { "nav-overlay" },
            onclick: move |_| {
                MENU.with_mut(|menu| menu.toggle());
            },
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    rsx! {
        Backdrop {}
        NavBarInner {}
        main { class: "page-content",
            Outlet::<Route> {}
        }
        NotificationTray {}
        ConfettiLayer {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_flags_equal(menu: &MenuState) {
        let flags = menu.flags();
        assert_eq!(flags.panel_active, flags.overlay_active);
        assert_eq!(flags.overlay_active, flags.trigger_active);
        assert_eq!(flags.trigger_active, flags.scroll_locked);
        assert_eq!(flags.panel_active, menu.is_open());
    }

    #[test]
    fn starts_closed() {
        let menu = MenuState::new();
        assert!(!menu.is_open());
        all_flags_equal(&menu);
    }

    #[test]
    fn toggle_keeps_flags_in_lockstep() {
        let mut menu = MenuState::new();
        for _ in 0..5 {
            menu.toggle();
            all_flags_equal(&menu);
        }
        assert!(menu.is_open());
    }

    #[test]
    fn escape_is_a_no_op_while_closed() {
        let mut menu = MenuState::new();
        assert!(!menu.escape());
        assert!(!menu.is_open());
    }

    #[test]
    fn escape_closes_an_open_menu() {
        let mut menu = MenuState::new();
        menu.toggle();
        assert!(menu.escape());
        assert!(!menu.is_open());
        all_flags_equal(&menu);
    }

    #[test]
    fn outside_click_is_a_no_op_while_closed() {
        let mut menu = MenuState::new();
        assert!(!menu.outside_click(false, false));
        assert!(!menu.is_open());
    }

    #[test]
    fn outside_click_closes_an_open_menu() {
        let mut menu = MenuState::new();
        menu.toggle();
        assert!(menu.outside_click(false, false));
        assert!(!menu.is_open());
    }

    #[test]
    fn clicks_inside_panel_or_trigger_do_not_close() {
        let mut menu = MenuState::new();
        menu.toggle();
        assert!(!menu.outside_click(true, false));
        assert!(!menu.outside_click(false, true));
        assert!(menu.is_open());
        all_flags_equal(&menu);
    }

    #[test]
    fn navigation_closes_only_when_open() {
        let mut menu = MenuState::new();
        assert!(!menu.close_on_navigate());
        assert!(!menu.is_open());

        menu.toggle();
        assert!(menu.close_on_navigate());
        assert!(!menu.is_open());
    }
}
