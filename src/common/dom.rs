use anyhow::{anyhow, Result};

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or_else(|| anyhow!("no global window"))
}

fn document() -> Result<web_sys::Document> {
    window()?
        .document()
        .ok_or_else(|| anyhow!("no document on window"))
}

/// Lock or unlock page scrolling while the mobile menu is open.
pub fn set_scroll_lock(lock: bool) -> Result<()> {
    let body = document()?
        .body()
        .ok_or_else(|| anyhow!("document has no body"))?;

    let value = if lock { "hidden" } else { "" };

    body.style()
        .set_property("overflow", value)
        .map_err(|_| anyhow!("failed to set body overflow"))
}

/// Register a document-wide keydown listener that lives for the page
/// lifetime.
pub fn on_document_keydown(handler: impl Fn(web_sys::KeyboardEvent) + 'static) -> Result<()> {
    let closure = Closure::<dyn Fn(web_sys::KeyboardEvent)>::new(handler);

    document()?
        .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
        .map_err(|_| anyhow!("failed to register keydown listener"))?;

    closure.forget();
    Ok(())
}

/// Register a document-wide click listener that lives for the page lifetime.
pub fn on_document_click(handler: impl Fn(web_sys::Event) + 'static) -> Result<()> {
    let closure = Closure::<dyn Fn(web_sys::Event)>::new(handler);

    document()?
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .map_err(|_| anyhow!("failed to register click listener"))?;

    closure.forget();
    Ok(())
}

/// Register a window scroll listener, invoked with the current vertical
/// offset.
pub fn on_window_scroll(handler: impl Fn(f64) + 'static) -> Result<()> {
    let window = window()?;

    let closure = Closure::<dyn Fn()>::new({
        let window = window.clone();
        move || {
            if let Ok(offset) = window.scroll_y() {
                handler(offset);
            }
        }
    });

    window
        .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
        .map_err(|_| anyhow!("failed to register scroll listener"))?;

    closure.forget();
    Ok(())
}

/// Whether the event target sits inside the element with the given id.
/// Unreachable documents and detached targets count as outside.
pub fn event_within(event: &web_sys::Event, id: &str) -> bool {
    let Ok(document) = document() else {
        return false;
    };
    let Some(container) = document.get_element_by_id(id) else {
        return false;
    };

    event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
        .map(|node| container.contains(Some(&node)))
        .unwrap_or(false)
}

/// Smoothly scroll an in-page anchor target into view, leaving room for the
/// sticky header.  A missing target is not an error, there is just nothing
/// to scroll to.
pub fn smooth_scroll_to(id: &str, header_offset: f64) -> Result<()> {
    let window = window()?;

    let Some(target) = document()?.get_element_by_id(id) else {
        tracing::debug!("anchor target #{id} not present, skipping scroll");
        return Ok(());
    };

    let top = target
        .dyn_ref::<web_sys::HtmlElement>()
        .map(|element| element.offset_top() as f64)
        .unwrap_or(0.0);

    let options = web_sys::ScrollToOptions::new();
    options.set_top((top - header_offset).max(0.0));
    options.set_behavior(web_sys::ScrollBehavior::Smooth);

    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}
