use dioxus::prelude::*;
use gloo_timers::callback::Timeout;

/// Matches the ripple-grow animation length in the stylesheet.
const RIPPLE_MS: u32 = 600;

#[derive(Clone, Debug, PartialEq)]
pub struct RippleSpec {
    pub id: usize,
    pub left_px: f64,
    pub top_px: f64,
    pub size_px: f64,
}

/// Center a ripple on the click point, sized to cover the whole control.
fn ripple_geometry(id: usize, width: f64, height: f64, click_x: f64, click_y: f64) -> RippleSpec {
    let size_px = width.max(height);

    RippleSpec {
        id,
        left_px: click_x - size_px / 2.0,
        top_px: click_y - size_px / 2.0,
        size_px,
    }
}

#[derive(Clone, PartialEq, Props)]
struct RippleProps {
    spec: RippleSpec,
}

#[component]
fn Ripple(props: RippleProps) -> Element {
    let style = format!(
        "left: {:.1}px; top: {:.1}px; width: {:.1}px; height: {:.1}px;",
        props.spec.left_px, props.spec.top_px, props.spec.size_px, props.spec.size_px,
    );

    rsx! {
        span { class: "ripple", style: "{style}" }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct RippleButtonProps {
    #[props(default)]
    class: String,
    #[props(default)]
    onclick: EventHandler<MouseEvent>,
    children: Element,
}

/// A button that spawns a short-lived ripple at the click point before
/// forwarding the click to its handler.
#[component]
pub fn RippleButton(props: RippleButtonProps) -> Element {
    let mut bounds = use_signal(|| (0.0f64, 0.0f64));
    let mut ripples = use_signal(Vec::<RippleSpec>::new);
    let mut next_id = use_signal(|| 0usize);

    let forward = props.onclick;
    let class = format!("btn {}", props.class);

    rsx! {
        button {
            class: "{class}",
            onmounted: move |event| async move {
                if let Ok(rect) = event.data().get_client_rect().await {
                    bounds.set((rect.size.width, rect.size.height));
                }
            },
            onclick: move |event| {
                let (width, height) = bounds();
                let point = event.data().element_coordinates();

                let id = next_id();
                next_id.set(id + 1);

                ripples.with_mut(|live| {
                    live.push(ripple_geometry(id, width, height, point.x, point.y))
                });

                Timeout::new(RIPPLE_MS, move || {
                    ripples.with_mut(|live| live.retain(|ripple| ripple.id != id));
                })
                .forget();

                forward.call(event);
            },
            {props.children}
            for ripple in ripples() {
                Ripple { key: "{ripple.id}", spec: ripple.clone() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ripple_covers_the_larger_dimension() {
        let spec = ripple_geometry(0, 120.0, 40.0, 60.0, 20.0);
        assert!((spec.size_px - 120.0).abs() < f64::EPSILON);

        let spec = ripple_geometry(1, 40.0, 90.0, 10.0, 10.0);
        assert!((spec.size_px - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ripple_centers_on_the_click_point() {
        let spec = ripple_geometry(0, 100.0, 100.0, 50.0, 50.0);
        assert!((spec.left_px - 0.0).abs() < f64::EPSILON);
        assert!((spec.top_px - 0.0).abs() < f64::EPSILON);

        let spec = ripple_geometry(1, 80.0, 40.0, 20.0, 10.0);
        assert!((spec.left_px + 20.0).abs() < f64::EPSILON);
        assert!((spec.top_px + 30.0).abs() < f64::EPSILON);
    }
}
