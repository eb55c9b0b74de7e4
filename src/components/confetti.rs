use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::*;
use gloo_timers::callback::Timeout;
use rand::Rng;

const BURST_SIZE: usize = 50;

/// Longest fall animation is five seconds, so the whole burst is gone by
/// then.
const CLEANUP_MS: u32 = 5_000;

/// Pastel palette for the celebration dots.
const DOT_COLORS: [&str; 4] = ["#ffcfe5", "#e6d1ff", "#d1eaff", "#f0d9ff"];

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

pub static CONFETTI: GlobalSignal<Vec<ConfettiSpec>> = Signal::global(Vec::new);

#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiSpec {
    pub id: usize,
    pub color: &'static str,
    pub left_vw: f64,
    pub fall_secs: f64,
}

fn burst(first_id: usize, rng: &mut impl Rng) -> Vec<ConfettiSpec> {
    (0..BURST_SIZE)
        .map(|offset| ConfettiSpec {
            id: first_id + offset,
            color: DOT_COLORS[rng.gen_range(0..DOT_COLORS.len())],
            left_vw: rng.gen_range(0.0..100.0),
            fall_secs: rng.gen_range(2.0..5.0),
        })
        .collect()
}

/// Drop a burst of dots from the top of the viewport and sweep them away
/// once the slowest ones have landed.  Overlapping bursts clean up
/// independently.
pub fn celebrate() {
    let first_id = NEXT_ID.fetch_add(BURST_SIZE, Ordering::Relaxed);
    let dots = burst(first_id, &mut rand::thread_rng());

    CONFETTI.with_mut(|live| live.extend(dots));

    Timeout::new(CLEANUP_MS, move || {
        CONFETTI.with_mut(|live| {
            live.retain(|dot| dot.id < first_id || dot.id >= first_id + BURST_SIZE)
        });
    })
    .forget();
}

#[derive(Clone, PartialEq, Props)]
struct ConfettiDotProps {
    spec: ConfettiSpec,
}

#[component]
fn ConfettiDot(props: ConfettiDotProps) -> Element {
    let style = format!(
        "left: {:.2}vw; background: {}; animation-duration: {:.2}s;",
        props.spec.left_vw, props.spec.color, props.spec.fall_secs,
    );

    rsx! {
        div { class: "confetti-dot", style: "{style}" }
    }
}

#[component]
pub fn ConfettiLayer() -> Element {
    let dots = CONFETTI.read().clone();

    rsx! {
        div { class: "confetti-layer",
            for dot in dots {
                ConfettiDot { key: "{dot.id}", spec: dot.clone() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn burst_has_fifty_dots_with_contiguous_ids() {
        let mut rng = StepRng::new(0, 1);
        let dots = burst(100, &mut rng);

        assert_eq!(dots.len(), BURST_SIZE);
        for (offset, dot) in dots.iter().enumerate() {
            assert_eq!(dot.id, 100 + offset);
        }
    }

    #[test]
    fn burst_respects_documented_ranges() {
        let mut rng = rand::thread_rng();
        for dot in burst(0, &mut rng) {
            assert!(DOT_COLORS.contains(&dot.color));
            assert!((0.0..100.0).contains(&dot.left_vw));
            assert!((2.0..5.0).contains(&dot.fall_secs));
        }
    }
}
