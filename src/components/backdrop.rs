use dioxus::prelude::*;

use gloo_console::error as console_error;
use rand::Rng;

use crate::common::dom;

const STAR_COUNT: usize = 50;
const CLOUD_COUNT: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarSize {
    Small,
    Medium,
    Large,
}

impl StarSize {
    /// Bucket a raw 1.0..4.0 size draw into the three sprite classes.
    fn bucket(size: f64) -> Self {
        if size < 1.5 {
            Self::Small
        } else if size < 2.5 {
            Self::Medium
        } else {
            Self::Large
        }
    }

    fn class(&self) -> &'static str {
        match self {
            Self::Small => "star star-small",
            Self::Medium => "star star-medium",
            Self::Large => "star star-large",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StarSpec {
    pub size: StarSize,
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay_secs: f64,
}

fn star_field(rng: &mut impl Rng, count: usize) -> Vec<StarSpec> {
    (0..count)
        .map(|_| StarSpec {
            size: StarSize::bucket(rng.gen_range(1.0..4.0)),
            left_pct: rng.gen_range(0.0..100.0),
            top_pct: rng.gen_range(0.0..100.0),
            delay_secs: rng.gen_range(0.0..3.0),
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloudTint {
    Pink,
    Purple,
    Blue,
}

impl CloudTint {
    const ALL: [Self; 3] = [Self::Pink, Self::Purple, Self::Blue];

    fn gradient(&self) -> &'static str {
        match self {
            Self::Pink => "linear-gradient(135deg, var(--pink-dream), var(--pink-light))",
            Self::Purple => "linear-gradient(135deg, var(--purple-dream), var(--purple-light))",
            Self::Blue => "linear-gradient(135deg, var(--blue-dream), var(--blue-light))",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CloudSpec {
    pub width_px: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub drift_secs: f64,
    pub delay_secs: f64,
    pub opacity: f64,
    pub tint: CloudTint,
}

impl CloudSpec {
    /// Clouds keep the same silhouette no matter how wide they are drawn.
    pub fn height_px(&self) -> f64 {
        self.width_px * 0.3
    }
}

fn cloud_field(rng: &mut impl Rng, count: usize) -> Vec<CloudSpec> {
    (0..count)
        .map(|_| CloudSpec {
            width_px: rng.gen_range(50.0..150.0),
            left_pct: rng.gen_range(0.0..100.0),
            top_pct: rng.gen_range(0.0..100.0),
            drift_secs: rng.gen_range(20.0..60.0),
            delay_secs: rng.gen_range(0.0..10.0),
            opacity: rng.gen_range(0.2..0.5),
            tint: CloudTint::ALL[rng.gen_range(0..CloudTint::ALL.len())],
        })
        .collect()
}

/// Parallax speed for the cloud at the given index: later clouds scroll
/// faster, which reads as depth.
fn parallax_speed(index: usize) -> f64 {
    0.3 + index as f64 * 0.1
}

#[derive(Clone, PartialEq, Props)]
struct StarProps {
    spec: StarSpec,
}

#[component]
fn Star(props: StarProps) -> Element {
    let class = props.spec.size.class();
    let style = format!(
        "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s;",
        props.spec.left_pct, props.spec.top_pct, props.spec.delay_secs,
    );

    rsx! {
        div { class: "{class}", style: "{style}" }
    }
}

#[derive(Clone, PartialEq, Props)]
struct CloudProps {
    spec: CloudSpec,
    index: usize,
    scroll_y: f64,
}

#[component]
fn Cloud(props: CloudProps) -> Element {
    let offset = -(props.scroll_y * parallax_speed(props.index));
    let style = format!(
        "width: {:.0}px; height: {:.0}px; left: {:.2}%; top: {:.2}%; background: {}; \
         animation-duration: {:.1}s; animation-delay: {:.1}s; opacity: {:.2}; \
         transform: translateY({:.1}px);",
        props.spec.width_px,
        props.spec.height_px(),
        props.spec.left_pct,
        props.spec.top_pct,
        props.spec.tint.gradient(),
        props.spec.drift_secs,
        props.spec.delay_secs,
        props.spec.opacity,
        offset,
    );

    rsx! {
        div { class: "cloud", style: "{style}" }
    }
}

/// Fixed decorative layers behind every page: the twinkling star field and
/// the drifting clouds, generated once when the app mounts.
#[component]
pub fn Backdrop() -> Element {
    let stars = use_hook(|| star_field(&mut rand::thread_rng(), STAR_COUNT));
    let clouds = use_hook(|| cloud_field(&mut rand::thread_rng(), CLOUD_COUNT));

    let scroll_y = use_signal(|| 0.0f64);

    use_hook(move || {
        if let Err(err) = dom::on_window_scroll(move |offset| {
            let mut scroll_y = scroll_y;
            scroll_y.set(offset);
        }) {
            console_error!(format!("parallax scroll listener unavailable: {err}"));
        }
    });

    rsx! {
        div { class: "stars-bg",
            for (index, star) in stars.into_iter().enumerate() {
                Star { key: "{index}", spec: star }
            }
        }
        div { class: "cloud-bg",
            for (index, cloud) in clouds.into_iter().enumerate() {
                Cloud {
                    key: "{index}",
                    spec: cloud,
                    index: index,
                    scroll_y: scroll_y(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_sizes_bucket_on_documented_thresholds() {
        assert_eq!(StarSize::bucket(1.0), StarSize::Small);
        assert_eq!(StarSize::bucket(1.49), StarSize::Small);
        assert_eq!(StarSize::bucket(1.5), StarSize::Medium);
        assert_eq!(StarSize::bucket(2.49), StarSize::Medium);
        assert_eq!(StarSize::bucket(2.5), StarSize::Large);
        assert_eq!(StarSize::bucket(3.99), StarSize::Large);
    }

    #[test]
    fn star_field_respects_count_and_ranges() {
        let stars = star_field(&mut rand::thread_rng(), STAR_COUNT);

        assert_eq!(stars.len(), STAR_COUNT);
        for star in stars {
            assert!((0.0..100.0).contains(&star.left_pct));
            assert!((0.0..100.0).contains(&star.top_pct));
            assert!((0.0..3.0).contains(&star.delay_secs));
        }
    }

    #[test]
    fn cloud_field_respects_count_and_ranges() {
        let clouds = cloud_field(&mut rand::thread_rng(), CLOUD_COUNT);

        assert_eq!(clouds.len(), CLOUD_COUNT);
        for cloud in clouds {
            assert!((50.0..150.0).contains(&cloud.width_px));
            assert!((cloud.height_px() - cloud.width_px * 0.3).abs() < f64::EPSILON);
            assert!((20.0..60.0).contains(&cloud.drift_secs));
            assert!((0.0..10.0).contains(&cloud.delay_secs));
            assert!((0.2..0.5).contains(&cloud.opacity));
        }
    }

    #[test]
    fn parallax_speed_deepens_with_index() {
        assert!((parallax_speed(0) - 0.3).abs() < f64::EPSILON);
        assert!((parallax_speed(3) - 0.6).abs() < f64::EPSILON);
        assert!(parallax_speed(9) > parallax_speed(0));
    }
}
