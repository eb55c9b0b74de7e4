use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::*;
use gloo_timers::callback::Timeout;

/// How long a toast stays on screen, matching the slide-in/fade-out timing
/// in the stylesheet.
const DISMISS_MS: u32 = 3_300;

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

pub static NOTIFICATIONS: GlobalSignal<Vec<Notification>> = Signal::global(Vec::new);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotifyKind {
    Success,
    Error,
}

impl NotifyKind {
    fn class(&self) -> &'static str {
        match self {
            NotifyKind::Success => "notification notification-success",
            NotifyKind::Error => "notification notification-error",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            NotifyKind::Success => "✓",
            NotifyKind::Error => "!",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: usize,
    pub kind: NotifyKind,
    pub message: String,
}

/// Push a toast and schedule its removal.  Fire-and-forget: if the page is
/// torn down before the timer fires, the callback has nothing left to do.
pub fn notify(kind: NotifyKind, message: impl Into<String>) {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);

    NOTIFICATIONS.with_mut(|list| {
        list.push(Notification {
            id,
            kind,
            message: message.into(),
        })
    });

    Timeout::new(DISMISS_MS, move || {
        NOTIFICATIONS.with_mut(|list| dismiss(list, id));
    })
    .forget();
}

fn dismiss(list: &mut Vec<Notification>, id: usize) {
    list.retain(|notification| notification.id != id);
}

#[derive(Clone, PartialEq, Props)]
struct NotificationCardProps {
    notification: Notification,
}

#[component]
fn NotificationCard(props: NotificationCardProps) -> Element {
    let kind_class = props.notification.kind.class();
    let icon = props.notification.kind.icon();
    let message = props.notification.message.clone();

    rsx! {
        div { class: "{kind_class}",
            span { class: "notification-icon", "{icon}" }
            span { "{message}" }
        }
    }
}

#[component]
pub fn NotificationTray() -> Element {
    let notifications = NOTIFICATIONS.read().clone();

    rsx! {
        div { class: "notification-tray",
            for notification in notifications {
                NotificationCard { key: "{notification.id}", notification: notification.clone() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: usize) -> Notification {
        Notification {
            id,
            kind: NotifyKind::Success,
            message: format!("toast {id}"),
        }
    }

    #[test]
    fn dismiss_removes_only_the_expired_toast() {
        let mut list = vec![toast(0), toast(1), toast(2)];
        dismiss(&mut list, 1);
        assert_eq!(
            list.iter().map(|n| n.id).collect::<Vec<_>>(),
            vec![0, 2]
        );
    }

    #[test]
    fn dismiss_tolerates_unknown_ids() {
        let mut list = vec![toast(0)];
        dismiss(&mut list, 7);
        assert_eq!(list.len(), 1);
    }
}
