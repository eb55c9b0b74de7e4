use dioxus::prelude::*;
use gloo_timers::callback::Timeout;

use tracing::info;

use crate::components::confetti;
use crate::components::notification::{notify, NotifyKind};

/// Simulated transport delay.  Nothing actually leaves the browser.
const SEND_DELAY_MS: u32 = 1_500;

const SENT_MESSAGE: &str =
    "✨ Your message has been sent! I'll get back to you within 24 hours.";
const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

/// Names of the required fields left empty, in display order.
fn missing_fields(name: &str, email: &str, subject: &str, message: &str) -> Vec<&'static str> {
    let mut missing = Vec::new();

    if name.trim().is_empty() {
        missing.push("name");
    }
    if email.trim().is_empty() {
        missing.push("email");
    }
    if subject.trim().is_empty() {
        missing.push("subject");
    }
    if message.trim().is_empty() {
        missing.push("message");
    }

    missing
}

#[component]
pub fn Contact() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut sending = use_signal(|| false);

    let handle_submit = move |event: FormEvent| {
        event.prevent_default();

        if sending() {
            return;
        }

        let missing = missing_fields(&name(), &email(), &subject(), &message());
        if !missing.is_empty() {
            info!("contact form rejected, missing {missing:?}");
            notify(NotifyKind::Error, MISSING_FIELDS_MESSAGE);
            return;
        }

        sending.set(true);

        Timeout::new(SEND_DELAY_MS, move || {
            name.set(String::new());
            email.set(String::new());
            subject.set(String::new());
            message.set(String::new());
            sending.set(false);

            notify(NotifyKind::Success, SENT_MESSAGE);
            confetti::celebrate();
        })
        .forget();
    };

    rsx! {
        section { class: "page contact-page",
            div { class: "container",
                h1 { class: "page-title", "Get in Touch" }
                p { class: "page-subtitle",
                    "Questions, ideas, or just want to say hi? Drop a note below."
                }

                form { class: "contact-form", onsubmit: handle_submit,
                    div { class: "form-row",
                        div { class: "form-field",
                            label { r#for: "contact-name", "Name" }
                            input {
                                id: "contact-name",
                                name: "name",
                                value: "{name}",
                                oninput: move |event| name.set(event.value()),
                            }
                        }
                        div { class: "form-field",
                            label { r#for: "contact-email", "Email" }
                            input {
                                id: "contact-email",
                                name: "email",
                                value: "{email}",
                                oninput: move |event| email.set(event.value()),
                            }
                        }
                    }
                    div { class: "form-field",
                        label { r#for: "contact-subject", "Subject" }
                        input {
                            id: "contact-subject",
                            name: "subject",
                            value: "{subject}",
                            oninput: move |event| subject.set(event.value()),
                        }
                    }
                    div { class: "form-field",
                        label { r#for: "contact-message", "Message" }
                        textarea {
                            id: "contact-message",
                            name: "message",
                            rows: "6",
                            value: "{message}",
                            oninput: move |event| message.set(event.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: sending(),
                        if sending() {
                            "Sending..."
                        } else {
                            "Send Message"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_submissions_pass() {
        assert!(missing_fields("Ada", "ada@example.com", "Hello", "A note.").is_empty());
    }

    #[test]
    fn each_empty_field_is_reported() {
        assert_eq!(
            missing_fields("", "ada@example.com", "Hello", "A note."),
            vec!["name"]
        );
        assert_eq!(
            missing_fields("Ada", "", "Hello", "A note."),
            vec!["email"]
        );
        assert_eq!(
            missing_fields("Ada", "ada@example.com", "", "A note."),
            vec!["subject"]
        );
        assert_eq!(
            missing_fields("Ada", "ada@example.com", "Hello", ""),
            vec!["message"]
        );
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        assert_eq!(
            missing_fields("  ", "\t", "Hello", "A note."),
            vec!["name", "email"]
        );
    }

    #[test]
    fn all_empty_reports_every_field() {
        assert_eq!(
            missing_fields("", "", "", ""),
            vec!["name", "email", "subject", "message"]
        );
    }
}
