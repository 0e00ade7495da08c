//! The single message a view shows at a time: an error, a notice or a success.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Error,
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl StatusMessage {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }
}

/// Renders the message box, or nothing when there is no message.
#[component]
pub fn StatusBanner(#[prop(into)] message: Signal<Option<StatusMessage>>) -> impl IntoView {
    move || {
        message.get().map(|m| {
            let (icon, palette) = match m.kind {
                MessageKind::Error => ("⚠", "error"),
                MessageKind::Info => ("ℹ", "primary"),
                MessageKind::Success => ("✓", "success"),
            };
            let box_style = format!(
                "background: var(--color-{0}-50); border-color: var(--color-{0}-100);",
                palette
            );
            let text_style = format!("color: var(--color-{});", palette);
            let role = if m.is_error() { "alert" } else { "status" };
            view! {
                <div
                    class="warning-box"
                    role=role
                    style=box_style
                >
                    <span class="warning-box__icon" style=text_style.clone()>{icon}</span>
                    <span class="warning-box__text" style=text_style>{m.text}</span>
                </div>
            }
        })
    }
}
