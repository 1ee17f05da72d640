//! Transient toast notifications.

use std::rc::Rc;

use yew::prelude::*;

/// Severity of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// One visible notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub text: String,
}

/// Reducer state holding the active toasts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastQueue {
    pub toasts: Vec<Toast>,
}

/// Queue operations dispatched by the page controller.
pub enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => toasts.retain(|toast| toast.id != id),
        }
        Rc::new(Self { toasts })
    }
}

/// Handle children use to raise notifications without owning the queue.
#[derive(Clone, PartialEq)]
pub struct Notifier(pub Callback<(ToastKind, String)>);

impl Notifier {
    pub fn success(&self, text: impl Into<String>) {
        self.0.emit((ToastKind::Success, text.into()));
    }

    pub fn error(&self, text: impl Into<String>) {
        self.0.emit((ToastKind::Error, text.into()));
    }
}

/// Properties for ToastStack component.
#[derive(Properties, PartialEq)]
pub struct ToastStackProps {
    pub toasts: Vec<Toast>,
}

/// Fixed-position stack rendering the active toasts.
#[function_component(ToastStack)]
pub fn toast_stack(props: &ToastStackProps) -> Html {
    html! {
        <div class="toast-stack">
            { for props.toasts.iter().map(|toast| {
                let class = match toast.kind {
                    ToastKind::Success => "toast success",
                    ToastKind::Error => "toast error",
                };
                html! { <div key={toast.id} class={class}>{ &toast.text }</div> }
            })}
        </div>
    }
}
