//! Generic two-phase confirmation dialog.
//!
//! The dialog never performs the guarded action itself; the caller injects
//! the confirm handler and owns whatever that action does.

use yew::prelude::*;

/// Properties for ConfirmDialog component.
#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub open: bool,
    pub title: String,
    pub description: String,
    #[prop_or_else(|| "Delete".to_string())]
    pub confirm_label: String,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Confirmation dialog component.
#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    if !props.open {
        return Html::default();
    }

    let on_backdrop_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };
    let on_cancel_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };
    let on_confirm_click = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };
    let swallow_click = Callback::from(|event: MouseEvent| event.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={swallow_click}>
                <h2 class="modal-title">{ &props.title }</h2>
                <p class="modal-description">{ &props.description }</p>
                <div class="modal-actions">
                    <button class="btn btn-secondary" onclick={on_cancel_click}>
                        {"Cancel"}
                    </button>
                    <button class="btn btn-danger" onclick={on_confirm_click}>
                        { &props.confirm_label }
                    </button>
                </div>
            </div>
        </div>
    }
}
