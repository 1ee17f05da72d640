//! Pokémon type selector with report creation.

use report_types::{parse_sample_size, PokemonType, Report};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api;
use crate::components::Skeleton;
use crate::log::console_error;

/// Properties for TypeSelector component.
#[derive(Properties, PartialEq)]
pub struct TypeSelectorProps {
    pub pokemon_types: Vec<PokemonType>,
    pub selected_type: String,
    pub on_type_change: Callback<String>,
    pub loading: bool,
    /// Invoked with the created record on success.
    pub on_created: Callback<Report>,
}

/// Type selector component.
#[function_component(TypeSelector)]
pub fn type_selector(props: &TypeSelectorProps) -> Html {
    let sample_size = use_state(String::new);
    let creating = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_select_change = {
        let on_type_change = props.on_type_change.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            on_type_change.emit(select.value());
        })
    };

    let on_sample_input = {
        let sample_size = sample_size.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            sample_size.set(input.value());
        })
    };

    let on_generate = {
        let selected_type = props.selected_type.clone();
        let on_created = props.on_created.clone();
        let sample_size = sample_size.clone();
        let creating = creating.clone();
        let error = error.clone();

        Callback::from(move |_: MouseEvent| {
            error.set(None);

            if selected_type.is_empty() || *creating {
                return;
            }

            // Reject invalid input before any network call.
            let size = match parse_sample_size(&sample_size) {
                Ok(size) => size,
                Err(err) => {
                    error.set(Some(err.to_string()));
                    return;
                }
            };

            creating.set(true);

            let selected_type = selected_type.clone();
            let on_created = on_created.clone();
            let sample_size = sample_size.clone();
            let creating = creating.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::create_report(&selected_type, size).await {
                    Ok(report) => {
                        sample_size.set(String::new());
                        on_created.emit(report);
                    }
                    Err(err) => {
                        console_error(&format!("Failed to create report: {err}"));
                        error.set(Some(
                            "Something went wrong while creating the report.".to_string(),
                        ));
                    }
                }
                creating.set(false);
            });
        })
    };

    html! {
        <div class="selector">
            if props.loading {
                <Skeleton rows={1} />
            } else {
                <select class="type-select" onchange={on_select_change}>
                    <option value="" selected={props.selected_type.is_empty()} disabled={true}>
                        {"Select a Pokémon type"}
                    </option>
                    { for props.pokemon_types.iter().map(|pokemon_type| {
                        html! {
                            <option
                                key={pokemon_type.name.clone()}
                                value={pokemon_type.name.clone()}
                                selected={props.selected_type == pokemon_type.name}
                            >
                                { &pokemon_type.name }
                            </option>
                        }
                    })}
                </select>
            }

            <div class="sample-field">
                <input
                    type="number"
                    min="1"
                    class="sample-input"
                    placeholder="Maximum number of records (optional)"
                    value={(*sample_size).clone()}
                    oninput={on_sample_input}
                />
                if let Some(message) = error.as_ref() {
                    <p class="field-error">{ message }</p>
                }
            </div>

            <button
                class="btn btn-primary"
                onclick={on_generate}
                disabled={props.selected_type.is_empty() || *creating}
            >
                { if *creating { "Generating..." } else { "Generate Report" } }
            </button>
        </div>
    }
}
