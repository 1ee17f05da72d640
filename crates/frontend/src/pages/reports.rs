//! Reports page: the controller that owns the authoritative report list.

use report_types::{remove_report, PokemonType, Report};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::{
    Notifier, ReportsTable, Toast, ToastAction, ToastKind, ToastQueue, ToastStack, TypeSelector,
};
use crate::log::console_error;

const TOAST_DISMISS_MS: u32 = 4_000;

/// Reports page component.
#[function_component(ReportsPage)]
pub fn reports_page() -> Html {
    let pokemon_types = use_state(Vec::<PokemonType>::new);
    let reports = use_state(Vec::<Report>::new);
    let loading_types = use_state(|| true);
    let loading_reports = use_state(|| true);
    let refreshing = use_state(|| false);
    let banner = use_state(|| None::<String>);
    let selected_type = use_state(String::new);
    let toasts = use_reducer(ToastQueue::default);
    let toast_seq = use_mut_ref(|| 0u32);

    let notify = {
        let toasts = toasts.dispatcher();
        let toast_seq = toast_seq.clone();
        Notifier(Callback::from(move |(kind, text): (ToastKind, String)| {
            let id = {
                let mut seq = toast_seq.borrow_mut();
                *seq = seq.wrapping_add(1);
                *seq
            };
            toasts.dispatch(ToastAction::Push(Toast { id, kind, text }));

            let toasts = toasts.clone();
            gloo_timers::callback::Timeout::new(TOAST_DISMISS_MS, move || {
                toasts.dispatch(ToastAction::Dismiss(id));
            })
            .forget();
        }))
    };

    // Initial loads: the type enumeration and the report list run in
    // parallel and fail independently; either failure raises the persistent
    // banner without blocking the other load.
    {
        let pokemon_types = pokemon_types.clone();
        let loading_types = loading_types.clone();
        let reports = reports.clone();
        let loading_reports = loading_reports.clone();
        let banner = banner.clone();

        use_effect_with((), move |_| {
            {
                let banner = banner.clone();
                spawn_local(async move {
                    match api::fetch_pokemon_types().await {
                        Ok(types) => pokemon_types.set(types),
                        Err(err) => {
                            console_error(&format!("Failed to load Pokémon types: {err}"));
                            banner.set(Some(
                                "Could not load the Pokémon types. Please try again later."
                                    .to_string(),
                            ));
                        }
                    }
                    loading_types.set(false);
                });
            }

            spawn_local(async move {
                match api::list_reports().await {
                    Ok(list) => reports.set(list),
                    Err(err) => {
                        console_error(&format!("Failed to load reports: {err}"));
                        banner.set(Some(
                            "Could not load the reports. Please try again later.".to_string(),
                        ));
                    }
                }
                loading_reports.set(false);
            });
        });
    }

    let on_type_change = {
        let selected_type = selected_type.clone();
        Callback::from(move |name: String| selected_type.set(name))
    };

    // Append the created record; the table's derived sort owns ordering.
    let on_created = {
        let reports = reports.clone();
        let notify = notify.clone();
        Callback::from(move |report: Report| {
            let type_name = report
                .pokemon_type
                .clone()
                .unwrap_or_else(|| "unknown".to_string());
            let mut next = (*reports).clone();
            next.push(report);
            reports.set(next);
            notify.success(format!("Generated a new report for type {type_name}."));
        })
    };

    let on_refresh = {
        let reports = reports.clone();
        let refreshing = refreshing.clone();
        let notify = notify.clone();
        Callback::from(move |_: ()| {
            if *refreshing {
                return;
            }
            refreshing.set(true);

            let reports = reports.clone();
            let refreshing = refreshing.clone();
            let notify = notify.clone();
            spawn_local(async move {
                match api::list_reports().await {
                    Ok(list) => {
                        reports.set(list);
                        notify.success("Reports are up to date.");
                    }
                    Err(err) => {
                        console_error(&format!("Failed to refresh reports: {err}"));
                        notify.error("Could not refresh the reports. Try again.");
                    }
                }
                refreshing.set(false);
            });
        })
    };

    let on_delete = {
        let reports = reports.clone();
        let notify = notify.clone();
        Callback::from(move |report_id: String| {
            let reports = reports.clone();
            let notify = notify.clone();
            spawn_local(async move {
                match api::delete_report(&report_id).await {
                    Ok(()) => {
                        reports.set(remove_report(&reports, &report_id));
                        notify.success(format!("Report {report_id} deleted."));
                    }
                    Err(err) => {
                        console_error(&format!("Failed to delete report {report_id}: {err}"));
                        notify.error("Could not delete the report.");
                    }
                }
            });
        })
    };

    let on_download = Callback::from(|url: String| {
        if let Some(window) = web_sys::window() {
            if window.open_with_url_and_target(&url, "_blank").is_err() {
                console_error("Failed to open the download URL");
            }
        }
    });

    html! {
        <div class="card">
            <div class="card-header">
                <h1 class="card-title">{"Pokémon Reports Generator"}</h1>
            </div>

            if let Some(message) = banner.as_ref() {
                <div class="banner banner-error">
                    <strong>{"Error"}</strong>
                    <span>{ message }</span>
                </div>
            }

            <TypeSelector
                pokemon_types={(*pokemon_types).clone()}
                selected_type={(*selected_type).clone()}
                on_type_change={on_type_change}
                loading={*loading_types}
                on_created={on_created}
            />

            <ReportsTable
                reports={(*reports).clone()}
                loading={*loading_reports}
                refreshing={*refreshing}
                on_refresh={on_refresh}
                on_download={on_download}
                on_delete={on_delete}
                notifier={notify}
            />

            <ToastStack toasts={toasts.toasts.clone()} />
        </div>
    }
}
