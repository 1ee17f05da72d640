//! Sortable reports table with download, refresh, and delete actions.

use report_types::{sort_reports, Report, SortDirection};
use yew::prelude::*;

use crate::components::{ConfirmDialog, Notifier, Skeleton};

/// Properties for ReportsTable component.
#[derive(Properties, PartialEq)]
pub struct ReportsTableProps {
    /// Authoritative report list, owned by the page controller. The table
    /// only ever sorts a copy of it.
    pub reports: Vec<Report>,
    pub loading: bool,
    pub refreshing: bool,
    pub on_refresh: Callback<()>,
    /// External opener for a resolved download URL.
    pub on_download: Callback<String>,
    /// Delete handler, invoked with the confirmed identifier.
    pub on_delete: Callback<String>,
    pub notifier: Notifier,
}

fn display(field: &Option<String>) -> String {
    field.clone().unwrap_or_else(|| "N/A".to_string())
}

/// Reports table component.
#[function_component(ReportsTable)]
pub fn reports_table(props: &ReportsTableProps) -> Html {
    let sort_direction = use_state(SortDirection::default);
    let pending_delete = use_state(|| None::<Report>);

    let sorted = use_memo(
        (props.reports.clone(), *sort_direction),
        |(reports, direction)| sort_reports(reports, *direction),
    );

    let toggle_sort = {
        let sort_direction = sort_direction.clone();
        Callback::from(move |_: MouseEvent| sort_direction.set(sort_direction.toggle()))
    };

    let on_refresh_click = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_: MouseEvent| on_refresh.emit(()))
    };

    let confirm_delete = {
        let pending_delete = pending_delete.clone();
        let on_delete = props.on_delete.clone();
        Callback::from(move |_: ()| {
            if let Some(id) = pending_delete
                .as_ref()
                .and_then(|report| report.report_id.clone())
            {
                on_delete.emit(id);
            }
            // The confirmation resets regardless of the delete outcome.
            pending_delete.set(None);
        })
    };

    let cancel_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_: ()| pending_delete.set(None))
    };

    let sort_label = match *sort_direction {
        SortDirection::Descending => "Newest first",
        SortDirection::Ascending => "Oldest first",
    };

    html! {
        <div class="reports-section">
            <div class="table-toolbar">
                <h2 class="table-title">{"Reports"}</h2>
                <div class="toolbar-actions">
                    <button class="btn btn-outline" onclick={toggle_sort}>
                        { sort_label }
                    </button>
                    <button
                        class="btn btn-outline"
                        onclick={on_refresh_click}
                        disabled={props.loading || props.refreshing}
                    >
                        { if props.refreshing { "Refreshing..." } else { "Refresh" } }
                    </button>
                </div>
            </div>

            if props.loading {
                <Skeleton rows={3} />
            } else {
                <table class="reports-table">
                    <caption>{"List of Pokémon reports available for download"}</caption>
                    <thead>
                        <tr>
                            <th>{"ReportId"}</th>
                            <th>{"Status"}</th>
                            <th>{"PokemonType"}</th>
                            <th>{"Created"}</th>
                            <th>{"Updated"}</th>
                            <th>{"Download"}</th>
                            <th>{"Delete"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        if sorted.is_empty() {
                            <tr>
                                <td colspan="7" class="empty-cell">{"No reports available"}</td>
                            </tr>
                        } else {
                            { for sorted.iter().enumerate().map(|(index, report)| {
                                render_row(report, index, props, &pending_delete)
                            })}
                        }
                    </tbody>
                </table>
            }

            <ConfirmDialog
                open={pending_delete.is_some()}
                title={"Delete report?".to_string()}
                description={format!(
                    "Are you sure you want to delete report {}? This action cannot be undone.",
                    display(&pending_delete.as_ref().and_then(|r| r.report_id.clone())),
                )}
                on_confirm={confirm_delete}
                on_cancel={cancel_delete}
            />
        </div>
    }
}

fn render_row(
    report: &Report,
    index: usize,
    props: &ReportsTableProps,
    pending_delete: &UseStateHandle<Option<Report>>,
) -> Html {
    let key = report
        .report_id
        .clone()
        .unwrap_or_else(|| format!("row-{index}"));

    let completed = report.is_completed();
    let status_class = if completed {
        "status-badge completed"
    } else {
        "status-badge pending"
    };

    let on_download_click = {
        let on_download = props.on_download.clone();
        let notifier = props.notifier.clone();
        let url = report.url.clone();
        Callback::from(move |_: MouseEvent| match url.clone() {
            Some(url) => on_download.emit(url),
            None => notifier.error("Download URL is not available."),
        })
    };

    let on_ask_delete = {
        let pending_delete = pending_delete.clone();
        let report = report.clone();
        Callback::from(move |_: MouseEvent| pending_delete.set(Some(report.clone())))
    };

    html! {
        <tr key={key}>
            <td>{ display(&report.report_id) }</td>
            <td><span class={status_class}>{ display(&report.status) }</span></td>
            <td class="type-cell">{ display(&report.pokemon_type) }</td>
            <td>{ display(&report.created) }</td>
            <td>{ display(&report.updated) }</td>
            <td>
                if completed {
                    <button class="btn btn-ghost" onclick={on_download_click} title="Download CSV">
                        {"Download"}
                    </button>
                }
            </td>
            <td>
                if completed {
                    <button class="btn btn-ghost" onclick={on_ask_delete} title="Delete report">
                        {"Delete"}
                    </button>
                }
            </td>
        </tr>
    }
}
