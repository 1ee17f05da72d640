//! Skeleton placeholder shown while data loads.

use yew::prelude::*;

/// Properties for Skeleton component.
#[derive(Properties, PartialEq)]
pub struct SkeletonProps {
    /// Number of placeholder rows.
    #[prop_or(1)]
    pub rows: usize,
}

/// Skeleton placeholder component.
#[function_component(Skeleton)]
pub fn skeleton(props: &SkeletonProps) -> Html {
    html! {
        <div class="skeleton-group">
            { for (0..props.rows).map(|index| {
                html! { <div key={index} class="skeleton-row"></div> }
            })}
        </div>
    }
}
