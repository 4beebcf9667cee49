use shared::{format_date, FilterState, GoalStatus};
use yew::prelude::*;

use crate::hooks::use_goal_filters::UseGoalFiltersActions;

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub filter: FilterState,
    /// Disables every control while a listing request is outstanding
    pub disabled: bool,
    pub actions: UseGoalFiltersActions,
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let filter = &props.filter;

    html! {
        <fieldset class="goal-filters" disabled={props.disabled}>
            <div class="form-group">
                <label for="filter-start">{"From"}</label>
                <input
                    type="date"
                    id="filter-start"
                    name="start"
                    value={format_date(filter.start())}
                    onchange={props.actions.on_start_change.clone()}
                />
            </div>
            <div class="form-group">
                <label for="filter-end">{"To"}</label>
                <input
                    type="date"
                    id="filter-end"
                    name="end"
                    value={format_date(filter.end())}
                    onchange={props.actions.on_end_change.clone()}
                />
            </div>
            <div class="status-filters">
                {for GoalStatus::ALL.iter().map(|status| {
                    html! {
                        <label class="status-filter">
                            <input
                                type="checkbox"
                                name="status"
                                value={status.label()}
                                checked={filter.is_selected(*status)}
                                onchange={props.actions.on_status_change.clone()}
                            />
                            {status.label()}
                        </label>
                    }
                })}
            </div>
        </fieldset>
    }
}
