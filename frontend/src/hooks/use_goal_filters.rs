use std::rc::Rc;

use chrono::NaiveDate;
use shared::{format_date, parse_date, FilterState, GoalStatus};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::logging::Logger;

const COMPONENT: &str = "goal-filters";

pub enum FilterAction {
    SetStart(NaiveDate),
    SetEnd(NaiveDate),
    ToggleStatus(GoalStatus),
}

#[derive(Clone, PartialEq)]
pub struct FilterStore(pub FilterState);

impl Reducible for FilterStore {
    type Action = FilterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            FilterAction::SetStart(date) => self.0.with_start(date),
            FilterAction::SetEnd(date) => self.0.with_end(date),
            FilterAction::ToggleStatus(status) => match self.0.toggled(status) {
                Ok(next) => next,
                Err(_) => return self,
            },
        };

        if next == self.0 {
            self
        } else {
            Rc::new(FilterStore(next))
        }
    }
}

pub struct UseGoalFiltersResult {
    pub filter: FilterState,
    pub actions: UseGoalFiltersActions,
}

#[derive(Clone, PartialEq)]
pub struct UseGoalFiltersActions {
    pub on_start_change: Callback<Event>,
    pub on_end_change: Callback<Event>,
    pub on_status_change: Callback<Event>,
}

/// New date typed into a filter input. A cleared or unparsable value is
/// rejected and the input is written back to `current`.
fn resolve_date_change(input: &HtmlInputElement, current: NaiveDate) -> Option<NaiveDate> {
    match parse_date(&input.value()) {
        Some(date) => Some(date),
        None => {
            input.set_value(&format_date(current));
            Logger::debug_with_component(COMPONENT, "ignoring empty date, restoring previous value");
            None
        }
    }
}

/// Status a checkbox change toggles, or None when the toggle is rejected.
/// Unchecking the only selected status puts the tick back.
fn resolve_status_change(input: &HtmlInputElement, filter: &FilterState) -> Option<GoalStatus> {
    let status = match input.value().parse::<GoalStatus>() {
        Ok(status) => status,
        Err(err) => {
            Logger::warn_with_component(COMPONENT, &err.to_string());
            return None;
        }
    };

    match filter.toggled(status) {
        Ok(_) => Some(status),
        Err(err) => {
            input.set_checked(true);
            Logger::warn_with_component(COMPONENT, &err.to_string());
            None
        }
    }
}

#[hook]
pub fn use_goal_filters(today: NaiveDate, window_days: u32) -> UseGoalFiltersResult {
    let store = use_reducer(|| FilterStore(FilterState::default_for(today, window_days)));

    let on_start_change = use_callback(store.clone(), move |e: Event, store| {
        let input: HtmlInputElement = e.target_unchecked_into();
        if let Some(date) = resolve_date_change(&input, store.0.start()) {
            store.dispatch(FilterAction::SetStart(date));
        }
    });

    let on_end_change = use_callback(store.clone(), move |e: Event, store| {
        let input: HtmlInputElement = e.target_unchecked_into();
        if let Some(date) = resolve_date_change(&input, store.0.end()) {
            store.dispatch(FilterAction::SetEnd(date));
        }
    });

    // Depends on the store so the rejection check sees the latest selection
    let on_status_change = use_callback(store.clone(), move |e: Event, store| {
        let input: HtmlInputElement = e.target_unchecked_into();
        if let Some(status) = resolve_status_change(&input, &store.0) {
            store.dispatch(FilterAction::ToggleStatus(status));
        }
    });

    UseGoalFiltersResult {
        filter: store.0.clone(),
        actions: UseGoalFiltersActions {
            on_start_change,
            on_end_change,
            on_status_change,
        },
    }
}
