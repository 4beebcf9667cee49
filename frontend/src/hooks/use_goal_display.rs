use shared::{FilterState, GoalListing, LoadSequencer, LoadTicket, NO_GOALS_MESSAGE};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::{
    api::{ApiClient, ApiError},
    date_utils,
    logging::Logger,
};

const COMPONENT: &str = "goal-display";

/// What the goal display region currently shows
#[derive(Clone, Debug, PartialEq)]
pub enum DisplayContent {
    Loading,
    Empty,
    /// Server-rendered markup, inserted verbatim
    Goals(AttrValue),
    Failed(String),
}

impl DisplayContent {
    pub fn from_outcome(outcome: Result<GoalListing, ApiError>) -> Self {
        match outcome {
            Ok(GoalListing::Empty) => DisplayContent::Empty,
            Ok(GoalListing::Fragment(markup)) => DisplayContent::Goals(AttrValue::from(markup)),
            Err(e) => DisplayContent::Failed(e.user_message()),
        }
    }

    pub fn empty_message() -> &'static str {
        NO_GOALS_MESSAGE
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GoalDisplayState {
    pub content: DisplayContent,
    /// True while a listing request is outstanding; filter controls are disabled meanwhile
    pub loading: bool,
}

/// Display state once the load for `ticket` finished, or None when a newer
/// reload has been issued since and this response must be dropped.
pub fn settle(
    ticket: LoadTicket,
    outcome: Result<GoalListing, ApiError>,
    sequencer: &LoadSequencer,
) -> Option<GoalDisplayState> {
    if !sequencer.is_current(ticket) {
        return None;
    }
    Some(GoalDisplayState {
        content: DisplayContent::from_outcome(outcome),
        loading: false,
    })
}

pub struct UseGoalDisplayResult {
    pub state: GoalDisplayState,
    pub reload: Callback<()>,
}

/// Loads the goal table for `filter` whenever it changes, and on demand through `reload`.
///
/// Every load takes a ticket from a sequencer; a response whose ticket is no
/// longer the latest is dropped, so the last issued reload always wins.
#[hook]
pub fn use_goal_display(api_client: &ApiClient, filter: &FilterState) -> UseGoalDisplayResult {
    let content = use_state(|| DisplayContent::Loading);
    let loading = use_state(|| false);
    let sequencer = use_mut_ref(LoadSequencer::default);

    let reload = {
        let api_client = api_client.clone();
        let content = content.clone();
        let loading = loading.clone();
        let sequencer = sequencer.clone();

        use_callback(filter.clone(), move |_: (), filter| {
            let ticket = sequencer.borrow_mut().issue();
            let query = filter.query(date_utils::today());

            let api_client = api_client.clone();
            let content = content.clone();
            let loading = loading.clone();
            let sequencer = sequencer.clone();

            content.set(DisplayContent::Loading);
            loading.set(true);

            spawn_local(async move {
                Logger::debug_with_component(
                    COMPONENT,
                    &format!("loading goals: {}", query.to_query_string()),
                );

                let outcome = api_client.fetch_goals(&query).await;

                if let Err(e) = &outcome {
                    Logger::error_with_component(COMPONENT, &format!("Failed to load goals: {}", e));
                }

                let settled = settle(ticket, outcome, &sequencer.borrow());
                match settled {
                    Some(state) => {
                        content.set(state.content);
                        loading.set(state.loading);
                    }
                    None => {
                        Logger::debug_with_component(COMPONENT, "discarding response from superseded reload");
                    }
                }
            });
        })
    };

    {
        let reload = reload.clone();
        use_effect_with(filter.clone(), move |_| {
            reload.emit(());
            || ()
        });
    }

    UseGoalDisplayResult {
        state: GoalDisplayState {
            content: (*content).clone(),
            loading: *loading,
        },
        reload,
    }
}
