use gloo::timers::future::TimeoutFuture;
use shared::{GoalInputTable, GoalSubmission};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlFormElement;
use yew::prelude::*;

use crate::components::goal_input_table::GoalInputTableView;
use crate::hooks::use_goal_input_table::UseGoalInputTableActions;
use crate::services::{
    api::{ApiClient, ApiError},
    browser, date_utils,
    logging::Logger,
};

const COMPONENT: &str = "add-goals-form";
const SUCCESS_MESSAGE_MS: u32 = 3000;

/// What the form does once the server has answered a submission
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitEffects {
    pub reset_table: bool,
    pub reload: bool,
    pub show_success: bool,
    /// Blocking alert text; failures show the server's raw message
    pub alert: Option<String>,
}

impl SubmitEffects {
    pub fn from_outcome(outcome: &Result<String, ApiError>) -> Self {
        match outcome {
            Ok(_) => Self {
                reset_table: true,
                reload: true,
                show_success: true,
                alert: None,
            },
            Err(e) => Self {
                reset_table: false,
                reload: false,
                show_success: false,
                alert: Some(e.user_message()),
            },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AddGoalsFormProps {
    pub api_client: ApiClient,
    pub table: GoalInputTable,
    pub table_actions: UseGoalInputTableActions,
    /// Fired after a successful submission so the goal table reloads
    pub on_saved: Callback<()>,
}

#[function_component(AddGoalsForm)]
pub fn add_goals_form(props: &AddGoalsFormProps) -> Html {
    let submitting = use_state(|| false);
    let form_success = use_state(|| false);

    let on_submit = {
        let api_client = props.api_client.clone();
        let table = props.table.clone();
        let reset_table = props.table_actions.reset.clone();
        let on_saved = props.on_saved.clone();
        let submitting = submitting.clone();
        let form_success = form_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let form: HtmlFormElement = e.target_unchecked_into();
            let submission = GoalSubmission::from_table(&table, date_utils::today());

            let api_client = api_client.clone();
            let reset_table = reset_table.clone();
            let on_saved = on_saved.clone();
            let submitting = submitting.clone();
            let form_success = form_success.clone();

            spawn_local(async move {
                submitting.set(true);
                form_success.set(false);

                let goal_count = submission.entries().len();
                let outcome = api_client
                    .send_form(&form.method(), &form.action(), submission.form_body())
                    .await;

                match &outcome {
                    Ok(_) => Logger::info_with_component(COMPONENT, &format!("saved {} goal(s)", goal_count)),
                    Err(e) => Logger::error_with_component(COMPONENT, &format!("Failed to save goals: {}", e)),
                }

                let effects = SubmitEffects::from_outcome(&outcome);
                if effects.reset_table {
                    form.reset();
                    reset_table.emit(());
                }
                if effects.reload {
                    on_saved.emit(());
                }
                if effects.show_success {
                    form_success.set(true);
                    let form_success_clear = form_success.clone();
                    spawn_local(async move {
                        TimeoutFuture::new(SUCCESS_MESSAGE_MS).await;
                        form_success_clear.set(false);
                    });
                }
                if let Some(message) = effects.alert {
                    if let Err(js) = browser::alert(&message) {
                        Logger::error_with_component(COMPONENT, &format!("alert failed: {:?}", js));
                    }
                }

                submitting.set(false);
            });
        })
    };

    let action = props
        .api_client
        .config()
        .endpoint(&props.api_client.config().goals_path);

    html! {
        <section class="add-goals-section">
            <h2>{"Add goals"}</h2>

            {if *form_success {
                html! {
                    <div class="form-message success">
                        {"Goals saved"}
                    </div>
                }
            } else { html! {} }}

            <form class="add-goals-form" action={action} method="post" onsubmit={on_submit}>
                <GoalInputTableView
                    table={props.table.clone()}
                    actions={props.table_actions.clone()}
                    disabled={*submitting}
                />
                <button
                    id="submit-button"
                    type="submit"
                    class="btn btn-primary"
                    disabled={*submitting}
                >
                    {if *submitting { "Saving..." } else { "Save goals" }}
                </button>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_submission_keeps_rows_and_skips_reload() {
        let outcome = Err(ApiError::Server {
            status: 400,
            body: "goal does not have a title".to_string(),
        });

        let effects = SubmitEffects::from_outcome(&outcome);

        assert!(!effects.reset_table);
        assert!(!effects.reload);
        assert!(!effects.show_success);
        assert_eq!(effects.alert.as_deref(), Some("goal does not have a title"));
    }

    #[test]
    fn test_unreachable_server_alerts_without_reset() {
        let outcome = Err(ApiError::Network("connection refused".to_string()));

        let effects = SubmitEffects::from_outcome(&outcome);

        assert!(!effects.reset_table);
        assert!(!effects.reload);
        assert!(effects.alert.unwrap().contains("connection refused"));
    }

    #[test]
    fn test_accepted_submission_resets_and_reloads() {
        let effects = SubmitEffects::from_outcome(&Ok("OK".to_string()));

        assert_eq!(
            effects,
            SubmitEffects {
                reset_table: true,
                reload: true,
                show_success: true,
                alert: None,
            }
        );
    }
}
