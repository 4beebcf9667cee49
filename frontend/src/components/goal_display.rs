use yew::prelude::*;

use crate::hooks::use_goal_display::DisplayContent;

#[derive(Properties, PartialEq)]
pub struct GoalDisplayProps {
    pub content: DisplayContent,
}

#[function_component(GoalDisplay)]
pub fn goal_display(props: &GoalDisplayProps) -> Html {
    html! {
        <section id="goal-display-container" class="goal-display">
            {match &props.content {
                DisplayContent::Loading => html! { <div class="loading-spinner"></div> },
                DisplayContent::Empty => html! { {DisplayContent::empty_message()} },
                DisplayContent::Goals(markup) => Html::from_html_unchecked(markup.clone()),
                DisplayContent::Failed(message) => html! {
                    <div class="form-message error">{message}</div>
                },
            }}
        </section>
    }
}
