use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::forms::{AddGoalsForm, LoginForm, RegisterForm};
use components::{ActiveView, FilterBar, GoalDisplay, Header};
use hooks::use_goal_display::use_goal_display;
use hooks::use_goal_filters::use_goal_filters;
use hooks::use_goal_input_table::use_goal_input_table;
use hooks::use_session::use_session;
use services::api::ApiClient;
use services::{browser, config, date_utils};

#[derive(Properties, PartialEq)]
struct PageProps {
    api_client: ApiClient,
}

#[function_component(HomePage)]
fn home_page(props: &PageProps) -> Html {
    let api_client = &props.api_client;
    let today = use_memo((), |_| date_utils::today());

    let filters = use_goal_filters(*today, api_client.config().filter_window_days);
    let display = use_goal_display(api_client, &filters.filter);
    let input_table = use_goal_input_table();
    let session = use_session(api_client);
    let active_view = use_state(|| ActiveView::Goals);

    let on_select_view = {
        let active_view = active_view.clone();
        Callback::from(move |view: ActiveView| active_view.set(view))
    };

    html! {
        <>
            <Header
                active_view={*active_view}
                on_select_view={on_select_view}
                on_logout={session.logout.clone()}
            />
            <div class="container">
                {match *active_view {
                    ActiveView::Goals => html! {
                        <>
                            <FilterBar
                                filter={filters.filter.clone()}
                                disabled={display.state.loading}
                                actions={filters.actions.clone()}
                            />
                            <GoalDisplay content={display.state.content.clone()} />
                        </>
                    },
                    ActiveView::AddGoals => html! {
                        <AddGoalsForm
                            api_client={api_client.clone()}
                            table={input_table.table.clone()}
                            table_actions={input_table.actions.clone()}
                            on_saved={display.reload.clone()}
                        />
                    },
                }}
            </div>
        </>
    }
}

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::with_config(config::load_client_config()));
    let api_client = (*api_client).clone();

    let path = browser::current_path();
    if path == api_client.config().login_path {
        html! { <LoginForm api_client={api_client} /> }
    } else if path == api_client.config().register_path {
        html! { <RegisterForm api_client={api_client} /> }
    } else {
        html! { <HomePage api_client={api_client} /> }
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
