use shared::{query_param, Credentials};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlFormElement, HtmlInputElement};
use yew::prelude::*;

use crate::services::{api::ApiClient, browser, logging::Logger};

const COMPONENT: &str = "login-form";

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub api_client: ApiClient,
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    // `?username=` prefills the field, e.g. right after registering
    let username = use_state(|| query_param(&browser::current_search(), "username").unwrap_or_default());
    let password = use_state(String::new);
    let login_error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let on_username_input = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let api_client = props.api_client.clone();
        let username = username.clone();
        let password = password.clone();
        let login_error = login_error.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let form: HtmlFormElement = e.target_unchecked_into();
            let credentials = Credentials {
                username: (*username).clone(),
                password: (*password).clone(),
            };

            let api_client = api_client.clone();
            let login_error = login_error.clone();
            let submitting = submitting.clone();

            spawn_local(async move {
                submitting.set(true);

                match api_client
                    .send_form(&form.method(), &form.action(), credentials.form_body())
                    .await
                {
                    Ok(_) => {
                        Logger::info_with_component(COMPONENT, "login accepted");
                        let home = &api_client.config().home_path;
                        if let Err(js) = browser::navigate_to(home) {
                            Logger::error_with_component(COMPONENT, &format!("could not open home page: {:?}", js));
                        }
                    }
                    Err(e) => {
                        Logger::warn_with_component(COMPONENT, &format!("login rejected: {}", e));
                        login_error.set(Some(e.user_message()));
                    }
                }

                submitting.set(false);
            });
        })
    };

    let action = props
        .api_client
        .config()
        .endpoint(&props.api_client.config().login_path);

    let error_style = if login_error.is_some() {
        "display: flex"
    } else {
        "display: none"
    };

    html! {
        <main class="login-page">
            <h1>{"Log in"}</h1>

            <div id="login-error" class="login-error" style={error_style}>
                <span id="login-error-text">
                    {(*login_error).clone().unwrap_or_default()}
                </span>
            </div>

            <form class="login-form" action={action} method="post" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="username">{"Username"}</label>
                    <input
                        type="text"
                        id="username"
                        name="username"
                        required={true}
                        value={(*username).clone()}
                        oninput={on_username_input}
                    />
                </div>

                <div class="form-group">
                    <label for="password">{"Password"}</label>
                    <input
                        type="password"
                        id="password"
                        name="password"
                        required={true}
                        value={(*password).clone()}
                        oninput={on_password_input}
                    />
                </div>

                <button type="submit" class="btn btn-primary" disabled={*submitting}>
                    {if *submitting { "Logging in..." } else { "Log in" }}
                </button>
            </form>

            <p class="form-switch">
                {"No account yet? "}
                <a href={props.api_client.config().register_path.clone()}>{"Create one"}</a>
            </p>
        </main>
    }
}
