use shared::Credentials;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlFormElement, HtmlInputElement};
use yew::prelude::*;

use crate::services::{api::ApiClient, browser, logging::Logger};

const COMPONENT: &str = "register-form";

#[derive(Properties, PartialEq)]
pub struct RegisterFormProps {
    pub api_client: ApiClient,
}

#[function_component(RegisterForm)]
pub fn register_form(props: &RegisterFormProps) -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let register_error = use_state(|| Option::<String>::None);
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
        let register_error = register_error.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let form: HtmlFormElement = e.target_unchecked_into();
            let credentials = Credentials {
                username: (*username).clone(),
                password: (*password).clone(),
            };

            let api_client = api_client.clone();
            let register_error = register_error.clone();
            let submitting = submitting.clone();

            spawn_local(async move {
                submitting.set(true);

                match api_client
                    .send_form(&form.method(), &form.action(), credentials.form_body())
                    .await
                {
                    Ok(_) => {
                        Logger::info_with_component(COMPONENT, "account created");
                        let login = api_client.config().login_url_for(&credentials.username);
                        if let Err(js) = browser::navigate_to(&login) {
                            Logger::error_with_component(COMPONENT, &format!("could not open login page: {:?}", js));
                        }
                    }
                    Err(e) => {
                        Logger::warn_with_component(COMPONENT, &format!("registration rejected: {}", e));
                        register_error.set(Some(e.user_message()));
                    }
                }

                submitting.set(false);
            });
        })
    };

    let config = props.api_client.config();
    let action = config.endpoint(&config.register_path);

    let error_style = if register_error.is_some() {
        "display: flex"
    } else {
        "display: none"
    };

    html! {
        <main class="login-page">
            <h1>{"Create account"}</h1>

            <div id="register-error" class="login-error" style={error_style}>
                <span id="register-error-text">
                    {(*register_error).clone().unwrap_or_default()}
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
                        minlength="8"
                        value={(*password).clone()}
                        oninput={on_password_input}
                    />
                </div>

                <button type="submit" class="btn btn-primary" disabled={*submitting}>
                    {if *submitting { "Creating account..." } else { "Create account" }}
                </button>
            </form>

            <p class="form-switch">
                {"Already have an account? "}
                <a href={config.login_path.clone()}>{"Log in"}</a>
            </p>
        </main>
    }
}
