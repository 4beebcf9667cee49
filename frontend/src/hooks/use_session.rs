use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::{api::ApiClient, browser, logging::Logger};

const COMPONENT: &str = "session";

#[derive(Clone, PartialEq)]
pub struct UseSessionActions {
    pub logout: Callback<()>,
}

/// Logout notifies the server, then clears the session cookie and leaves for the
/// login page whatever the server answered.
#[hook]
pub fn use_session(api_client: &ApiClient) -> UseSessionActions {
    let logout = {
        let api_client = api_client.clone();

        use_callback((), move |_: (), _| {
            let api_client = api_client.clone();

            spawn_local(async move {
                if let Err(e) = api_client.logout().await {
                    Logger::warn_with_component(COMPONENT, &format!("logout request failed: {}", e));
                }

                let config = api_client.config();
                if let Err(e) = browser::clear_cookie(&config.session_cookie) {
                    Logger::error_with_component(COMPONENT, &format!("could not clear session cookie: {:?}", e));
                }
                if let Err(e) = browser::replace_location(&config.login_path) {
                    Logger::error_with_component(COMPONENT, &format!("could not open login page: {:?}", e));
                }
            });
        })
    };

    UseSessionActions { logout }
}
