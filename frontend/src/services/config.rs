use shared::ClientConfig;

use super::logging::Logger;

/// Id of the optional inline JSON block carrying the client config
pub const CONFIG_ELEMENT_ID: &str = "goal-tracker-config";

const COMPONENT: &str = "config";

/// Read the client config from the host page, falling back to defaults
pub fn load_client_config() -> ClientConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match raw {
        Some(json) => parse_or_default(&json),
        None => {
            Logger::debug_with_component(COMPONENT, "no config block found, using defaults");
            ClientConfig::default()
        }
    }
}

fn parse_or_default(json: &str) -> ClientConfig {
    if json.trim().is_empty() {
        return ClientConfig::default();
    }
    match ClientConfig::from_json(json) {
        Ok(config) => {
            Logger::info_with_component(COMPONENT, "client config loaded");
            config
        }
        Err(e) => {
            Logger::error_with_component(COMPONENT, &format!("{}; using defaults", e));
            ClientConfig::default()
        }
    }
}
