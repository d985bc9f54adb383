//! Application configuration and bootstrapping.

use std::sync::Arc;

use iced::Task;

use extguard_contracts::ExtensionsApi;

use crate::api_client::ApiClient;
use crate::message::Message;
use crate::state::State;
use crate::{theme, update, view};

const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

#[derive(Clone, Debug)]
pub struct AppConfig {
    server_url: Arc<str>,
}

impl AppConfig {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self { server_url: Arc::from(server_url.into()) }
    }

    /// Read `EXTGUARD_SERVER_URL`, falling back to the default when unset
    /// or unparsable.
    pub fn from_environment() -> Self {
        let server_url = std::env::var("EXTGUARD_SERVER_URL")
            .unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());

        match url::Url::parse(&server_url) {
            Ok(_) => Self::new(server_url),
            Err(err) => {
                log::warn!(
                    "Invalid EXTGUARD_SERVER_URL {server_url:?} ({err}), \
                     falling back to {DEFAULT_SERVER_URL}"
                );
                Self::new(DEFAULT_SERVER_URL)
            }
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }
}

/// Build the initial state and the boot-time snapshot fetch.
pub fn boot(config: &AppConfig) -> (State, Task<Message>) {
    let api: Arc<dyn ExtensionsApi> =
        Arc::new(ApiClient::new(config.server_url()));
    let state = State::new(api);
    let task = update::refresh_snapshot(&state);
    (state, task)
}

/// Run the panel application.
pub fn run(config: AppConfig) -> iced::Result {
    iced::application("Extguard", update::update, view::view)
        .theme(|_| theme::PanelTheme::theme())
        .window(iced::window::Settings {
            size: iced::Size::new(900.0, 640.0),
            ..Default::default()
        })
        .run_with(move || boot(&config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_environment_rejects_garbage_urls() {
        // Set-and-restore keeps this hermetic even if the var is present.
        let previous = std::env::var("EXTGUARD_SERVER_URL").ok();
        unsafe {
            std::env::set_var("EXTGUARD_SERVER_URL", "not a url");
        }
        let config = AppConfig::from_environment();
        assert_eq!(config.server_url(), DEFAULT_SERVER_URL);
        unsafe {
            match previous {
                Some(value) => std::env::set_var("EXTGUARD_SERVER_URL", value),
                None => std::env::remove_var("EXTGUARD_SERVER_URL"),
            }
        }
    }
}
