//! API Client Wiring
//!
//! Builds the settings REST clients from the page origin and the token
//! left in `localStorage` by the login flow.

use settings_core::remote::HttpClient;
use settings_core::{ApiConfig, Branch, Category, HttpResourceClient, Role};

/// `localStorage` key holding the bearer token
const TOKEN_KEY: &str = "token";
/// `localStorage` key holding the signed-in role
const ROLE_KEY: &str = "role";

/// Typed clients for both settings collections
#[derive(Clone)]
pub struct Clients {
    pub categories: HttpResourceClient<Category>,
    pub branches: HttpResourceClient<Branch>,
}

impl Clients {
    pub fn new(config: ApiConfig) -> Self {
        let http = HttpClient::new();
        Self {
            categories: HttpResourceClient::with_client(http.clone(), config.clone()),
            branches: HttpResourceClient::with_client(http, config),
        }
    }
}

fn local_storage_item(key: &str) -> Option<String> {
    web_sys::window()?.local_storage().ok()??.get_item(key).ok().flatten()
}

/// API config for the current page: `<origin>/api` plus any stored token
pub fn config_from_page() -> ApiConfig {
    let origin = web_sys::window().and_then(|w| w.location().origin().ok());
    let config = match origin {
        Some(origin) => ApiConfig::new(format!("{}/api", origin)),
        None => ApiConfig::default(),
    };
    match local_storage_item(TOKEN_KEY) {
        Some(token) => config.with_token(token),
        None => config,
    }
}

/// Role of the signed-in user, if any
pub fn current_role() -> Option<Role> {
    local_storage_item(ROLE_KEY).map(|name| Role::parse(&name))
}
