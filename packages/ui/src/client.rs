//! Shared API client constructor for the web platform.
//!
//! Returns an [`api::ApiClient`] backed by the appropriate [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): `window.localStorage` via `store::LocalStore`
//! - **Native** (tests, tooling): an in-memory [`store::MemoryStore`]

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

/// API client used by every view.
pub type Client = api::ApiClient<PlatformStore>;

/// Native builds have no page origin; this is where a local backend listens.
#[cfg(not(target_arch = "wasm32"))]
const NATIVE_ORIGIN: &str = "http://localhost:8000";

/// Create the platform-appropriate durable store.
pub fn make_store() -> PlatformStore {
    PlatformStore::new()
}

/// Create an API client from the platform configuration, resolving a
/// same-origin backend against the current page.
pub fn make_client() -> Client {
    let config = base_config().resolved_against(&page_origin());
    tracing::debug!("API base URL: {}", config.base_url);
    api::ApiClient::new(config, make_store())
}

#[cfg(target_arch = "wasm32")]
fn base_config() -> api::ApiConfig {
    api::ApiConfig::from_build_env()
}

/// `snippetflow.toml` in the working directory overrides the build-time config.
#[cfg(not(target_arch = "wasm32"))]
fn base_config() -> api::ApiConfig {
    let source = std::fs::read_to_string(api::ApiConfig::filename()).ok();
    api::ApiConfig::from_toml_or(source.as_deref(), api::ApiConfig::from_build_env())
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> String {
    NATIVE_ORIGIN.to_string()
}
