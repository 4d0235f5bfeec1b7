//! Error type for DOM wiring and configuration.

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum EnhancerError {
    #[error("no browser window available")]
    MissingWindow,
    #[error("window has no document")]
    MissingDocument,
    #[error("document has no <head>")]
    MissingHead,
    #[error("dom call failed: {0}")]
    Dom(String),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for EnhancerError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        if let Some(message) = value.as_string() {
            return Self::Dom(message);
        }
        let message = js_sys::JSON::stringify(&value)
            .map(String::from)
            .unwrap_or_else(|_| "unknown javascript exception".to_owned());
        Self::Dom(message)
    }
}
