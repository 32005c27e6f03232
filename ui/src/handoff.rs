//! Email capture and the hand-off to the hosted Hange AI application.
//!
//! The landing page has no backend. Submitting the signup form percent-encodes
//! the address, appends it to the configured hand-off URL as `email=` and opens
//! the result in a new browsing context. Nothing is awaited: a blocked pop-up
//! is silently lost.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::LandingConfig;

/// Characters `encodeURIComponent` leaves untouched.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const EMAIL_PARAM: &str = "email";

/// Host capability to open a URL in a new top-level browsing context.
pub trait Navigator {
    fn open_new_context(&self, url: &str);
}

/// Opens URLs through the browser (or the webview) hosting the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    #[cfg(target_arch = "wasm32")]
    fn open_new_context(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            tracing::debug!("no window; hand-off dropped");
            return;
        };
        match window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => {}
            Ok(None) => tracing::debug!("new window blocked"),
            Err(err) => tracing::debug!(?err, "window.open failed"),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn open_new_context(&self, url: &str) {
        match serde_json::to_string(url) {
            Ok(literal) => {
                // Fire-and-forget: the opened window is never inspected.
                let _ = dioxus::document::eval(&format!("window.open({literal}, '_blank');"));
            }
            Err(err) => tracing::debug!(%err, "could not quote hand-off URL"),
        }
    }
}

/// Percent-encode one query component the way browsers' `encodeURIComponent` does.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Outbound link builder bound to a navigator.
#[derive(Debug, Clone)]
pub struct Handoff<N = BrowserNavigator> {
    base_url: String,
    sign_in_url: String,
    navigator: N,
}

impl Handoff<BrowserNavigator> {
    pub fn from_config(config: &LandingConfig) -> Self {
        Self::new(config, BrowserNavigator)
    }
}

impl<N: Navigator> Handoff<N> {
    pub fn new(config: &LandingConfig, navigator: N) -> Self {
        Self {
            base_url: config.handoff_url.clone(),
            sign_in_url: config.sign_in_url.clone(),
            navigator,
        }
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn sign_in_url(&self) -> &str {
        &self.sign_in_url
    }

    /// `{base}?email={encoded}`, or `&email=` when the base already carries a query.
    pub fn target_url(&self, email: &str) -> String {
        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        format!(
            "{}{separator}{EMAIL_PARAM}={}",
            self.base_url,
            encode_component(email)
        )
    }

    /// Open the hosted application for `email`. Fire-and-forget.
    pub fn submit(&self, email: &str) {
        let url = self.target_url(email);
        tracing::debug!(target_host = %self.base_url, "handing off signup");
        self.navigator.open_new_context(&url);
    }
}

/// Contents of the signup field between keystrokes and submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailCapture {
    value: String,
}

impl EmailCapture {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Hand the address off and clear the field. A blank field opens nothing.
    ///
    /// Returns whether a hand-off happened.
    pub fn submit_to<N: Navigator>(&mut self, handoff: &Handoff<N>) -> bool {
        let email = std::mem::take(&mut self.value);
        let email = email.trim();
        if email.is_empty() {
            return false;
        }
        handoff.submit(email);
        true
    }
}
