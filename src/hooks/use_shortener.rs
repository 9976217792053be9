//! use_shortener hook - form state and handlers for the URL shortener
//!
//! Owns the two input signals, the request state and the copy feedback flag.
//! The state transitions live in plain functions so they can be tested
//! without a Dioxus runtime.

use dioxus::prelude::*;

use crate::services::shortener::{
    default_transport, shorten, ShortenForm, ShortenRequest, ShortenTransport, GENERIC_ERROR,
};
use crate::stores::settings_store;
use crate::utils::clipboard::copy_to_clipboard;
use crate::utils::DataState;

/// How long the copy button shows "Copied!"
const COPIED_FEEDBACK_MS: u32 = 2000;

/// Return type for the use_shortener hook
#[derive(Clone, Copy)]
pub struct UseShortener {
    /// Original URL input
    pub url: Signal<String>,
    /// Custom word input
    pub custom_word: Signal<String>,
    /// Request state; holds the link once loaded
    pub state: Signal<DataState<String>>,
    /// True for a short while after a successful copy
    pub copied: Signal<bool>,
    /// Submit the form
    pub submit: EventHandler<()>,
    /// Copy the displayed link
    pub copy: EventHandler<()>,
}

impl UseShortener {
    /// Whether the submit button should be disabled
    pub fn is_busy(&self) -> bool {
        submit_disabled(&self.state.read())
    }
}

/// Submit is disabled while a request is in flight
pub fn submit_disabled(state: &DataState<String>) -> bool {
    state.is_loading()
}

/// Start a submission.
///
/// Returns the request to send and moves `state` to `Loading`, clearing any
/// previous link or error. Returns `None` and leaves `state` untouched when
/// the URL is empty or a request is already in flight.
pub fn begin_submit(state: &mut DataState<String>, form: &ShortenForm) -> Option<ShortenRequest> {
    if submit_disabled(state) {
        return None;
    }

    let request = form.to_request()?;
    *state = DataState::Loading;
    Some(request)
}

/// Send the request and produce the state to show afterwards
pub async fn complete_submit<T>(
    transport: &T,
    endpoint: &str,
    request: &ShortenRequest,
) -> DataState<String>
where
    T: ShortenTransport + ?Sized,
{
    match shorten(transport, endpoint, request).await {
        Ok(link) => {
            log::info!("Shortened {} to {}", request.url, link);
            DataState::Loaded(link)
        }
        Err(e) => {
            log::error!("Failed to shorten URL: {}", e);
            DataState::Error(GENERIC_ERROR.to_string())
        }
    }
}

/// Tracks successive copies so only the latest one clears the "Copied!" label
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CopyFeedback {
    generation: u64,
}

impl CopyFeedback {
    /// Record a new copy and return its token
    pub fn start(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Whether the copy identified by `token` is still the latest one
    pub fn is_current(&self, token: u64) -> bool {
        self.generation == token
    }
}

/// The text the copy button writes: the displayed link, if any
pub fn copy_target(state: &DataState<String>) -> Option<String> {
    state.data().cloned()
}

/// Hook for the shortener form
///
/// # Example
/// ```rust
/// let shortener = use_shortener();
///
/// button {
///     disabled: shortener.is_busy(),
///     onclick: move |_| shortener.submit.call(()),
///     "Shorten URL"
/// }
/// ```
pub fn use_shortener() -> UseShortener {
    let url = use_signal(String::new);
    let custom_word = use_signal(String::new);
    let mut state = use_signal(DataState::<String>::default);
    let mut copied = use_signal(|| false);
    let mut feedback = use_signal(CopyFeedback::default);

    let submit = use_callback(move |_: ()| {
        let form = ShortenForm::new(url.peek().clone(), custom_word.peek().clone());

        let request = match begin_submit(&mut state.write(), &form) {
            Some(request) => request,
            None => return,
        };
        copied.set(false);

        let endpoint = settings_store::get_endpoint();
        spawn(async move {
            let transport = default_transport();
            let next = complete_submit(&transport, &endpoint, &request).await;
            state.set(next);
        });
    });

    let copy = use_callback(move |_: ()| {
        let link = match copy_target(&state.peek()) {
            Some(link) => link,
            None => return,
        };

        spawn(async move {
            match copy_to_clipboard(&link).await {
                Ok(_) => {
                    log::info!("Link copied to clipboard");
                    let token = feedback.write().start();
                    copied.set(true);
                    gloo_timers::future::TimeoutFuture::new(COPIED_FEEDBACK_MS).await;
                    if feedback.peek().is_current(token) {
                        copied.set(false);
                    }
                }
                Err(e) => {
                    log::error!("Failed to copy to clipboard: {:?}", e);
                }
            }
        });
    });

    UseShortener {
        url,
        custom_word,
        state,
        copied,
        submit,
        copy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::shortener::tests::MockTransport;
    use crate::services::shortener::ShortenError;
    use futures::executor::block_on;

    const ENDPOINT: &str = "http://localhost:3000";

    /// Run one submission the way the hook does
    fn submit(
        transport: &MockTransport,
        state: &mut DataState<String>,
        url: &str,
        custom_word: &str,
    ) {
        let form = ShortenForm::new(url, custom_word);
        if let Some(request) = begin_submit(state, &form) {
            *state = block_on(complete_submit(transport, ENDPOINT, &request));
        }
    }

    #[test]
    fn test_empty_url_sends_nothing() {
        let transport = MockTransport::replying(200, r#"{"shortenedUrl":"x"}"#);
        let mut state = DataState::Pending;

        submit(&transport, &mut state, "", "alias");
        submit(&transport, &mut state, "  ", "");

        assert_eq!(transport.call_count(), 0);
        assert!(state.is_pending());
    }

    #[test]
    fn test_empty_url_keeps_previous_result() {
        let transport = MockTransport::replying(200, r#"{"shortenedUrl":"x"}"#);
        let mut state = DataState::Loaded("http://s/prev".to_string());

        submit(&transport, &mut state, "", "");

        assert_eq!(transport.call_count(), 0);
        assert_eq!(state, DataState::Loaded("http://s/prev".to_string()));
    }

    #[test]
    fn test_success_shows_shortened_url() {
        let transport =
            MockTransport::replying(200, r#"{"shortenedUrl":"http://localhost:3000/mylink"}"#);
        let mut state = DataState::Pending;

        submit(&transport, &mut state, "https://example.com/very-long-url", "mylink");

        assert_eq!(transport.call_count(), 1);
        assert_eq!(state.data().map(String::as_str), Some("http://localhost:3000/mylink"));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_non_ok_shows_error_only() {
        let transport = MockTransport::replying(400, r#"{"error":"custom short is already in use"}"#);
        let mut state = DataState::Loaded("http://s/old".to_string());

        submit(&transport, &mut state, "https://example.com", "taken");

        assert_eq!(state.error(), Some(GENERIC_ERROR));
        assert_eq!(state.data(), None);
    }

    #[test]
    fn test_network_failure_shows_generic_error() {
        let transport = MockTransport::failing(ShortenError::Network("Failed to fetch".into()));
        let mut state = DataState::Pending;

        submit(&transport, &mut state, "https://example.com", "");

        assert_eq!(state, DataState::Error(GENERIC_ERROR.to_string()));
    }

    #[test]
    fn test_resubmit_after_error_clears_it() {
        let mut state = DataState::Error(GENERIC_ERROR.to_string());
        let request = begin_submit(&mut state, &ShortenForm::new("https://example.com", ""));

        assert!(request.is_some());
        assert!(state.is_loading());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_submit_disabled_while_pending() {
        let mut state = DataState::Pending;
        assert!(!submit_disabled(&state));

        let first = begin_submit(&mut state, &ShortenForm::new("https://example.com", ""));
        assert!(first.is_some());
        assert!(submit_disabled(&state));

        // A second click while loading is ignored
        let second = begin_submit(&mut state, &ShortenForm::new("https://other.com", ""));
        assert_eq!(second, None);
        assert!(state.is_loading());

        state = DataState::Loaded("http://s/x".to_string());
        assert!(!submit_disabled(&state));
        state = DataState::Error(GENERIC_ERROR.to_string());
        assert!(!submit_disabled(&state));
    }

    #[test]
    fn test_only_latest_copy_clears_feedback() {
        let mut feedback = CopyFeedback::default();

        let first = feedback.start();
        let second = feedback.start();

        // The first timer fires while the second copy is still showing
        assert!(!feedback.is_current(first));
        assert!(feedback.is_current(second));
    }

    #[test]
    fn test_copy_target_is_displayed_link_verbatim() {
        let link = "http://localhost:3000/Ab-9_z?ref=%20x";
        let state = DataState::Loaded(link.to_string());
        assert_eq!(copy_target(&state).as_deref(), Some(link));

        assert_eq!(copy_target(&DataState::Pending), None);
        assert_eq!(copy_target(&DataState::Loading), None);
        assert_eq!(copy_target(&DataState::Error("e".to_string())), None);
    }
}
