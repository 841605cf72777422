use std::collections::BTreeMap;
use std::rc::Rc;

use async_trait::async_trait;
#[cfg(feature = "http-submit")]
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::{debug, info, warn};
use serde::Deserialize;
use thiserror::Error;
use yew::Callback;

#[cfg(feature = "http-submit")]
use crate::config;
use crate::config::{SIMULATED_DELAY_MS, SIMULATED_FAILURE_RATE};

/// Field name to submitted value.
pub type FormData = BTreeMap<String, String>;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SubmitReceipt {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("simulated network error")]
    Simulated,
    #[cfg(feature = "http-submit")]
    #[error("network error: {0}")]
    Network(String),
    #[cfg(feature = "http-submit")]
    #[error("server responded with status {0}")]
    Status(u16),
    #[cfg(feature = "http-submit")]
    #[error("failed to encode form: {0}")]
    Encode(String),
}

/// Fixed text of the failure banner.
pub const SUBMIT_FAILURE_MESSAGE: &str = "حدث خطأ أثناء إرسال الرسالة. يرجى المحاولة مرة أخرى.";

/// Where a contact form goes. Either outcome is final; there is no retry.
#[async_trait(?Send)]
pub trait SubmissionEndpoint {
    async fn submit(&self, data: &FormData) -> Result<SubmitReceipt, SubmitError>;
}

/// Stand-in backend: waits, then succeeds most of the time.
pub struct SimulatedEndpoint {
    delay_ms: u32,
    failure_rate: f64,
}

impl Default for SimulatedEndpoint {
    fn default() -> Self {
        Self {
            delay_ms: SIMULATED_DELAY_MS,
            failure_rate: SIMULATED_FAILURE_RATE,
        }
    }
}

#[async_trait(?Send)]
impl SubmissionEndpoint for SimulatedEndpoint {
    async fn submit(&self, data: &FormData) -> Result<SubmitReceipt, SubmitError> {
        debug!("Simulating submission of {} fields", data.len());
        TimeoutFuture::new(self.delay_ms).await;
        if web_sys::js_sys::Math::random() > self.failure_rate {
            Ok(SubmitReceipt {
                message: "Form submitted successfully".to_string(),
            })
        } else {
            Err(SubmitError::Simulated)
        }
    }
}

/// Posts the form as JSON to the backend.
#[cfg(feature = "http-submit")]
pub struct HttpEndpoint {
    url: String,
}

#[cfg(feature = "http-submit")]
impl HttpEndpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn from_config() -> Self {
        Self::new(format!("{}{}", config::get_backend_url(), config::CONTACT_PATH))
    }
}

#[cfg(feature = "http-submit")]
#[async_trait(?Send)]
impl SubmissionEndpoint for HttpEndpoint {
    async fn submit(&self, data: &FormData) -> Result<SubmitReceipt, SubmitError> {
        let response = Request::post(&self.url)
            .json(data)
            .map_err(|e| SubmitError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(SubmitError::Status(response.status()));
        }
        // An empty or non-JSON body still counts as accepted.
        Ok(response.json::<SubmitReceipt>().await.unwrap_or_default())
    }
}

/// Shared handle so the endpoint can travel through component props.
#[derive(Clone)]
pub struct EndpointHandle(pub Rc<dyn SubmissionEndpoint>);

impl EndpointHandle {
    pub fn new(endpoint: impl SubmissionEndpoint + 'static) -> Self {
        Self(Rc::new(endpoint))
    }

    #[cfg(feature = "http-submit")]
    pub fn for_build() -> Self {
        Self::new(HttpEndpoint::from_config())
    }

    #[cfg(not(feature = "http-submit"))]
    pub fn for_build() -> Self {
        Self::new(SimulatedEndpoint::default())
    }
}

impl PartialEq for EndpointHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionEvent {
    Started,
    Succeeded,
    Failed,
    Dismissed,
}

impl SubmissionState {
    pub fn on(self, event: SubmissionEvent) -> Self {
        use SubmissionEvent::*;
        use SubmissionState::*;
        match (self, event) {
            (_, Started) => Submitting,
            (Submitting, Succeeded) => Success,
            (Submitting, Failed) => Error,
            (Success | Error, Dismissed) => Idle,
            (state, _) => state,
        }
    }

    pub fn is_busy(self) -> bool {
        self == SubmissionState::Submitting
    }
}

/// Holds the submit control disabled. Dropping it re-enables the control,
/// whichever way the attempt ended.
pub struct BusyGuard {
    release: Option<Callback<bool>>,
}

impl BusyGuard {
    pub fn acquire(set_busy: Callback<bool>) -> Self {
        set_busy.emit(true);
        Self {
            release: Some(set_busy),
        }
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        if let Some(set_busy) = self.release.take() {
            set_busy.emit(false);
        }
    }
}

pub struct SubmissionHooks {
    pub set_busy: Callback<bool>,
    pub on_success: Callback<SubmitReceipt>,
    pub on_failure: Callback<SubmitError>,
}

/// One submit attempt. The outcome hook fires before the busy state is
/// released.
pub async fn run_submission(
    endpoint: &dyn SubmissionEndpoint,
    data: FormData,
    hooks: SubmissionHooks,
) -> SubmissionState {
    let _busy = BusyGuard::acquire(hooks.set_busy);

    match endpoint.submit(&data).await {
        Ok(receipt) => {
            info!("Contact form submitted: {}", receipt.message);
            hooks.on_success.emit(receipt);
            SubmissionState::Success
        }
        Err(err) => {
            warn!("Contact form submission failed: {}", err);
            hooks.on_failure.emit(err);
            SubmissionState::Error
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    struct Fixed(Result<SubmitReceipt, SubmitError>);

    #[async_trait(?Send)]
    impl SubmissionEndpoint for Fixed {
        async fn submit(&self, _data: &FormData) -> Result<SubmitReceipt, SubmitError> {
            self.0.clone()
        }
    }

    struct Stalled;

    #[async_trait(?Send)]
    impl SubmissionEndpoint for Stalled {
        async fn submit(&self, _data: &FormData) -> Result<SubmitReceipt, SubmitError> {
            std::future::pending().await
        }
    }

    fn recording_hooks(log: &Rc<RefCell<Vec<String>>>) -> SubmissionHooks {
        let busy_log = log.clone();
        let ok_log = log.clone();
        let err_log = log.clone();
        SubmissionHooks {
            set_busy: Callback::from(move |busy: bool| busy_log.borrow_mut().push(format!("busy:{}", busy))),
            on_success: Callback::from(move |_| ok_log.borrow_mut().push("success".to_string())),
            on_failure: Callback::from(move |e: SubmitError| err_log.borrow_mut().push(format!("failure:{}", e))),
        }
    }

    mod run {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn success_releases_busy_after_outcome() {
            let log = Rc::new(RefCell::new(Vec::new()));
            let endpoint = Fixed(Ok(SubmitReceipt::default()));
            let state = tokio_test::block_on(run_submission(&endpoint, FormData::new(), recording_hooks(&log)));
            assert_eq!(state, SubmissionState::Success);
            assert_eq!(*log.borrow(), vec!["busy:true", "success", "busy:false"]);
        }

        #[test]
        fn failure_releases_busy_after_outcome() {
            let log = Rc::new(RefCell::new(Vec::new()));
            let endpoint = Fixed(Err(SubmitError::Simulated));
            let state = tokio_test::block_on(run_submission(&endpoint, FormData::new(), recording_hooks(&log)));
            assert_eq!(state, SubmissionState::Error);
            assert_eq!(
                *log.borrow(),
                vec!["busy:true", "failure:simulated network error", "busy:false"]
            );
        }

        #[test]
        fn abandoned_attempt_still_releases_busy_once() {
            let log = Rc::new(RefCell::new(Vec::new()));
            let endpoint = Stalled;
            {
                let mut task = tokio_test::task::spawn(run_submission(
                    &endpoint,
                    FormData::new(),
                    recording_hooks(&log),
                ));
                assert!(task.poll().is_pending());
                assert_eq!(*log.borrow(), vec!["busy:true"]);
            }
            assert_eq!(*log.borrow(), vec!["busy:true", "busy:false"]);
        }
    }

    #[cfg(feature = "http-submit")]
    #[test]
    fn http_endpoint_posts_to_contact_path() {
        let endpoint = HttpEndpoint::from_config();
        assert!(endpoint.url.ends_with("/api/contact"));
        assert!(endpoint.url.starts_with(config::get_backend_url()));
    }

    mod lifecycle {
        use super::*;
        use pretty_assertions::assert_eq;
        use SubmissionEvent::*;

        #[test]
        fn success_path_returns_to_idle() {
            let mut seen = vec![SubmissionState::Idle];
            for event in [Started, Succeeded, Dismissed] {
                let next = seen.last().copied().unwrap_or_default().on(event);
                seen.push(next);
            }
            assert_eq!(
                seen,
                vec![
                    SubmissionState::Idle,
                    SubmissionState::Submitting,
                    SubmissionState::Success,
                    SubmissionState::Idle,
                ]
            );
        }

        #[test]
        fn error_path_returns_to_idle() {
            let state = SubmissionState::Idle.on(Started).on(Failed);
            assert_eq!(state, SubmissionState::Error);
            assert_eq!(state.on(Dismissed), SubmissionState::Idle);
        }

        #[test]
        fn only_submitting_is_busy() {
            assert!(SubmissionState::Submitting.is_busy());
            assert!(!SubmissionState::Idle.is_busy());
            assert!(!SubmissionState::Success.is_busy());
            assert!(!SubmissionState::Error.is_busy());
        }

        #[test]
        fn outcomes_are_ignored_outside_submitting() {
            assert_eq!(SubmissionState::Idle.on(Succeeded), SubmissionState::Idle);
            assert_eq!(SubmissionState::Idle.on(Dismissed), SubmissionState::Idle);
            assert_eq!(SubmissionState::Submitting.on(Dismissed), SubmissionState::Submitting);
        }

        #[test]
        fn resubmitting_over_a_banner_starts_again() {
            assert_eq!(SubmissionState::Success.on(Started), SubmissionState::Submitting);
        }
    }
}
