use super::form_state::{ContactField, ContactFormState};
use super::submission::{FormData, SubmissionEvent, SubmissionState};
use crate::config::{ERROR_BANNER_MS, SUCCESS_BANNER_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    /// How long the banner stays before it starts leaving on its own.
    pub fn lifetime_ms(self) -> u32 {
        match self {
            BannerKind::Success => SUCCESS_BANNER_MS,
            BannerKind::Error => ERROR_BANNER_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    /// Exit animation running; removal follows.
    pub leaving: bool,
}

impl Banner {
    fn new(kind: BannerKind) -> Self {
        Self { kind, leaving: false }
    }
}

/// What the form should do with a submit press.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitPlan {
    /// An attempt is already in flight.
    Ignore,
    /// Validation failed; nothing is sent.
    Abort { focus: Option<ContactField> },
    Send(FormData),
}

/// Contact form state and its submission lifecycle, free of any browser
/// handles. The component owns one and turns its answers into timers,
/// focus and futures.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactController {
    pub form: ContactFormState,
    pub submission: SubmissionState,
    pub busy: bool,
    pub banner: Option<Banner>,
}

impl ContactController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_submit(&mut self) -> SubmitPlan {
        if self.busy || self.submission.is_busy() {
            return SubmitPlan::Ignore;
        }
        if !self.form.validate_contact_form() {
            return SubmitPlan::Abort {
                focus: self.form.first_invalid(),
            };
        }

        self.submission = self.submission.on(SubmissionEvent::Started);
        self.busy = true;
        self.banner = None;
        SubmitPlan::Send(self.form.form_data())
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    pub fn succeed(&mut self) {
        self.submission = self.submission.on(SubmissionEvent::Succeeded);
        self.form.reset();
        self.banner = Some(Banner::new(BannerKind::Success));
    }

    /// Field values stay so the user can retry.
    pub fn fail(&mut self) {
        self.submission = self.submission.on(SubmissionEvent::Failed);
        self.banner = Some(Banner::new(BannerKind::Error));
    }

    /// Starts the exit animation. False when there is nothing to dismiss or
    /// the banner is already leaving.
    pub fn dismiss_banner(&mut self) -> bool {
        match self.banner.as_mut() {
            Some(banner) if !banner.leaving => {
                banner.leaving = true;
                true
            }
            _ => false,
        }
    }

    pub fn remove_banner(&mut self) {
        self.banner = None;
        self.submission = self.submission.on(SubmissionEvent::Dismissed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::submission::{
        run_submission, SubmissionEndpoint, SubmissionHooks, SubmitError, SubmitReceipt,
    };
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use yew::Callback;

    struct Fixed {
        outcome: Result<SubmitReceipt, SubmitError>,
        calls: Cell<usize>,
    }

    impl Fixed {
        fn ok() -> Self {
            Self {
                outcome: Ok(SubmitReceipt::default()),
                calls: Cell::new(0),
            }
        }

        fn err() -> Self {
            Self {
                outcome: Err(SubmitError::Simulated),
                calls: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl SubmissionEndpoint for Fixed {
        async fn submit(&self, _data: &FormData) -> Result<SubmitReceipt, SubmitError> {
            self.calls.set(self.calls.get() + 1);
            self.outcome.clone()
        }
    }

    fn filled() -> ContactController {
        let mut ctl = ContactController::new();
        ctl.form.set_value(ContactField::Name, "نورة القحطاني");
        ctl.form.set_value(ContactField::Email, "noura@uni.edu.sa");
        ctl.form.set_value(ContactField::Subject, "evaluation");
        ctl.form.set_value(ContactField::Message, "متى تصدر شهادة إتمام التدريب؟");
        ctl
    }

    /// Presses submit and, when the plan says so, runs the attempt with the
    /// outcome hooks wired back into the controller the way the component
    /// wires them into its messages.
    fn press_submit(ctl: &Rc<RefCell<ContactController>>, endpoint: &Fixed) -> SubmitPlan {
        let plan = ctl.borrow_mut().begin_submit();
        if let SubmitPlan::Send(data) = plan.clone() {
            let busy_ctl = ctl.clone();
            let ok_ctl = ctl.clone();
            let err_ctl = ctl.clone();
            let hooks = SubmissionHooks {
                set_busy: Callback::from(move |busy| busy_ctl.borrow_mut().set_busy(busy)),
                on_success: Callback::from(move |_| ok_ctl.borrow_mut().succeed()),
                on_failure: Callback::from(move |_| err_ctl.borrow_mut().fail()),
            };
            tokio_test::block_on(run_submission(endpoint, data, hooks));
        }
        plan
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn invalid_form_sends_nothing() {
            let ctl = Rc::new(RefCell::new(ContactController::new()));
            let endpoint = Fixed::ok();

            let plan = press_submit(&ctl, &endpoint);

            assert_eq!(plan, SubmitPlan::Abort { focus: Some(ContactField::Name) });
            assert_eq!(endpoint.calls.get(), 0);
            let ctl = ctl.borrow();
            assert_eq!(ctl.submission, SubmissionState::Idle);
            assert!(!ctl.busy);
            assert_eq!(ctl.banner, None);
            assert_eq!(ctl.form.error_count(), 4);
        }

        #[test]
        fn submit_while_busy_is_ignored() {
            let mut ctl = ContactController::new();
            ctl.set_busy(true);
            assert_eq!(ctl.begin_submit(), SubmitPlan::Ignore);
            assert_eq!(ctl.form.error_count(), 0);
            assert_eq!(ctl.submission, SubmissionState::Idle);
        }

        #[test]
        fn submit_while_submitting_is_ignored() {
            let mut ctl = filled();
            assert!(matches!(ctl.begin_submit(), SubmitPlan::Send(_)));
            ctl.set_busy(false);
            assert_eq!(ctl.begin_submit(), SubmitPlan::Ignore);
        }

        #[test]
        fn valid_submit_enters_submitting() {
            let mut ctl = filled();
            let plan = ctl.begin_submit();
            let SubmitPlan::Send(data) = &plan else {
                panic!("expected a send, got {:?}", plan);
            };
            assert_eq!(data["email"], "noura@uni.edu.sa");
            assert_eq!(ctl.submission, SubmissionState::Submitting);
            assert!(ctl.busy);
        }

        #[test]
        fn focus_skips_stale_optional_errors() {
            let mut ctl = filled();
            ctl.form.set_value(ContactField::Phone, "123");
            ctl.form.validate_field(ContactField::Phone);
            ctl.form.set_value(ContactField::Subject, "");

            assert_eq!(
                ctl.begin_submit(),
                SubmitPlan::Abort { focus: Some(ContactField::Subject) }
            );
        }
    }

    mod outcome {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn success_resets_fields_and_shows_banner() {
            let ctl = Rc::new(RefCell::new(filled()));
            let endpoint = Fixed::ok();

            press_submit(&ctl, &endpoint);

            assert_eq!(endpoint.calls.get(), 1);
            let ctl = ctl.borrow();
            assert_eq!(ctl.form, ContactFormState::new());
            assert_eq!(ctl.submission, SubmissionState::Success);
            assert_eq!(ctl.banner, Some(Banner::new(BannerKind::Success)));
            assert!(!ctl.busy);
        }

        #[test]
        fn failure_keeps_values_and_shows_error_banner() {
            let ctl = Rc::new(RefCell::new(filled()));
            let before = ctl.borrow().form.form_data();
            let endpoint = Fixed::err();

            press_submit(&ctl, &endpoint);

            let ctl = ctl.borrow();
            assert_eq!(ctl.form.form_data(), before);
            assert_eq!(ctl.submission, SubmissionState::Error);
            assert_eq!(ctl.banner, Some(Banner::new(BannerKind::Error)));
            assert!(!ctl.busy);
        }

        #[test]
        fn dismissing_returns_to_idle() {
            let ctl = Rc::new(RefCell::new(filled()));
            press_submit(&ctl, &Fixed::ok());

            let mut ctl = ctl.borrow_mut();
            assert!(ctl.dismiss_banner());
            assert!(!ctl.dismiss_banner());
            assert_eq!(ctl.banner.map(|b| b.leaving), Some(true));
            ctl.remove_banner();
            assert_eq!(ctl.banner, None);
            assert_eq!(ctl.submission, SubmissionState::Idle);
        }

        #[test]
        fn resubmitting_after_failure_clears_the_banner() {
            let ctl = Rc::new(RefCell::new(filled()));
            press_submit(&ctl, &Fixed::err());

            let mut ctl = ctl.borrow_mut();
            assert!(matches!(ctl.begin_submit(), SubmitPlan::Send(_)));
            assert_eq!(ctl.banner, None);
            assert_eq!(ctl.submission, SubmissionState::Submitting);
        }

        #[test]
        fn banner_lifetimes() {
            assert_eq!(BannerKind::Success.lifetime_ms(), 8_000);
            assert_eq!(BannerKind::Error.lifetime_ms(), 6_000);
        }
    }
}
