use std::collections::HashMap;

use gloo_timers::callback::Timeout;
use log::{debug, info};
use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::controller::{BannerKind, ContactController, SubmitPlan};
use super::counter::{counter_view, message_len};
use super::form_state::ContactField;
use super::submission::{
    run_submission, EndpointHandle, SubmissionHooks, SubmissionState, SUBMIT_FAILURE_MESSAGE,
};
use super::validation::FieldKind;
use crate::config::{
    BANNER_EXIT_MS, FIELD_HIGHLIGHT_MS, FORM_GROUP_BASE_DELAY_MS, FORM_GROUP_STAGGER_MS,
    MESSAGE_MAX_CHARS,
};
use crate::scroll::scroll_into_view_nearest;

const SUBJECTS: [(&str, &str); 4] = [
    ("registration", "التسجيل في البرنامج"),
    ("training-sites", "جهات التدريب"),
    ("evaluation", "التقييم والشهادات"),
    ("other", "أخرى"),
];

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub endpoint: EndpointHandle,
}

pub enum ContactFormMsg {
    Input(ContactField, String),
    Blur(ContactField),
    ClearHighlight(ContactField),
    Submit,
    SetBusy(bool),
    Succeeded,
    Failed,
    Settled(SubmissionState),
    DismissBanner,
    RemoveBanner,
}

pub struct ContactForm {
    ctl: ContactController,
    banner_timer: Option<Timeout>,
    banner_ref: NodeRef,
    scroll_to_banner: bool,
    highlight_timers: HashMap<ContactField, Timeout>,
    field_refs: Vec<NodeRef>,
}

/// Entrance delay of the `index`th form group.
fn group_delay_ms(index: usize) -> u32 {
    index as u32 * FORM_GROUP_STAGGER_MS + FORM_GROUP_BASE_DELAY_MS
}

impl ContactForm {
    fn schedule_highlight_clear(&mut self, ctx: &Context<Self>, field: ContactField) {
        let link = ctx.link().clone();
        let timer = Timeout::new(FIELD_HIGHLIGHT_MS, move || {
            link.send_message(ContactFormMsg::ClearHighlight(field));
        });
        // Replacing the handle cancels a pending clear for the same field.
        self.highlight_timers.insert(field, timer);
    }

    /// Fields that just passed validation keep their success border for a
    /// moment.
    fn schedule_validated_highlights(&mut self, ctx: &Context<Self>) {
        for field in ContactField::ALL {
            if self.ctl.form.field(field).highlighted {
                self.schedule_highlight_clear(ctx, field);
            }
        }
    }

    fn present_banner(&mut self, ctx: &Context<Self>, kind: BannerKind) {
        let link = ctx.link().clone();
        self.banner_timer = Some(Timeout::new(kind.lifetime_ms(), move || {
            link.send_message(ContactFormMsg::DismissBanner);
        }));
        self.scroll_to_banner = true;
    }

    fn focus(&self, field: ContactField) {
        if let Some(el) = self.field_refs[field.index()].cast::<HtmlElement>() {
            let _ = el.focus();
        }
    }

    fn view_banner(&self, ctx: &Context<Self>) -> Html {
        let Some(banner) = self.ctl.banner else {
            return html! {};
        };
        let dismiss = ctx.link().callback(|_: MouseEvent| ContactFormMsg::DismissBanner);
        let (class, icon, title, body) = match banner.kind {
            BannerKind::Success => (
                "form-success",
                "fas fa-check-circle",
                "تم إرسال رسالتك بنجاح!",
                "سنتواصل معك في أقرب وقت ممكن",
            ),
            BannerKind::Error => (
                "form-error",
                "fas fa-exclamation-triangle",
                "خطأ في الإرسال",
                SUBMIT_FAILURE_MESSAGE,
            ),
        };

        html! {
            <div ref={self.banner_ref.clone()} class={classes!(class, banner.leaving.then(|| "leaving"))} role="status">
                <button type="button" class="banner-close" aria-label="إغلاق" onclick={dismiss}>{"×"}</button>
                <i class={icon}></i>
                <h3>{title}</h3>
                <p>{body}</p>
            </div>
        }
    }

    fn view_control(&self, ctx: &Context<Self>, field: ContactField) -> Html {
        let spec = field.spec();
        let state = self.ctl.form.field(field);
        let node_ref = self.field_refs[field.index()].clone();
        let onblur = ctx.link().callback(move |_: FocusEvent| ContactFormMsg::Blur(field));

        match spec.kind {
            FieldKind::TextArea => {
                let oninput = ctx.link().callback(move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    ContactFormMsg::Input(field, input.value())
                });
                html! {
                    <textarea
                        ref={node_ref}
                        id={spec.name}
                        name={spec.name}
                        rows="6"
                        maxlength={MESSAGE_MAX_CHARS.to_string()}
                        required={spec.required}
                        class={classes!(state.class())}
                        value={state.value.clone()}
                        oninput={oninput}
                        onblur={onblur}
                    />
                }
            }
            FieldKind::Select => {
                let onchange = ctx.link().callback(move |e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    ContactFormMsg::Input(field, select.value())
                });
                html! {
                    <select
                        ref={node_ref}
                        id={spec.name}
                        name={spec.name}
                        required={spec.required}
                        class={classes!(state.class())}
                        onchange={onchange}
                        onblur={onblur}
                    >
                        <option value="" selected={state.value.is_empty()} disabled=true>{"اختر الموضوع"}</option>
                        { for SUBJECTS.iter().map(|(value, label)| html! {
                            <option value={*value} selected={state.value == *value}>{*label}</option>
                        }) }
                    </select>
                }
            }
            _ => {
                let oninput = ctx.link().callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    ContactFormMsg::Input(field, input.value())
                });
                html! {
                    <input
                        ref={node_ref}
                        id={spec.name}
                        name={spec.name}
                        type={spec.kind.input_type()}
                        required={spec.required}
                        class={classes!(state.class())}
                        value={state.value.clone()}
                        oninput={oninput}
                        onblur={onblur}
                    />
                }
            }
        }
    }

    fn view_group(&self, ctx: &Context<Self>, index: usize, field: ContactField) -> Html {
        let spec = field.spec();
        let state = self.ctl.form.field(field);
        let delay = group_delay_ms(index);

        html! {
            <div class="form-group" style={format!("animation-delay: {}ms;", delay)}>
                <label for={spec.name}>
                    {field.label()}
                    if spec.required {
                        <span class="required-mark">{" *"}</span>
                    }
                </label>
                { self.view_control(ctx, field) }
                if let Some(error) = &state.error {
                    <div class="field-error">
                        <i class="fas fa-exclamation-circle"></i>
                        {error.to_string()}
                    </div>
                }
                if field == ContactField::Message {
                    { self.view_counter() }
                }
            </div>
        }
    }

    fn view_counter(&self) -> Html {
        let counter = counter_view(message_len(self.ctl.form.value(ContactField::Message)));
        html! {
            <div class={classes!("character-counter", counter.tone.class())}>{counter.text}</div>
        }
    }
}

impl Component for ContactForm {
    type Message = ContactFormMsg;
    type Properties = ContactFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            ctl: ContactController::new(),
            banner_timer: None,
            banner_ref: NodeRef::default(),
            scroll_to_banner: false,
            highlight_timers: HashMap::new(),
            field_refs: ContactField::ALL.iter().map(|_| NodeRef::default()).collect(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactFormMsg::Input(field, value) => {
                self.ctl.form.set_value(field, &value);
                self.highlight_timers.remove(&field);
                true
            }
            ContactFormMsg::Blur(field) => {
                if self.ctl.form.validate_field(field) {
                    self.schedule_highlight_clear(ctx, field);
                }
                true
            }
            ContactFormMsg::ClearHighlight(field) => {
                self.ctl.form.clear_highlight(field);
                self.highlight_timers.remove(&field);
                true
            }
            ContactFormMsg::Submit => {
                let plan = self.ctl.begin_submit();
                let data = match plan {
                    SubmitPlan::Ignore => return false,
                    SubmitPlan::Abort { focus } => {
                        self.schedule_validated_highlights(ctx);
                        debug!("Contact form has {} invalid fields", self.ctl.form.error_count());
                        if let Some(field) = focus {
                            self.focus(field);
                        }
                        return true;
                    }
                    SubmitPlan::Send(data) => data,
                };
                self.schedule_validated_highlights(ctx);
                self.banner_timer = None;

                let endpoint = ctx.props().endpoint.0.clone();
                let hooks = SubmissionHooks {
                    set_busy: ctx.link().callback(ContactFormMsg::SetBusy),
                    on_success: ctx.link().callback(|_| ContactFormMsg::Succeeded),
                    on_failure: ctx.link().callback(|_| ContactFormMsg::Failed),
                };
                ctx.link().send_future(async move {
                    let state = run_submission(endpoint.as_ref(), data, hooks).await;
                    ContactFormMsg::Settled(state)
                });
                true
            }
            ContactFormMsg::SetBusy(busy) => {
                self.ctl.set_busy(busy);
                true
            }
            ContactFormMsg::Succeeded => {
                self.ctl.succeed();
                self.highlight_timers.clear();
                self.present_banner(ctx, BannerKind::Success);
                true
            }
            ContactFormMsg::Failed => {
                self.ctl.fail();
                self.present_banner(ctx, BannerKind::Error);
                true
            }
            ContactFormMsg::Settled(state) => {
                info!("Contact submission settled: {:?}", state);
                false
            }
            ContactFormMsg::DismissBanner => {
                if !self.ctl.dismiss_banner() {
                    return false;
                }
                let link = ctx.link().clone();
                self.banner_timer = Some(Timeout::new(BANNER_EXIT_MS, move || {
                    link.send_message(ContactFormMsg::RemoveBanner);
                }));
                true
            }
            ContactFormMsg::RemoveBanner => {
                self.ctl.remove_banner();
                self.banner_timer = None;
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if self.scroll_to_banner {
            self.scroll_to_banner = false;
            if let Some(el) = self.banner_ref.cast::<web_sys::Element>() {
                scroll_into_view_nearest(&el);
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactFormMsg::Submit
        });

        html! {
            <div class="contact-form-wrapper">
                <style>{CONTACT_FORM_CSS}</style>
                { self.view_banner(ctx) }
                <form id="contact-form" class="contact-form" novalidate=true onsubmit={onsubmit}>
                    { for ContactField::ALL.iter().enumerate().map(|(i, field)| self.view_group(ctx, i, *field)) }
                    <button
                        type="submit"
                        class={classes!("submit-btn", self.ctl.busy.then(|| "is-busy"))}
                        disabled={self.ctl.busy}
                    >
                        if self.ctl.busy {
                            <i class="fas fa-spinner fa-spin"></i>
                            {" جار الإرسال..."}
                        } else {
                            <i class="fas fa-paper-plane"></i>
                            {" إرسال الرسالة"}
                        }
                    </button>
                </form>
            </div>
        }
    }
}

const CONTACT_FORM_CSS: &str = r#"
.contact-form .form-group {
    margin-bottom: 1.5rem;
    opacity: 0;
    animation: formGroupIn 0.5s ease forwards;
    transition: transform 0.2s ease;
}
.contact-form .form-group:focus-within {
    transform: scale(1.02);
}
@keyframes formGroupIn {
    from { opacity: 0; translate: 0 20px; }
    to { opacity: 1; translate: 0 0; }
}
.contact-form input,
.contact-form textarea,
.contact-form select {
    width: 100%;
    border: 1px solid var(--gray-300);
    border-radius: var(--radius-md);
    padding: 0.75rem 1rem;
}
.contact-form .field-invalid { border-color: var(--error); }
.contact-form .field-valid { border-color: var(--success); }
.field-error {
    color: var(--error);
    font-size: var(--font-size-sm);
    margin-top: var(--space-xs);
    display: flex;
    align-items: center;
    gap: var(--space-xs);
}
.character-counter {
    text-align: right;
    font-size: var(--font-size-sm);
    margin-top: var(--space-xs);
}
.counter-neutral { color: var(--gray-500); }
.counter-warning { color: var(--warning); }
.counter-error { color: var(--error); }
.submit-btn.is-busy { opacity: 0.8; cursor: progress; }
.submit-btn .fa-spinner { margin-left: 8px; }
.form-success, .form-error {
    position: relative;
    color: white;
    padding: var(--space-xl);
    border-radius: var(--radius-lg);
    text-align: center;
    margin-bottom: var(--space-xl);
    box-shadow: var(--shadow-lg);
    animation: slideInDown 0.5s ease-out both;
}
.form-success { background: linear-gradient(135deg, var(--success), #059669); }
.form-error { background: linear-gradient(135deg, var(--error), #dc2626); }
.form-success i, .form-error i { font-size: 2rem; margin-bottom: var(--space-md); }
.form-success p, .form-error p { opacity: 0.9; margin: 0; }
.form-success.leaving, .form-error.leaving { animation: slideOutUp 0.5s ease-in both; }
.banner-close {
    position: absolute;
    top: 0.5rem;
    left: 0.75rem;
    background: none;
    border: none;
    color: white;
    font-size: 1.5rem;
    cursor: pointer;
}
@keyframes slideInDown {
    from { opacity: 0; transform: translateY(-30px); }
    to { opacity: 1; transform: translateY(0); }
}
@keyframes slideOutUp {
    from { opacity: 1; transform: translateY(0); }
    to { opacity: 0; transform: translateY(-30px); }
}
"#;
