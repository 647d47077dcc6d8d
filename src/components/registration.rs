use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::state::lead_form::{FormStep, LeadFields, SubmitOutcome};
use crate::state::navigation;

/// How long to give the DOM to show the new panel before re-centering the
/// form on it.
const STEP_SCROLL_DELAY_MS: u32 = 100;

#[derive(Properties, PartialEq)]
pub struct RegistrationFormProps {
    /// Submission boundary: fired exactly once, on the terminal submit, with
    /// every field collected across both steps.
    pub on_lead: Callback<LeadFields>,
}

fn field_setter(
    fields: &UseStateHandle<LeadFields>,
    apply: fn(&mut LeadFields, String),
) -> Callback<Event> {
    let fields = fields.clone();
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*fields).clone();
        apply(&mut next, input.value());
        fields.set(next);
    })
}

/// Two-step lead form. The inputs carry native `required`/`type` attributes
/// so the browser gates submission; `FormStep::submit` re-checks the same
/// rules so the step machine holds regardless.
#[function_component(RegistrationForm)]
pub fn registration_form(props: &RegistrationFormProps) -> Html {
    let step = use_state(|| FormStep::BasicInfo);
    let fields = use_state(LeadFields::default);

    let onsubmit = {
        let step = step.clone();
        let fields = fields.clone();
        let on_lead = props.on_lead.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (next, outcome) = (*step).submit(&fields);
            match outcome {
                SubmitOutcome::Advanced => {
                    step.set(next);
                    // Let the job panel render before bringing it into view.
                    Timeout::new(STEP_SCROLL_DELAY_MS, || {
                        navigation::scroll_to_registration_centered();
                    })
                    .forget();
                }
                SubmitOutcome::Completed => {
                    on_lead.emit((*fields).clone());
                    step.set(next);
                }
                SubmitOutcome::Rejected => {}
            }
        })
    };

    let step_number = step.number();
    let progress = html! {
        <div class="form-progress">
            <div class="progress-dot active">{"1"}</div>
            <div class={classes!("progress-bar", (step_number >= 2).then(|| "active"))}></div>
            <div class={classes!("progress-dot", (step_number >= 2).then(|| "active"))}>{"2"}</div>
        </div>
    };

    html! {
        <div class="registration-card">
            { progress }
            {
                match *step {
                    FormStep::BasicInfo => html! {
                        <form onsubmit={onsubmit.clone()}>
                            <h3>{"Step 1: About you"}</h3>
                            <input
                                type="text"
                                placeholder="Full name"
                                required={true}
                                value={fields.name.clone()}
                                onchange={field_setter(&fields, |f, v| f.name = v)}
                            />
                            <input
                                type="number"
                                placeholder="Age"
                                required={true}
                                value={fields.age.clone()}
                                onchange={field_setter(&fields, |f, v| f.age = v)}
                            />
                            <input
                                type="email"
                                placeholder="Email address"
                                required={true}
                                value={fields.email.clone()}
                                onchange={field_setter(&fields, |f, v| f.email = v)}
                            />
                            <input
                                type="tel"
                                placeholder="Phone number"
                                required={true}
                                value={fields.phone.clone()}
                                onchange={field_setter(&fields, |f, v| f.phone = v)}
                            />
                            <button type="submit" class="cta-button">{"Continue"}</button>
                        </form>
                    },
                    FormStep::JobInfo => html! {
                        <form onsubmit={onsubmit.clone()}>
                            <h3>{"Step 2: Your career"}</h3>
                            <input
                                type="text"
                                placeholder="Current job title"
                                required={true}
                                value={fields.current_job.clone()}
                                onchange={field_setter(&fields, |f, v| f.current_job = v)}
                            />
                            <input
                                type="number"
                                placeholder="Current annual salary (thousands)"
                                required={true}
                                value={fields.current_salary.clone()}
                                onchange={field_setter(&fields, |f, v| f.current_salary = v)}
                            />
                            <input
                                type="text"
                                placeholder="Desired job title"
                                required={true}
                                value={fields.desired_job.clone()}
                                onchange={field_setter(&fields, |f, v| f.desired_job = v)}
                            />
                            <button type="submit" class="cta-button">{"Get my free assessment"}</button>
                        </form>
                    },
                    FormStep::Submitted => html! {
                        <div class="form-thanks">
                            <h3>{"Thank you!"}</h3>
                            <p>{"Your free assessment request is in. A consultant will reach out within one business day."}</p>
                        </div>
                    },
                }
            }
        </div>
    }
}
