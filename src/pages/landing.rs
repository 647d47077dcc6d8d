use gloo_console::log;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::registration::RegistrationForm;
use crate::state::attribution::{self, LocalAttributionStore};
use crate::state::lead_form::LeadFields;
use crate::state::navigation::{self, Section};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then(|| "open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            if *is_open {
                <div class="faq-answer">
                    { for props.children.iter() }
                </div>
            }
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Runs once per page load: honor a section deep link from the entry URL
    // (falling back to the top of the page), then capture entry UTM
    // parameters for conversion tracking. Attribution is best effort; a
    // missing storage backend just skips the capture.
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    let fragment = window.location().hash().unwrap_or_default();
                    match Section::from_fragment(&fragment) {
                        Some(section) => navigation::scroll_to(section),
                        None => window.scroll_to_with_x_and_y(0.0, 0.0),
                    }
                    let query = window.location().search().unwrap_or_default();
                    if let Some(mut store) = LocalAttributionStore::open() {
                        attribution::capture(&query, &mut store);
                    }
                }
                || ()
            },
            (),
        );
    }

    // The lead-processing boundary. No transport is wired up here; the
    // serialized record is what a handler would receive.
    let on_lead = Callback::from(|lead: LeadFields| {
        match serde_json::to_string(&lead) {
            Ok(payload) => log!("lead submitted:", payload),
            Err(_) => log!("lead submitted"),
        }
    });

    let go_to_registration = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        navigation::scroll_to(Section::Register);
    });

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .landing-page {
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        color: #1a2b33;
                    }
                    .landing-section {
                        padding: 4rem 1.5rem;
                    }
                    .landing-section .section-inner {
                        max-width: 1080px;
                        margin: 0 auto;
                    }
                    .landing-section h2 {
                        font-size: 2rem;
                        text-align: center;
                        margin-bottom: 0.5rem;
                    }
                    .section-lead {
                        text-align: center;
                        color: #51666e;
                        margin-bottom: 2.5rem;
                    }
                    .hero {
                        background: linear-gradient(to bottom, #ffffff, #e6fffa);
                        padding: 5rem 1.5rem 4rem;
                    }
                    .hero .section-inner {
                        max-width: 1080px;
                        margin: 0 auto;
                    }
                    .hero-badges {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                        margin-bottom: 1rem;
                    }
                    .hero-badge {
                        background: #ccfbf1;
                        color: #0f766e;
                        border-radius: 9999px;
                        padding: 0.25rem 0.75rem;
                        font-size: 0.85rem;
                        font-weight: 600;
                    }
                    .hero h1 {
                        font-size: 2.6rem;
                        line-height: 1.2;
                        margin: 0 0 1rem;
                    }
                    .hero h1 .accent {
                        color: #14b8a6;
                        display: block;
                    }
                    .hero-sub {
                        font-size: 1.1rem;
                        color: #51666e;
                        margin-bottom: 1.5rem;
                    }
                    .hero-proof {
                        display: flex;
                        gap: 1.25rem;
                        margin-top: 1.25rem;
                        font-size: 0.9rem;
                        color: #0f766e;
                        font-weight: 600;
                    }
                    .cta-button {
                        background: #14b8a6;
                        color: #ffffff;
                        border: none;
                        border-radius: 8px;
                        padding: 0.9rem 2rem;
                        font-size: 1.05rem;
                        font-weight: 700;
                        cursor: pointer;
                        transition: background 0.2s, transform 0.2s;
                    }
                    .cta-button:hover {
                        background: #0d9488;
                        transform: translateY(-1px);
                    }
                    .feature-grid, .flow-grid, .story-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 1.5rem;
                    }
                    .feature-card, .flow-card, .story-card {
                        background: #ffffff;
                        border: 1px solid #d8e4e8;
                        border-radius: 12px;
                        padding: 1.5rem;
                        box-shadow: 0 2px 8px rgba(15, 118, 110, 0.06);
                    }
                    .feature-card h3, .flow-card h3, .story-card h3 {
                        margin-top: 0;
                    }
                    .flow-step-number {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 2rem;
                        height: 2rem;
                        border-radius: 50%;
                        background: #14b8a6;
                        color: #ffffff;
                        font-weight: 700;
                        margin-bottom: 0.75rem;
                    }
                    .story-meta {
                        color: #0f766e;
                        font-weight: 700;
                        font-size: 0.9rem;
                    }
                    .features-section { background: #f0fdfa; }
                    .flow-section { background: #f0fdfa; }
                    .faq-section { background: #f8fafc; }
                    .faq-item {
                        border-bottom: 1px solid #d8e4e8;
                        max-width: 720px;
                        margin: 0 auto;
                    }
                    .faq-question {
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        background: none;
                        border: none;
                        padding: 1rem 0.5rem;
                        font-size: 1rem;
                        font-weight: 600;
                        cursor: pointer;
                        text-align: left;
                    }
                    .faq-answer {
                        padding: 0 0.5rem 1rem;
                        color: #51666e;
                    }
                    .registration-section {
                        background: #ffffff;
                        border-top: 1px solid #d8e4e8;
                    }
                    .registration-card {
                        max-width: 460px;
                        margin: 0 auto;
                        background: #ffffff;
                        border: 1px solid #d8e4e8;
                        border-radius: 12px;
                        padding: 2rem;
                        box-shadow: 0 4px 16px rgba(15, 118, 110, 0.08);
                    }
                    .registration-card form {
                        display: flex;
                        flex-direction: column;
                        gap: 0.9rem;
                    }
                    .registration-card input {
                        padding: 0.75rem;
                        border: 1px solid #c3d4da;
                        border-radius: 8px;
                        font-size: 1rem;
                    }
                    .form-progress {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        margin-bottom: 1.5rem;
                    }
                    .progress-dot {
                        width: 2rem;
                        height: 2rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: 700;
                        background: #cbd5e1;
                        color: #475569;
                    }
                    .progress-dot.active {
                        background: #14b8a6;
                        color: #ffffff;
                    }
                    .progress-bar {
                        flex: 1;
                        height: 4px;
                        background: #cbd5e1;
                        border-radius: 2px;
                    }
                    .progress-bar.active { background: #14b8a6; }
                    .form-thanks { text-align: center; }
                    .landing-footer {
                        background: #134e4a;
                        color: #ccfbf1;
                        text-align: center;
                        padding: 2rem 1.5rem;
                        font-size: 0.9rem;
                    }
                    @media (max-width: 768px) {
                        .hero h1 { font-size: 2rem; }
                        .landing-section { padding: 3rem 1rem; }
                    }
                "#}
            </style>

            <section class="hero">
                <div class="section-inner">
                    <div class="hero-badges">
                        <span class="hero-badge">{"Agents for your 20s and 30s"}</span>
                        <span class="hero-badge">{"No experience needed"}</span>
                        <span class="hero-badge">{"98% placement success"}</span>
                    </div>
                    <h1>
                        <span class="accent">{"The #1 career switch service for first-timers"}</span>
                        {"Raise your salary by up to 20k"}
                    </h1>
                    <p class="hero-sub">
                        {"Our specialist agents place candidates in as little as two weeks, \
                          with a 95%+ screening pass rate on applications we prepare."}
                    </p>
                    <button class="cta-button" onclick={go_to_registration.clone()}>
                        {"Get your free assessment now"}
                    </button>
                    <div class="hero-proof">
                        <span>{"Completely free"}</span>
                        <span>{"Sign-up takes 1 minute"}</span>
                        <span>{"28 placements this week"}</span>
                    </div>
                </div>
            </section>

            <section id={Section::Features.id()} class="landing-section features-section">
                <div class="section-inner">
                    <h2>{Section::Features.label()}</h2>
                    <p class="section-lead">{"Everything you need to land a better job, handled for you."}</p>
                    <div class="feature-grid">
                        <div class="feature-card">
                            <h3>{"Unlisted openings"}</h3>
                            <p>{"Most of the roles we place never reach public job boards. Your agent matches you against the full book."}</p>
                        </div>
                        <div class="feature-card">
                            <h3>{"Application coaching"}</h3>
                            <p>{"We rewrite your resume, rehearse your interviews, and handle the scheduling back-and-forth."}</p>
                        </div>
                        <div class="feature-card">
                            <h3>{"Salary negotiation"}</h3>
                            <p>{"Your agent negotiates the offer for you. Candidates move up an average of 13k on switch."}</p>
                        </div>
                    </div>
                </div>
            </section>

            <section id={Section::Success.id()} class="landing-section">
                <div class="section-inner">
                    <h2>{Section::Success.label()}</h2>
                    <p class="section-lead">{"Real switches from people who started exactly where you are."}</p>
                    <div class="story-grid">
                        <div class="story-card">
                            <h3>{"Retail to IT support"}</h3>
                            <p class="story-meta">{"26, placed in 3 weeks, +9k"}</p>
                            <p>{"\"I assumed no experience meant starting over at the bottom. My agent found a team that trains on the job.\""}</p>
                        </div>
                        <div class="story-card">
                            <h3>{"Admin to web marketing"}</h3>
                            <p class="story-meta">{"29, placed in 2 weeks, +14k"}</p>
                            <p>{"\"The interview prep made the difference. I walked in knowing exactly what they would ask.\""}</p>
                        </div>
                        <div class="story-card">
                            <h3>{"Sales to engineering"}</h3>
                            <p class="story-meta">{"31, placed in 6 weeks, +21k"}</p>
                            <p>{"\"They negotiated a number I would never have asked for myself.\""}</p>
                        </div>
                    </div>
                </div>
            </section>

            <section id={Section::Flow.id()} class="landing-section flow-section">
                <div class="section-inner">
                    <h2>{Section::Flow.label()}</h2>
                    <p class="section-lead">{"From sign-up to offer in four steps."}</p>
                    <div class="flow-grid">
                        <div class="flow-card">
                            <div class="flow-step-number">{"1"}</div>
                            <h3>{"Free assessment"}</h3>
                            <p>{"Tell us where you are and where you want to go. Takes a minute."}</p>
                        </div>
                        <div class="flow-card">
                            <div class="flow-step-number">{"2"}</div>
                            <h3>{"Agent interview"}</h3>
                            <p>{"A 30-minute call to map your strengths and shortlist roles."}</p>
                        </div>
                        <div class="flow-card">
                            <div class="flow-step-number">{"3"}</div>
                            <h3>{"Applications"}</h3>
                            <p>{"We prepare and submit your applications and book the interviews."}</p>
                        </div>
                        <div class="flow-card">
                            <div class="flow-step-number">{"4"}</div>
                            <h3>{"Offer and start"}</h3>
                            <p>{"We negotiate the offer and support you through your notice period."}</p>
                        </div>
                    </div>
                </div>
            </section>

            <section id={Section::Faq.id()} class="landing-section faq-section">
                <div class="section-inner">
                    <h2>{Section::Faq.label()}</h2>
                    <p class="section-lead">{"Straight answers before you commit a single minute."}</p>

                    <FaqItem question="Is the service really free?">
                        <p>{"Yes. Hiring companies pay our fee, so coaching, applications, and negotiation cost you nothing at any stage."}</p>
                    </FaqItem>
                    <FaqItem question="I have no experience in the field I want. Can you still help?">
                        <p>{"That is our specialty. Most of our placements are career changers, and many of our partner companies train on the job."}</p>
                    </FaqItem>
                    <FaqItem question="How fast can I actually switch?">
                        <p>{"The median is about a month from assessment to signed offer. Two weeks is realistic when your availability lines up with interview slots."}</p>
                    </FaqItem>
                    <FaqItem question="Will my current employer find out?">
                        <p>{"No. We never contact your employer, and your profile is only shared with companies you approve first."}</p>
                    </FaqItem>
                </div>
            </section>

            <section id={Section::Register.id()} class="landing-section registration-section">
                <div class="section-inner">
                    <h2>{"Start your free assessment"}</h2>
                    <p class="section-lead">{"Two short steps. A consultant replies within one business day."}</p>
                    <RegistrationForm on_lead={on_lead} />
                </div>
            </section>

            <footer class="landing-footer">
                <p>{"CareerMatch — the career switch service for your 20s and 30s."}</p>
                <p>{"© 2026 CareerMatch Inc."}</p>
            </footer>
        </div>
    }
}
