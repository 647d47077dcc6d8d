use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config;
use crate::state::countdown::CountdownAction;

/// Sticky bar above the header counting down today's registration bonus.
#[function_component(OfferBanner)]
pub fn offer_banner() -> Html {
    let countdown = use_reducer(|| config::OFFER_COUNTDOWN_START);

    {
        let countdown = countdown.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(1_000, move || {
                    countdown.dispatch(CountdownAction::Tick);
                });
                // Dropping the handle cancels the interval on unmount.
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <div class="offer-banner">
            <style>
                {r#"
                    .offer-banner {
                        position: sticky;
                        top: 0;
                        z-index: 50;
                        background: #fef9c3;
                        color: #854d0e;
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        font-size: 0.9rem;
                        text-align: center;
                    }
                    .offer-countdown {
                        background: #fee2e2;
                        color: #b91c1c;
                        border-radius: 4px;
                        padding: 0.1rem 0.5rem;
                        font-weight: 700;
                        font-variant-numeric: tabular-nums;
                    }
                    .offer-countdown.expired { opacity: 0.7; }
                "#}
            </style>
            <span class="offer-text">
                <strong>{"Today only"}</strong>
                {": register and get 10 unlisted job openings as a welcome bonus!"}
            </span>
            <span class={classes!("offer-countdown", countdown.expired().then(|| "expired"))}>
                {format!("Time left: {}", *countdown)}
            </span>
        </div>
    }
}
