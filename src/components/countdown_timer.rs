use chrono::Utc;
use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::components::blur_text::{BlurDirection, BlurText};
use crate::countdown::{pad, parse_launch_date, CountdownUnit, TimeLeft};

const COUNTDOWN_CSS: &str = r#"
    .countdown {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 1rem;
    }
    .countdown__label {
        font-size: 0.8rem;
        font-weight: 600;
        letter-spacing: 0.5em;
        text-transform: uppercase;
        color: rgba(255, 255, 255, 0.7);
    }
    .countdown__units {
        display: flex;
        flex-wrap: wrap;
        align-items: center;
        justify-content: center;
        gap: 1.5rem;
        color: #6a4dfc;
    }
    .countdown__unit {
        display: flex;
        align-items: center;
        gap: 0.75rem;
    }
    .countdown__value {
        font-size: 3rem;
        font-weight: 600;
        font-variant-numeric: tabular-nums;
        background: linear-gradient(to right, #4f46e5, #9333ea);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .countdown__value--pending {
        color: #6a4dfc;
        background: none;
        opacity: 0.7;
    }
    .countdown__unit-name {
        font-size: 0.8rem;
        letter-spacing: 0.35em;
        text-transform: uppercase;
    }
    .countdown__separator {
        font-size: 2.25rem;
        font-weight: 600;
    }
    .countdown__expired {
        font-size: 0.9rem;
        font-weight: 500;
        letter-spacing: 0.1em;
        text-transform: uppercase;
        color: rgba(255, 255, 255, 0.8);
    }
    @media (max-width: 640px) {
        .countdown__value { font-size: 1.9rem; }
        .countdown__separator { font-size: 1.5rem; }
    }
"#;

#[derive(Properties, PartialEq, Clone)]
pub struct CountdownTimerProps {
    /// Launch moment as an ISO-8601 timestamp with offset.
    pub target: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

#[function_component]
pub fn CountdownTimer(props: &CountdownTimerProps) -> Html {
    // None until the first tick so the initial paint shows placeholders
    let time_left = use_state(|| None::<TimeLeft>);

    {
        let time_left = time_left.clone();
        use_effect_with_deps(
            move |target: &AttrValue| {
                let target = match parse_launch_date(target) {
                    Ok(date) => Some(date),
                    Err(e) => {
                        log::warn!("Countdown target {:?} is unusable, showing expired: {}", target, e);
                        None
                    }
                };
                let tick = move || {
                    time_left.set(Some(TimeLeft::until(target.as_ref(), Utc::now())));
                };
                tick();
                let interval = Interval::new(1_000, tick);
                move || drop(interval)
            },
            props.target.clone(),
        );
    }

    let label = props.label.as_ref().map(|label| {
        html! { <span class="countdown__label">{label.clone()}</span> }
    });

    let units = CountdownUnit::ALL.iter().enumerate().map(|(index, unit)| {
        let value = match *time_left {
            Some(left) => {
                let value = pad(left.value(*unit));
                let key = format!("{}-{}", unit.label(), value);
                html! {
                    <BlurText
                        key={key}
                        text={value}
                        direction={BlurDirection::Top}
                        step_duration={0.3}
                        class="countdown__value"
                    />
                }
            }
            None => html! {
                <span class="countdown__value countdown__value--pending">{"--"}</span>
            },
        };
        html! {
            <div class="countdown__unit" key={unit.label()}>
                {value}
                <span class="countdown__unit-name">{unit.label()}</span>
                if index < CountdownUnit::ALL.len() - 1 {
                    <span class="countdown__separator">{":"}</span>
                }
            </div>
        }
    });

    let expired = matches!(*time_left, Some(left) if left.expired);

    html! {
        <div class={classes!("countdown", props.class.clone())}>
            <style>{COUNTDOWN_CSS}</style>
            {label}
            <div class="countdown__units">
                {for units}
            </div>
            if expired {
                <span class="countdown__expired">{"It's time!"}</span>
            }
        </div>
    }
}
