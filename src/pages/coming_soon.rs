use std::collections::HashMap;

use yew::prelude::*;

use crate::components::countdown_timer::CountdownTimer;
use crate::components::hills_background::HillsBackground;
use crate::components::image_trail::ImageTrail;
use crate::components::vertical_cut_reveal::VerticalCutReveal;
use crate::config;
use crate::countdown::{launch_label, parse_launch_date};
use crate::data::gallery_items;
use crate::reveal::{SplitBy, SpringTransition, StaggerFrom};
use crate::utils::dom::apply_metadata;

const PAGE_CSS: &str = r#"
    .coming-soon {
        position: relative;
        min-height: 100vh;
        width: 100%;
        overflow: hidden;
        isolation: isolate;
        color: #111827;
    }
    .coming-soon__background {
        position: absolute;
        inset: 0;
        z-index: -20;
        pointer-events: none;
    }
    .coming-soon__trail {
        position: absolute;
        inset: 0;
        z-index: 10;
        pointer-events: auto;
    }
    .coming-soon__content {
        position: relative;
        z-index: 20;
        display: flex;
        min-height: 100vh;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        gap: 3rem;
        padding: 4rem 1.5rem;
        text-align: center;
        pointer-events: none;
    }
    .coming-soon__brand {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 1.5rem;
    }
    .coming-soon__logo {
        height: 12rem;
        width: auto;
        opacity: 0.9;
    }
    .coming-soon__title {
        margin: 0;
        font-size: 3.75rem;
        font-style: italic;
        font-weight: 100;
        white-space: pre-wrap;
    }
    .coming-soon__details {
        display: flex;
        width: 100%;
        max-width: 48rem;
        flex-direction: column;
        align-items: center;
        gap: 3rem;
    }
    .coming-soon__launch {
        margin: 0;
        font-size: 1.125rem;
        color: rgba(17, 24, 39, 0.6);
    }
    .coming-soon__tagline {
        display: flex;
        flex-wrap: wrap;
        align-items: baseline;
        justify-content: center;
        font-size: 1.25rem;
        line-height: 1.65;
        color: rgba(17, 24, 39, 0.7);
    }
    .coming-soon__tagline-words {
        display: inline-flex;
        flex-wrap: wrap;
        align-items: baseline;
        row-gap: 0.25rem;
    }
    .coming-soon__tagline-element {
        padding: 0 2px;
    }
    .coming-soon__highlight {
        font-weight: 900;
        letter-spacing: 0.05em;
        color: #6a4dfc;
    }
    @media (min-width: 768px) {
        .coming-soon__content { padding: 4rem 2.5rem; }
        .coming-soon__launch { font-size: 1.25rem; }
        .coming-soon__tagline { font-size: 1.5rem; }
    }
"#;

#[function_component]
pub fn ComingSoon() -> Html {
    use_effect_with_deps(
        |_| {
            if let Err(e) = apply_metadata(config::PAGE_TITLE, config::PAGE_DESCRIPTION) {
                log::warn!("Failed to set page metadata: {}", e);
            }
            || ()
        },
        (),
    );

    let items = use_memo(|_| gallery_items(), ());
    let launch_date = config::get_launch_date();
    let launch_text = match parse_launch_date(launch_date) {
        Ok(date) => Some(launch_label(&date, config::get_launch_zone_label())),
        Err(e) => {
            log::warn!("Launch date {:?} is invalid: {}", launch_date, e);
            None
        }
    };
    let highlight_words = HashMap::from([(
        config::TAGLINE_HIGHLIGHT.to_string(),
        "coming-soon__highlight".to_string(),
    )]);

    html! {
        <div class="coming-soon">
            <style>{PAGE_CSS}</style>
            <div class="coming-soon__background">
                <HillsBackground />
            </div>
            <div class="coming-soon__trail">
                <ImageTrail items={(*items).clone()} />
            </div>
            <div class="coming-soon__content">
                <div class="coming-soon__brand">
                    <img
                        src={config::LOGO_PATH}
                        alt={config::LOGO_ALT}
                        class="coming-soon__logo"
                        loading="lazy"
                    />
                    <h1 class="coming-soon__title">{"Coming Soon"}</h1>
                </div>
                <div class="coming-soon__details">
                    <CountdownTimer target={launch_date} />
                    if let Some(text) = launch_text {
                        <p class="coming-soon__launch">{text}</p>
                    }
                    <div class="coming-soon__tagline">
                        <VerticalCutReveal
                            text={config::TAGLINE}
                            split_by={SplitBy::Words}
                            stagger_duration={0.12}
                            stagger_from={StaggerFrom::First}
                            container_class="coming-soon__tagline-words"
                            element_class="coming-soon__tagline-element"
                            highlight_words={highlight_words}
                            transition={SpringTransition::new(200.0, 28.0, 0.2)}
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}
