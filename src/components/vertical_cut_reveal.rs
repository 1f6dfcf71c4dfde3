use std::collections::HashMap;

use yew::prelude::*;

use crate::reveal::{
    highlight_token, split_text, stagger_delay, total_elements, SplitBy, SpringTransition,
    StaggerFrom,
};

const CUT_REVEAL_CSS: &str = r#"
    .cut-reveal {
        display: flex;
        flex-wrap: wrap;
        white-space: pre-wrap;
    }
    .cut-reveal--lines {
        flex-direction: column;
    }
    .cut-reveal__sr-only {
        position: absolute;
        width: 1px;
        height: 1px;
        padding: 0;
        margin: -1px;
        overflow: hidden;
        clip: rect(0, 0, 0, 0);
        white-space: nowrap;
        border: 0;
    }
    .cut-reveal__word {
        display: inline-flex;
        overflow: hidden;
    }
    .cut-reveal__clip {
        position: relative;
        white-space: pre-wrap;
    }
    .cut-reveal__glyph {
        display: inline-block;
    }
    .cut-reveal__glyph--hidden-up {
        transform: translateY(100%);
    }
    .cut-reveal__glyph--hidden-down {
        transform: translateY(-100%);
    }
    @keyframes cut-reveal-up {
        from { transform: translateY(100%); }
        to { transform: translateY(0); }
    }
    @keyframes cut-reveal-down {
        from { transform: translateY(-100%); }
        to { transform: translateY(0); }
    }
"#;

#[derive(Properties, PartialEq, Clone)]
pub struct VerticalCutRevealProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub split_by: SplitBy,
    /// Seconds between neighbouring elements.
    #[prop_or(0.2)]
    pub stagger_duration: f64,
    #[prop_or_default]
    pub stagger_from: StaggerFrom,
    /// Slide in from above instead of below.
    #[prop_or_default]
    pub reverse: bool,
    #[prop_or_default]
    pub transition: SpringTransition,
    #[prop_or_default]
    pub container_class: Classes,
    #[prop_or_default]
    pub word_class: Classes,
    #[prop_or_default]
    pub element_class: Classes,
    /// Word → extra classes. Only consulted when splitting by words.
    #[prop_or_default]
    pub highlight_words: HashMap<String, String>,
    /// Reveal immediately. Flipping this to false hides the text again.
    #[prop_or(true)]
    pub auto_start: bool,
    #[prop_or_default]
    pub on_start: Option<Callback<()>>,
    #[prop_or_default]
    pub on_complete: Option<Callback<()>>,
}

#[function_component]
pub fn VerticalCutReveal(props: &VerticalCutRevealProps) -> Html {
    let animating = use_state(|| false);

    {
        let animating = animating.clone();
        let on_start = props.on_start.clone();
        use_effect_with_deps(
            move |auto_start| {
                animating.set(*auto_start);
                if *auto_start {
                    if let Some(on_start) = on_start {
                        on_start.emit(());
                    }
                }
                || ()
            },
            props.auto_start,
        );
    }

    let words = use_memo(
        |(text, split_by)| split_text(text, split_by),
        (props.text.clone(), props.split_by.clone()),
    );

    let delays = {
        let total = total_elements(&words, &props.split_by);
        use_memo(
            |(total, from, step)| {
                let mut rng = rand::thread_rng();
                (0..*total)
                    .map(|index| stagger_delay(index, *total, *from, *step, &mut rng))
                    .collect::<Vec<f64>>()
            },
            (total, props.stagger_from, props.stagger_duration),
        )
    };

    let by_words = props.split_by == SplitBy::Words;
    let hidden_class = if props.reverse {
        "cut-reveal__glyph--hidden-down"
    } else {
        "cut-reveal__glyph--hidden-up"
    };
    let keyframes = if props.reverse { "cut-reveal-down" } else { "cut-reveal-up" };
    let duration = props.transition.duration();
    let easing = props.transition.css_easing();
    let last_word = words.len().saturating_sub(1);

    let mut prefix = 0;
    let rendered = words.iter().enumerate().map(|(word_index, word)| {
        let word_start = prefix;
        prefix += word.elements.len();
        let last_element = word.elements.len().saturating_sub(1);

        let elements = word.elements.iter().enumerate().map(|(element_index, element)| {
            let highlight = if by_words {
                props.highlight_words.get(&highlight_token(element)).cloned()
            } else {
                None
            };
            let global_index = word_start + element_index;
            let delay = props.transition.delay + delays.get(global_index).copied().unwrap_or(0.0);

            let (glyph_class, style) = if *animating {
                (
                    None,
                    format!(
                        "animation: {} {:.3}s {} {:.3}s both;",
                        keyframes, duration, easing, delay
                    ),
                )
            } else {
                (Some(hidden_class), String::new())
            };

            let is_last = word_index == last_word && element_index == last_element;
            let onanimationend = match (&props.on_complete, is_last) {
                (Some(on_complete), true) => {
                    let on_complete = on_complete.clone();
                    Some(Callback::from(move |_: AnimationEvent| on_complete.emit(())))
                }
                _ => None,
            };

            html! {
                <span
                    class={classes!(props.element_class.clone(), highlight, "cut-reveal__clip")}
                    key={format!("{}-{}", word_index, element_index)}
                >
                    <span class={classes!("cut-reveal__glyph", glyph_class)} style={style} onanimationend={onanimationend}>
                        {element.clone()}
                    </span>
                </span>
            }
        });

        html! {
            <span
                key={format!("{}-{}", word_index, word.elements.concat())}
                aria-hidden="true"
                class={classes!("cut-reveal__word", props.word_class.clone())}
            >
                {for elements}
                if word.needs_space {
                    <span>{" "}</span>
                }
            </span>
        }
    }).collect::<Html>();

    html! {
        <span
            class={classes!(
                props.container_class.clone(),
                "cut-reveal",
                (props.split_by == SplitBy::Lines).then_some("cut-reveal--lines")
            )}
        >
            <style>{CUT_REVEAL_CSS}</style>
            <span class="cut-reveal__sr-only">{props.text.clone()}</span>
            {rendered}
        </span>
    }
}
