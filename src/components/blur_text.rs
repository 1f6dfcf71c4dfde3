use yew::prelude::*;

const BLUR_TEXT_CSS: &str = r#"
    .blur-text {
        display: flex;
        flex-wrap: wrap;
        margin: 0;
        animation-fill-mode: both;
        animation-timing-function: linear;
    }
    @keyframes blur-text-in-top {
        0% { filter: blur(10px); opacity: 0; transform: translateY(-20px); }
        50% { filter: blur(4px); opacity: 0.6; transform: translateY(5px); }
        100% { filter: blur(0px); opacity: 1; transform: translateY(0); }
    }
    @keyframes blur-text-in-bottom {
        0% { filter: blur(10px); opacity: 0; transform: translateY(20px); }
        50% { filter: blur(4px); opacity: 0.6; transform: translateY(-5px); }
        100% { filter: blur(0px); opacity: 1; transform: translateY(0); }
    }
"#;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BlurDirection {
    #[default]
    Top,
    Bottom,
}

impl BlurDirection {
    fn keyframes(self) -> &'static str {
        match self {
            BlurDirection::Top => "blur-text-in-top",
            BlurDirection::Bottom => "blur-text-in-bottom",
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct BlurTextProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub direction: BlurDirection,
    /// Seconds per keyframe step; the whole animation takes two steps.
    #[prop_or(0.35)]
    pub step_duration: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_animation_complete: Option<Callback<()>>,
}

/// Text that sharpens into view once when mounted. Give it a new `key` to
/// replay the animation.
#[function_component]
pub fn BlurText(props: &BlurTextProps) -> Html {
    let style = format!(
        "animation-name: {}; animation-duration: {:.3}s;",
        props.direction.keyframes(),
        props.step_duration * 2.0
    );
    let onanimationend = props.on_animation_complete.clone().map(|callback| {
        Callback::from(move |_: AnimationEvent| callback.emit(()))
    });

    html! {
        <>
            <style>{BLUR_TEXT_CSS}</style>
            <p class={classes!("blur-text", props.class.clone())} style={style} onanimationend={onanimationend}>
                {props.text.clone()}
            </p>
        </>
    }
}
