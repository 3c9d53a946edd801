use yew::prelude::*;

use crate::config::GLOW_DIAMETER;
use crate::scroll_spy::{glow_origin, Pointer};

#[derive(Properties, PartialEq)]
pub struct GlowProps {
    pub pointer: Pointer,
}

/// Blurred cyan orb pinned to the viewport, centred on the pointer.
#[function_component(Glow)]
pub fn glow(props: &GlowProps) -> Html {
    let (left, top) = glow_origin(props.pointer);
    let style = format!(
        "left: {}px; top: {}px; width: {}px; height: {}px;",
        left, top, GLOW_DIAMETER, GLOW_DIAMETER
    );

    html! {
        <>
            <div class="pointer-glow" {style}></div>
            <style>
                {r#"
                .pointer-glow {
                    position: fixed;
                    border-radius: 9999px;
                    background: radial-gradient(circle, rgba(6, 182, 212, 0.15) 0%, transparent 70%);
                    filter: blur(120px);
                    pointer-events: none;
                    transition: left 0.3s ease-out, top 0.3s ease-out;
                    z-index: 0;
                }
                "#}
            </style>
        </>
    }
}
