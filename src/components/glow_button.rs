use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::effects::confetti;

#[derive(Properties, PartialEq)]
pub struct GlowButtonProps {
    pub label: AttrValue,
    pub icon: AttrValue,
    /// Accent color for the glow, e.g. the brand neon or orange.
    pub accent: AttrValue,
    pub on_activate: Callback<MouseEvent>,
}

#[function_component(GlowButton)]
pub fn glow_button(props: &GlowButtonProps) -> Html {
    let node_ref = use_node_ref();

    let onclick = {
        let node_ref = node_ref.clone();
        let on_activate = props.on_activate.clone();
        Callback::from(move |event: MouseEvent| {
            if let Some(element) = node_ref.cast::<web_sys::Element>() {
                confetti::burst_from(&element);
            }
            on_activate.emit(event);
        })
    };

    let accent = props.accent.clone();
    let button_style = format!(
        "background: radial-gradient(120% 120% at 50% 120%, {accent}22 0%, {panel} 60%); \
         color: {text}; \
         box-shadow: 0 0 20px {accent}44, inset 0 0 12px {accent}22; \
         border: 1px solid {accent}66;",
        accent = accent,
        panel = config::PANEL,
        text = config::TEXT,
    );

    html! {
        <>
            <style>
                {r#"
                .glow-button {
                    position: relative;
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.75rem 1.5rem;
                    border-radius: 9999px;
                    font-weight: 600;
                    letter-spacing: 0.05em;
                    font-size: 0.95rem;
                    cursor: pointer;
                    transition: transform 0.15s ease;
                }

                .glow-button:hover {
                    transform: scale(1.03);
                }

                .glow-button:active {
                    transform: scale(0.98);
                }

                .glow-button__pulse {
                    position: absolute;
                    inset: -2px;
                    border-radius: 9999px;
                    animation: glow-pulse 2s ease-in-out infinite;
                    pointer-events: none;
                }

                @keyframes glow-pulse {
                    0%, 100% { opacity: 0.4; }
                    50% { opacity: 1; }
                }

                .glow-button__face {
                    position: relative;
                    z-index: 1;
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                "#}
            </style>
            <button ref={node_ref} class="glow-button" {onclick} style={button_style}>
                <span
                    class="glow-button__pulse"
                    style={format!("box-shadow: 0 0 30px {}33;", accent)}
                ></span>
                <span class="glow-button__face">
                    <span class="glow-button__icon">{ props.icon.clone() }</span>
                    { props.label.clone() }
                </span>
            </button>
        </>
    }
}
