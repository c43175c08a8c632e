use web_sys::{Event, HtmlInputElement, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_interval;

use crate::components::glow_button::GlowButton;
use crate::config;

const HEADLINES: [&str; 3] = [
    "Data-Driven Wins.",
    "Community-Powered Profits.",
    "Your Edge, Delivered.",
];

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_telegram: Callback<MouseEvent>,
    pub on_whatsapp: Callback<MouseEvent>,
    pub sound_enabled: bool,
    pub on_sound_toggle: Callback<bool>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let headline_index = use_state(|| 0usize);

    {
        let headline_index = headline_index.clone();
        use_interval(
            move || {
                headline_index.set((*headline_index + 1) % HEADLINES.len());
            },
            config::HEADLINE_ROTATION_MS,
        );
    }
    let headline = HEADLINES[*headline_index];

    let on_sound_change = {
        let on_sound_toggle = props.on_sound_toggle.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            on_sound_toggle.emit(input.checked());
        })
    };

    html! {
        <section class="hero" style={format!("background: {};", config::BG)}>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 88vh;
                    width: 100%;
                    overflow: hidden;
                }

                .hero__video-wrap {
                    position: absolute;
                    inset: 0;
                    opacity: 0.4;
                }

                .hero__video {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .hero__scrim {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.6);
                }

                .hero__content {
                    position: relative;
                    z-index: 1;
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 7rem 1rem 4rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    color: #ffffff;
                }

                .hero__kicker {
                    font-size: 0.85rem;
                    color: #bbbbbb;
                    letter-spacing: 0.1em;
                    margin-bottom: 1.5rem;
                    animation: hero-rise 0.8s ease both;
                }

                .hero__logo {
                    width: 8rem;
                    height: 8rem;
                    margin-bottom: 1rem;
                    filter: drop-shadow(0 8px 16px rgba(0, 0, 0, 0.5));
                }

                .hero__headline {
                    font-size: 3rem;
                    font-weight: 800;
                    letter-spacing: 0.5px;
                    margin: 0;
                    animation: hero-rise 0.5s ease both;
                }

                @media (min-width: 768px) {
                    .hero__headline {
                        font-size: 4rem;
                    }
                }

                @keyframes hero-rise {
                    from {
                        opacity: 0;
                        transform: translateY(10px);
                    }
                    to {
                        opacity: 1;
                        transform: translateY(0);
                    }
                }

                .hero__subtitle {
                    margin-top: 1rem;
                    max-width: 42rem;
                    color: #cccccc;
                    font-size: 1.05rem;
                    line-height: 1.6;
                }

                .hero__actions {
                    margin-top: 2rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1rem;
                }

                @media (min-width: 640px) {
                    .hero__actions {
                        flex-direction: row;
                    }
                }

                .hero__sound {
                    margin-top: 1.25rem;
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.85rem;
                    color: #999999;
                }

                .hero__sound input {
                    width: 1rem;
                    height: 1rem;
                    accent-color: #00FF87;
                }

                .hero__badge {
                    margin-top: 2rem;
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    font-size: 0.75rem;
                    color: #cccccc;
                }
                "#}
            </style>

            <div class="hero__video-wrap">
                <video
                    class="hero__video"
                    src={config::HERO_VIDEO_URL}
                    autoplay={true}
                    loop={true}
                    muted={true}
                    playsinline={true}
                />
            </div>
            <div class="hero__scrim"></div>

            <div class="hero__content">
                <div class="hero__kicker">{"THE FOOTBALL ANALYST • INSIDER HUB"}</div>

                <img class="hero__logo" src={config::LOGO_URL} alt="THE FOOTBALL ANALYST" />

                <h1 key={headline} class="hero__headline">{ headline }</h1>

                <p class="hero__subtitle">
                    {"The dark-mode nerve center for strategic bettors. Join the community, \
                      get actionable insights, and win together."}
                </p>

                <div class="hero__actions">
                    <GlowButton
                        label="JOIN THE TELEGRAM INSIDERS"
                        icon="▶"
                        accent={config::NEON}
                        on_activate={props.on_telegram.clone()}
                    />
                    <GlowButton
                        label="GET WHATSAPP ALERTS"
                        icon="🔔"
                        accent={config::ORANGE}
                        on_activate={props.on_whatsapp.clone()}
                    />
                </div>

                <div class="hero__sound">
                    <label>
                        <input
                            type="checkbox"
                            checked={props.sound_enabled}
                            onchange={on_sound_change}
                        />
                        {" Subtle hover/click sound"}
                    </label>
                </div>

                <div class="hero__badge">
                    <span>{"👥"}</span>
                    <span>{format!("{} members and growing", config::MEMBER_COUNT)}</span>
                </div>
            </div>
        </section>
    }
}
