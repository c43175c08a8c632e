use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
struct ConsoleTileProps {
    icon: AttrValue,
    title: AttrValue,
    text: AttrValue,
}

#[function_component(ConsoleTile)]
fn console_tile(props: &ConsoleTileProps) -> Html {
    html! {
        <div class="console-tile">
            <div class="console-tile__icon">{ props.icon.clone() }</div>
            <h3 class="console-tile__title">{ props.title.clone() }</h3>
            <p class="console-tile__text">{ props.text.clone() }</p>
            <div
                class="console-tile__glow"
                style={format!("box-shadow: 0 0 80px {}22;", config::NEON)}
            ></div>
        </div>
    }
}

#[function_component(ValueConsole)]
pub fn value_console() -> Html {
    html! {
        <section class="value-console">
            <style>
                {r#"
                .value-console {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 4rem 1rem;
                }

                .value-console__title {
                    text-align: center;
                    font-size: 1.75rem;
                    font-weight: 800;
                    color: #ffffff;
                    margin: 0 0 2.5rem;
                }

                .value-console__grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                }

                @media (min-width: 768px) {
                    .value-console__grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }

                .console-tile {
                    position: relative;
                    overflow: hidden;
                    border-radius: 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(26, 26, 26, 0.9);
                    padding: 1.5rem;
                    box-shadow: inset 0 0 0 1px rgba(255, 255, 255, 0.05),
                        0 10px 30px rgba(0, 0, 0, 0.5);
                    animation: tile-rise 0.5s ease both;
                }

                @keyframes tile-rise {
                    from {
                        opacity: 0;
                        transform: translateY(20px);
                    }
                    to {
                        opacity: 1;
                        transform: translateY(0);
                    }
                }

                .console-tile__icon {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 1rem;
                    padding: 0.75rem;
                    border-radius: 0.75rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    color: #6ee7b7;
                    font-size: 1.25rem;
                }

                .console-tile__title {
                    font-size: 1.1rem;
                    font-weight: 700;
                    color: #ffffff;
                    margin: 0 0 0.5rem;
                }

                .console-tile__text {
                    font-size: 0.9rem;
                    color: #cccccc;
                    margin: 0;
                }

                .console-tile__glow {
                    pointer-events: none;
                    position: absolute;
                    bottom: -6rem;
                    right: -6rem;
                    width: 12rem;
                    height: 12rem;
                    border-radius: 9999px;
                }
                "#}
            </style>

            <h2 class="value-console__title">{"How We Generate Your Edge"}</h2>
            <div class="value-console__grid">
                <ConsoleTile
                    icon="⚙"
                    title="Deep Data Analysis"
                    text="We go beyond the table. xG, xA, PPDA — we translate the numbers into actionable insights."
                />
                <ConsoleTile
                    icon="👥"
                    title="Expert Consensus"
                    text="No single opinion rules. Our picks are vetted by a council of seasoned analysts."
                />
                <ConsoleTile
                    icon="🔔"
                    title="Instant Alerts"
                    text="Get bets delivered the moment the line is sharp. Speed is profit."
                />
            </div>
        </section>
    }
}
