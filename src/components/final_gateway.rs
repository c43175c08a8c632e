use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::glow_button::GlowButton;
use crate::config;

#[derive(Properties, PartialEq)]
pub struct FinalGatewayProps {
    pub on_telegram: Callback<MouseEvent>,
    pub on_whatsapp: Callback<MouseEvent>,
}

#[function_component(FinalGateway)]
pub fn final_gateway(props: &FinalGatewayProps) -> Html {
    html! {
        <section class="final-gateway">
            <style>
                {r#"
                .final-gateway {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 5rem 1rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                }

                .final-gateway__title {
                    font-size: 2rem;
                    font-weight: 800;
                    color: #ffffff;
                    margin: 0;
                }

                @media (min-width: 768px) {
                    .final-gateway__title {
                        font-size: 2.5rem;
                    }
                }

                .final-gateway__subtitle {
                    margin-top: 0.75rem;
                    max-width: 42rem;
                    color: #cccccc;
                }

                .final-gateway__count {
                    color: #34d399;
                }

                .final-gateway__actions {
                    margin-top: 2rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1rem;
                }

                @media (min-width: 640px) {
                    .final-gateway__actions {
                        flex-direction: row;
                    }
                }
                "#}
            </style>

            <h2 class="final-gateway__title">
                {"The Final Whistle is Approaching. Are You In or Out?"}
            </h2>
            <p class="final-gateway__subtitle">
                {"Join "}
                <span class="final-gateway__count">{ config::MEMBER_COUNT }</span>
                {" savvy bettors who are already winning. Your next big play is one click away."}
            </p>
            <div class="final-gateway__actions">
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
        </section>
    }
}
