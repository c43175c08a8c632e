use log::{info, Level};
use web_sys::MouseEvent;
use yew::prelude::*;

mod config;
mod deeplink;
mod platform;
mod sound;
mod effects {
    pub mod confetti;
}
mod components {
    pub mod carousel;
    pub mod final_gateway;
    pub mod footer;
    pub mod glow_button;
    pub mod hero;
    pub mod ticker;
    pub mod value_console;
    pub mod win_card;
}

use components::{
    carousel::Carousel,
    final_gateway::FinalGateway,
    footer::Footer,
    hero::Hero,
    ticker::LiveTicker,
    value_console::ValueConsole,
};
use sound::ClickSound;

#[function_component]
fn App() -> Html {
    let sound_enabled = use_state(|| false);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // Rebuilt when the toggle changes, not per click.
    let click_sound = use_memo(
        |enabled| if *enabled { ClickSound::new() } else { None },
        *sound_enabled,
    );

    let on_sound_toggle = {
        let sound_enabled = sound_enabled.clone();
        Callback::from(move |enabled: bool| sound_enabled.set(enabled))
    };

    let on_telegram = {
        let click_sound = click_sound.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(sound) = click_sound.as_ref() {
                sound.play();
            }
            deeplink::open(&config::telegram_target());
        })
    };

    let on_whatsapp = {
        let click_sound = click_sound.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(sound) = click_sound.as_ref() {
                sound.play();
            }
            deeplink::open(&config::whatsapp_target());
        })
    };

    html! {
        <div class="app-shell" style={format!("background: {};", config::BG)}>
            <style>
                {r#"
                html, body {
                    margin: 0;
                    padding: 0;
                    background: #0D0D0D;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto,
                        Helvetica, Arial, sans-serif;
                }

                .app-shell {
                    min-height: 100vh;
                    width: 100%;
                }
                "#}
            </style>

            <Hero
                on_telegram={on_telegram.clone()}
                on_whatsapp={on_whatsapp.clone()}
                sound_enabled={*sound_enabled}
                on_sound_toggle={on_sound_toggle}
            />
            <Carousel />
            <LiveTicker />
            <ValueConsole />
            <FinalGateway on_telegram={on_telegram} on_whatsapp={on_whatsapp} />
            <Footer />
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    deeplink::install_visibility_cancellation();

    info!("Starting insider hub landing");
    yew::Renderer::<App>::new().render();
}
