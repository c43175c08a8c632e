use web_sys::MouseEvent;
use yew::prelude::*;

/// One settled pick from last week, as shown on the carousel.
#[derive(Clone, PartialEq)]
pub struct WinningPlay {
    pub match_up: &'static str,
    pub pick: &'static str,
    pub stats: &'static [(&'static str, &'static str)],
}

#[derive(Properties, PartialEq)]
pub struct WinCardProps {
    pub play: WinningPlay,
}

/// 3D flip card: front shows the pick, back the reasoning. Flips on hover,
/// toggles on click (tap on touch devices). The flip is component-local.
#[function_component(WinCard)]
pub fn win_card(props: &WinCardProps) -> Html {
    let flipped = use_state(|| false);

    let flip_on = {
        let flipped = flipped.clone();
        Callback::from(move |_: MouseEvent| flipped.set(true))
    };
    let flip_off = {
        let flipped = flipped.clone();
        Callback::from(move |_: MouseEvent| flipped.set(false))
    };
    let toggle = {
        let flipped = flipped.clone();
        Callback::from(move |_: MouseEvent| flipped.set(!*flipped))
    };

    let inner_class = if *flipped {
        "win-card__inner win-card__inner--flipped"
    } else {
        "win-card__inner"
    };

    html! {
        <div
            class="win-card"
            onmouseenter={flip_on}
            onmouseleave={flip_off}
            onclick={toggle}
        >
            <div class={inner_class}>
                <div class="win-card__face win-card__front">
                    <div class="win-card__eyebrow">{"Last Week's Winning Play"}</div>
                    <div>
                        <div class="win-card__match">{ props.play.match_up }</div>
                        <div class="win-card__pick">{ format!("Pick: {}", props.play.pick) }</div>
                    </div>
                    <div class="win-card__tag">{"WIN"}</div>
                </div>
                <div class="win-card__face win-card__back">
                    <div class="win-card__why">{"Why we picked it"}</div>
                    <ul class="win-card__stats">
                        {
                            for props.play.stats.iter().map(|(name, value)| html! {
                                <li>
                                    <span class="win-card__stat-name">{ *name }</span>
                                    <span class="win-card__stat-value">{ *value }</span>
                                </li>
                            })
                        }
                    </ul>
                    <div class="win-card__hint">{"Hover / tap to flip back"}</div>
                </div>
            </div>
        </div>
    }
}
