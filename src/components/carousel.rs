use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::win_card::{WinCard, WinningPlay};
use crate::config;

const WINNING_PLAYS: [WinningPlay; 4] = [
    WinningPlay {
        match_up: "MAN CITY vs LIVERPOOL",
        pick: "Over 2.5 Goals",
        stats: &[("xG", "3.8"), ("Form", "85%"), ("Key Player Fit", "100%")],
    },
    WinningPlay {
        match_up: "REAL MADRID vs ATLETICO",
        pick: "BTTS: Yes",
        stats: &[("xG", "3.1"), ("Form", "78%"), ("Derby Intensity", "High")],
    },
    WinningPlay {
        match_up: "DORTMUND vs BAYERN",
        pick: "Bayern -0.5 AH",
        stats: &[("xThreat", "2.4"), ("PPDA", "9.2"), ("Momentum", "Strong")],
    },
    WinningPlay {
        match_up: "INTER vs NAPOLI",
        pick: "Inter ML",
        stats: &[("xGDelta", "+0.9"), ("Form", "82%"), ("Home Edge", "Yes")],
    },
];

enum CarouselAction {
    Next,
    Prev,
}

#[derive(PartialEq)]
struct CarouselIndex {
    value: usize,
}

impl Reducible for CarouselIndex {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let count = WINNING_PLAYS.len();
        let value = match action {
            CarouselAction::Next => (self.value + 1) % count,
            CarouselAction::Prev => (self.value + count - 1) % count,
        };
        CarouselIndex { value }.into()
    }
}

#[function_component(Carousel)]
pub fn carousel() -> Html {
    let index = use_reducer(|| CarouselIndex { value: 0 });

    // Auto-advance; the interval dies with the component.
    {
        let dispatcher = index.dispatcher();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(config::CAROUSEL_ADVANCE_MS, move || {
                    dispatcher.dispatch(CarouselAction::Next);
                });
                move || drop(interval)
            },
            (),
        );
    }

    let on_prev = {
        let index = index.clone();
        Callback::from(move |_: MouseEvent| index.dispatch(CarouselAction::Prev))
    };
    let on_next = {
        let index = index.clone();
        Callback::from(move |_: MouseEvent| index.dispatch(CarouselAction::Next))
    };

    let current = WINNING_PLAYS[index.value].clone();
    let next_up = WINNING_PLAYS[(index.value + 1) % WINNING_PLAYS.len()].clone();

    html! {
        <section class="carousel">
            <style>
                {r#"
                .carousel {
                    position: relative;
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 4rem 1rem;
                }

                .carousel__title {
                    text-align: center;
                    font-size: 1.75rem;
                    font-weight: 800;
                    color: #ffffff;
                    margin: 0 0 1.5rem;
                }

                .carousel__stage {
                    position: relative;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .carousel__arrow {
                    position: absolute;
                    z-index: 2;
                    border-radius: 9999px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    color: rgba(255, 255, 255, 0.8);
                    padding: 0.5rem 0.85rem;
                    font-size: 1.1rem;
                    cursor: pointer;
                }

                .carousel__arrow:hover {
                    background: rgba(255, 255, 255, 0.1);
                }

                .carousel__arrow--prev { left: 0.5rem; }
                .carousel__arrow--next { right: 0.5rem; }

                .carousel__pair {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                    place-items: center;
                    animation: carousel-slide 0.4s ease both;
                }

                @media (min-width: 768px) {
                    .carousel__pair {
                        grid-template-columns: 1fr 1fr;
                    }
                }

                @keyframes carousel-slide {
                    from {
                        opacity: 0;
                        transform: translateX(60px);
                    }
                    to {
                        opacity: 1;
                        transform: translateX(0);
                    }
                }

                .win-card {
                    height: 14rem;
                    width: 20rem;
                    cursor: pointer;
                    perspective: 1000px;
                }

                .win-card__inner {
                    position: relative;
                    height: 100%;
                    width: 100%;
                    border-radius: 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: #1A1A1A;
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.5);
                    transition: transform 0.5s;
                    transform-style: preserve-3d;
                }

                .win-card__inner--flipped {
                    transform: rotateY(180deg);
                }

                .win-card__face {
                    position: absolute;
                    inset: 0;
                    border-radius: 1rem;
                    padding: 1.25rem;
                    backface-visibility: hidden;
                    -webkit-backface-visibility: hidden;
                }

                .win-card__front {
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    background: linear-gradient(135deg, rgba(255, 255, 255, 0.05), rgba(255, 255, 255, 0));
                }

                .win-card__eyebrow {
                    font-size: 0.75rem;
                    color: #999999;
                }

                .win-card__match {
                    font-size: 1.1rem;
                    font-weight: 700;
                    color: #ffffff;
                }

                .win-card__pick {
                    display: inline-flex;
                    margin-top: 0.5rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(0, 255, 135, 0.3);
                    background: rgba(0, 255, 135, 0.1);
                    color: #6ee7b7;
                    font-size: 0.9rem;
                }

                .win-card__tag {
                    font-size: 0.75rem;
                    color: #34d399;
                }

                .win-card__back {
                    background: linear-gradient(135deg, rgba(0, 0, 0, 0.6), rgba(0, 0, 0, 0.3));
                    color: #dddddd;
                    font-size: 0.85rem;
                    transform: rotateY(180deg);
                }

                .win-card__why {
                    font-weight: 600;
                    color: #ffffff;
                    margin-bottom: 0.5rem;
                }

                .win-card__stats {
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }

                .win-card__stats li {
                    display: flex;
                    justify-content: space-between;
                    padding: 0.25rem 0;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                }

                .win-card__stat-name { color: #999999; }
                .win-card__stat-value { color: #ffffff; font-weight: 500; }

                .win-card__hint {
                    margin-top: 0.75rem;
                    font-size: 0.7rem;
                    color: #999999;
                }
                "#}
            </style>

            <h2 class="carousel__title">{"Last Week's Winning Plays"}</h2>
            <div class="carousel__stage">
                <button class="carousel__arrow carousel__arrow--prev" onclick={on_prev}>{"‹"}</button>
                <div key={index.value} class="carousel__pair">
                    <WinCard play={current} />
                    <WinCard play={next_up} />
                </div>
                <button class="carousel__arrow carousel__arrow--next" onclick={on_next}>{"›"}</button>
            </div>
        </section>
    }
}
