use yew::prelude::*;

const TICKER_MESSAGES: [&str; 6] = [
    "John D. is on a 5-win streak!",
    "🔥 INSIDER TIP just dropped for the Madrid derby!",
    "Sarah K.: 'That BTTS tip was gold!'",
    "New member Rahul joined the Insiders.",
    "Live odds shift detected for EPL late game.",
    "Vipul: 'Cashout hit at 78th min, wow.'",
];

#[function_component(LiveTicker)]
pub fn live_ticker() -> Html {
    // Tripled so the -33.333% translate loop wraps without a visible seam.
    let row = TICKER_MESSAGES
        .iter()
        .cycle()
        .take(TICKER_MESSAGES.len() * 3)
        .copied()
        .collect::<Vec<_>>();

    html! {
        <section class="ticker">
            <style>
                {r#"
                .ticker {
                    width: 100%;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(0, 0, 0, 0.6);
                    padding: 0.75rem 0;
                }

                .ticker__label {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                    color: #6ee7b7;
                    font-size: 0.75rem;
                    font-weight: 600;
                    letter-spacing: 0.1em;
                }

                .ticker__viewport {
                    margin-top: 0.5rem;
                    overflow: hidden;
                }

                .ticker__row {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                    width: max-content;
                    padding: 0 1rem;
                    font-size: 0.9rem;
                    color: #dddddd;
                    white-space: nowrap;
                    animation: ticker-scroll 20s linear infinite;
                }

                @keyframes ticker-scroll {
                    from { transform: translateX(0); }
                    to { transform: translateX(-33.333%); }
                }

                .ticker__item {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                }

                .ticker__dot {
                    width: 0.35rem;
                    height: 0.35rem;
                    border-radius: 9999px;
                    background: #34d399;
                }
                "#}
            </style>

            <div class="ticker__label">{"THE COMMUNITY IS BUZZING…"}</div>
            <div class="ticker__viewport">
                <div class="ticker__row">
                    {
                        for row.iter().map(|message| html! {
                            <span class="ticker__item">
                                <span class="ticker__dot"></span>
                                { *message }
                            </span>
                        })
                    }
                </div>
            </div>
        </section>
    }
}
