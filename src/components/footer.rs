use chrono::{Datelike, Utc};
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                .site-footer {
                    max-width: 72rem;
                    margin: 2.5rem auto 0;
                    padding: 0 1rem 2.5rem;
                    font-size: 0.75rem;
                    color: #999999;
                }

                .site-footer__panel {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: space-between;
                    gap: 0.75rem;
                    border-radius: 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    padding: 1rem;
                }

                @media (min-width: 768px) {
                    .site-footer__panel {
                        flex-direction: row;
                    }
                }

                .site-footer__notice {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                }

                .site-footer__copyright {
                    font-size: 0.7rem;
                    color: #777777;
                }
                "#}
            </style>

            <div class="site-footer__panel">
                <div class="site-footer__notice">
                    <span>{"⚠"}</span>
                    <span>{"Please gamble responsibly. Must be 18+."}</span>
                </div>
                <div class="site-footer__copyright">
                    { format!("© {} THE FOOTBALL ANALYST. All rights reserved.", year) }
                </div>
            </div>
        </footer>
    }
}
