use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::icons::{Icon, IconSvg};
use crate::config::PRODUCT_NAME;
use crate::content::FOOTER_COLUMNS;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-grid">
                    <div>
                        <div class="footer-brand">
                            <div class="footer-logo">
                                <IconSvg icon={Icon::Code} />
                            </div>
                            <span class="footer-title">{PRODUCT_NAME}</span>
                        </div>
                        <p class="footer-blurb">
                            {"The ultimate AI coding platform for modern developers."}
                        </p>
                    </div>
                    {
                        FOOTER_COLUMNS.iter().map(|column| html! {
                            <div key={column.heading}>
                                <h4>{column.heading}</h4>
                                <ul>
                                    { for column.links.iter().map(|link| html! {
                                        <li key={*link}><button class="footer-link">{*link}</button></li>
                                    }) }
                                </ul>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <div class="footer-bottom">
                    <p>{format!("© {} {}. All rights reserved.", year, PRODUCT_NAME)}</p>
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    position: relative;
                    z-index: 10;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    padding: 3rem 2rem;
                    background: rgba(0, 0, 0, 0.5);
                    backdrop-filter: blur(4px);
                }

                .footer-content {
                    max-width: 80rem;
                    margin: 0 auto;
                }

                .footer-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                    margin-bottom: 2rem;
                }

                .footer-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 1rem;
                }

                .footer-logo {
                    width: 32px;
                    height: 32px;
                    border-radius: 8px;
                    background: linear-gradient(135deg, #22d3ee, #2563eb);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .footer-logo .icon {
                    width: 20px;
                    height: 20px;
                    color: white;
                }

                .footer-title {
                    font-size: 1.125rem;
                    font-weight: 700;
                }

                .footer-blurb {
                    color: #9ca3af;
                    font-size: 0.875rem;
                }

                .site-footer h4 {
                    font-weight: 600;
                    margin-bottom: 1rem;
                }

                .site-footer ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }

                .footer-link {
                    background: none;
                    border: none;
                    padding: 0;
                    color: #9ca3af;
                    font-size: 0.875rem;
                    cursor: pointer;
                    transition: color 0.2s ease;
                }

                .footer-link:hover {
                    color: #22d3ee;
                }

                .footer-bottom {
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    padding-top: 2rem;
                    text-align: center;
                    font-size: 0.875rem;
                    color: #9ca3af;
                }

                @media (max-width: 768px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
