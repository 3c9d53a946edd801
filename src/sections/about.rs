use yew::prelude::*;

use crate::components::icons::IconSvg;
use crate::config::PRODUCT_NAME;
use crate::content::{Section, ABOUT_HIGHLIGHTS, ABOUT_STATS};

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    html! {
        <section id={Section::About.id()} class="page-section">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{"About "}<span class="display-italic">{PRODUCT_NAME}</span></h2>
                    <p>{"Revolutionizing software development with artificial intelligence"}</p>
                </div>

                <div class="about-grid">
                    <div class="about-story">
                        <h3>{"Our Mission"}</h3>
                        <p>
                            {"We believe that every developer deserves access to world-class AI tools. Our mission \
                              is to democratize AI-powered coding assistance, making it accessible, affordable, and \
                              incredibly powerful."}
                        </p>
                        <p>
                            {"Founded in 2024, CodeAI Pro has quickly become the go-to platform for developers \
                              who want to leverage AI to write better code, faster. Our team of AI researchers and \
                              experienced developers work tirelessly to push the boundaries of what's possible."}
                        </p>
                        <div class="about-stats">
                            { for ABOUT_STATS.iter().map(|stat| html! {
                                <div class="about-stat" key={stat.label}>
                                    <div class="about-stat-value">{stat.value}</div>
                                    <div class="about-stat-label">{stat.label}</div>
                                </div>
                            }) }
                        </div>
                    </div>

                    <div class="glass-panel about-highlights">
                        { for ABOUT_HIGHLIGHTS.iter().map(|highlight| html! {
                            <div class="about-highlight" key={highlight.title}>
                                <IconSvg icon={highlight.icon} class="accent-icon" />
                                <div>
                                    <h4>{highlight.title}</h4>
                                    <p>{highlight.caption}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .about-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }

                .about-story h3 {
                    font-size: 1.875rem;
                    font-weight: 400;
                    margin-bottom: 1.5rem;
                }

                .about-story p {
                    color: #9ca3af;
                    line-height: 1.6;
                    margin-bottom: 1.5rem;
                }

                .about-stats {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    padding-top: 1.5rem;
                }

                .about-stat {
                    text-align: center;
                }

                .about-stat-value {
                    font-size: 1.875rem;
                }

                .about-stat-label {
                    font-size: 0.875rem;
                    color: #9ca3af;
                    margin-top: 0.25rem;
                }

                .about-highlights {
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .about-highlight {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1rem;
                    border-radius: 8px;
                    background: rgba(255, 255, 255, 0.05);
                    transition: background 0.2s ease;
                }

                .about-highlight:hover {
                    background: rgba(255, 255, 255, 0.1);
                }

                .about-highlight .icon {
                    width: 40px;
                    height: 40px;
                    flex-shrink: 0;
                }

                .about-highlight h4 {
                    font-weight: 500;
                    margin: 0;
                }

                .about-highlight p {
                    font-size: 0.875rem;
                    color: #9ca3af;
                    margin: 0;
                }

                @media (max-width: 768px) {
                    .about-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
