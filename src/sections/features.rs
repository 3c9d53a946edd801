use yew::prelude::*;

use crate::components::icons::{Icon, IconSvg};
use crate::content::{Section, CAPABILITIES, FEATURES};

#[function_component(FeaturesSection)]
pub fn features_section() -> Html {
    html! {
        <section id={Section::Features.id()} class="page-section">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{"Powerful "}<span class="display-italic">{"Features"}</span></h2>
                    <p>{"Everything you need to supercharge your development workflow"}</p>
                </div>

                <div class="feature-grid">
                    { for FEATURES.iter().map(|feature| html! {
                        <div class="glass-panel feature-card" key={feature.title}>
                            <div class="feature-icon">
                                <IconSvg icon={feature.icon} class="accent-icon" />
                            </div>
                            <h3>{feature.title}</h3>
                            <p>{feature.description}</p>
                        </div>
                    }) }
                </div>

                <div class="capability-grid">
                    { for CAPABILITIES.iter().map(|capability| html! {
                        <div class="glass-panel capability-card" key={capability.title}>
                            <IconSvg icon={Icon::CheckCircle} class="accent-icon" />
                            <h3>{capability.title}</h3>
                            <p>{capability.description}</p>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .feature-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                }

                .feature-card,
                .capability-card {
                    padding: 1.5rem;
                    transition: border-color 0.3s ease;
                }

                .feature-card:hover {
                    border-color: rgba(255, 255, 255, 0.2);
                }

                .feature-icon {
                    width: 48px;
                    height: 48px;
                    border-radius: 8px;
                    background: rgba(34, 211, 238, 0.1);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 1rem;
                }

                .feature-icon .icon {
                    width: 24px;
                    height: 24px;
                }

                .feature-card h3,
                .capability-card h3 {
                    font-size: 1.125rem;
                    font-weight: 500;
                    margin-bottom: 0.5rem;
                }

                .feature-card p,
                .capability-card p {
                    font-size: 0.875rem;
                    color: #9ca3af;
                }

                .capability-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    margin-top: 3rem;
                }

                .capability-card .icon {
                    width: 32px;
                    height: 32px;
                    margin-bottom: 0.75rem;
                }

                @media (max-width: 1024px) {
                    .feature-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (max-width: 768px) {
                    .feature-grid,
                    .capability-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
