use yew::prelude::*;

use crate::components::icons::{Icon, IconSvg};
use crate::content::{PricingPlan, Section, PRICING_PLANS};

#[derive(Properties, PartialEq)]
pub struct PlanCardProps {
    pub plan: PricingPlan,
}

#[function_component(PlanCard)]
pub fn plan_card(props: &PlanCardProps) -> Html {
    let plan = &props.plan;

    html! {
        <div class={classes!("glass-panel", "pricing-card", plan.popular.then(|| "popular"))}>
            {
                if plan.popular {
                    html! { <div class="popular-tag">{"Most Popular"}</div> }
                } else {
                    html! {}
                }
            }
            <div class="card-header">
                <h3>{plan.name}</h3>
                <div class="price">
                    <span class="amount">{format!("${}", plan.monthly_price)}</span>
                    <span class="period">{"/month"}</span>
                </div>
            </div>
            <ul>
                { for plan.features.iter().map(|feature| html! {
                    <li key={*feature}>
                        <IconSvg icon={Icon::CheckCircle} class="accent-icon" />
                        <span>{*feature}</span>
                    </li>
                }) }
            </ul>
            <button class={classes!("plan-button", plan.popular.then(|| "primary"))}>
                {"Get Started"}
            </button>
        </div>
    }
}

#[function_component(PricingSection)]
pub fn pricing_section() -> Html {
    html! {
        <section id={Section::Pricing.id()} class="page-section">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{"Simple "}<span class="display-italic">{"Pricing"}</span></h2>
                    <p>{"Choose the perfect plan for your needs. All plans include a 14-day free trial."}</p>
                </div>

                <div class="pricing-grid">
                    { for PRICING_PLANS.iter().map(|plan| html! {
                        <PlanCard key={plan.name} plan={*plan} />
                    }) }
                </div>

                <div class="pricing-contact">
                    <p>{"Need a custom plan for your organization?"}</p>
                    <button class="contact-button">{"Contact Sales"}</button>
                </div>
            </div>

            <style>
                {r#"
                .pricing-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    max-width: 72rem;
                    margin: 0 auto;
                }

                .pricing-card {
                    position: relative;
                    padding: 2rem;
                    transition: all 0.3s ease;
                }

                .pricing-card.popular {
                    border-color: rgba(34, 211, 238, 0.5);
                    box-shadow: 0 10px 15px rgba(34, 211, 238, 0.1);
                }

                .popular-tag {
                    position: absolute;
                    top: -0.75rem;
                    left: 50%;
                    transform: translateX(-50%);
                    padding: 0.25rem 1rem;
                    border-radius: 9999px;
                    background: #22d3ee;
                    color: black;
                    font-size: 0.75rem;
                    font-weight: 500;
                }

                .card-header {
                    text-align: center;
                    margin-bottom: 2rem;
                }

                .card-header h3 {
                    font-size: 1.25rem;
                    font-weight: 500;
                    margin-bottom: 0.5rem;
                }

                .price {
                    display: flex;
                    align-items: baseline;
                    justify-content: center;
                    gap: 0.5rem;
                }

                .price .amount {
                    font-size: 2.25rem;
                }

                .price .period {
                    font-size: 0.875rem;
                    color: #9ca3af;
                }

                .pricing-card ul {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 2rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .pricing-card li {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    font-size: 0.875rem;
                    color: #d1d5db;
                }

                .pricing-card li .icon {
                    width: 16px;
                    height: 16px;
                    flex-shrink: 0;
                }

                .plan-button {
                    width: 100%;
                    padding: 0.75rem;
                    border-radius: 8px;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: rgba(255, 255, 255, 0.1);
                    color: white;
                    font-size: 0.875rem;
                    font-weight: 500;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .plan-button:hover {
                    background: rgba(255, 255, 255, 0.2);
                }

                .plan-button.primary {
                    border: none;
                    background: white;
                    color: black;
                }

                .plan-button.primary:hover {
                    background: #f3f4f6;
                }

                .pricing-contact {
                    margin-top: 4rem;
                    text-align: center;
                }

                .pricing-contact p {
                    color: #9ca3af;
                    font-size: 0.875rem;
                    margin-bottom: 1rem;
                }

                .contact-button {
                    padding: 0.75rem 1.5rem;
                    border-radius: 8px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    color: white;
                    font-size: 0.875rem;
                    font-weight: 500;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }

                .contact-button:hover {
                    background: rgba(255, 255, 255, 0.1);
                }

                @media (max-width: 768px) {
                    .pricing-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
