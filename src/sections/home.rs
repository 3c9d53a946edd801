use yew::prelude::*;

use crate::content::Section;

#[function_component(HomeSection)]
pub fn home_section() -> Html {
    html! {
        <section id={Section::Home.id()} class="page-section hero-section">
            <div class="hero-backdrop">
                <div class="hero-nebula"></div>
                <div class="hero-horizon"></div>
                <div class="hero-horizon-line"></div>
            </div>

            <div class="section-inner hero-inner">
                <div class="hero-badge">
                    <span>{"Ultimate AI Coding Platform – Features Checklist"}</span>
                </div>

                <h1 class="hero-title">
                    {"Good things come"}
                    <br />
                    {"to those "}
                    <span class="display-italic">{"who wait."}</span>
                </h1>

                <p class="hero-subtitle">
                    {"Generate leads, build excitement, and grow"}
                    <br />
                    {"your email list ahead of launch day."}
                </p>

                <div class="hero-form">
                    <input type="email" placeholder="Your Email Address" class="hero-input" />
                    <button class="hero-submit">{"Get Notified"}</button>
                </div>
            </div>

            <style>
                {r#"
                .hero-section {
                    padding-top: 5rem;
                    overflow: hidden;
                }

                .hero-backdrop {
                    position: absolute;
                    inset: 0;
                    overflow: hidden;
                    pointer-events: none;
                }

                .hero-nebula {
                    position: absolute;
                    bottom: 0;
                    left: 50%;
                    width: 800px;
                    height: 400px;
                    transform: translateX(-50%);
                    background: radial-gradient(ellipse at center, rgba(139, 92, 246, 0.3) 0%, rgba(59, 130, 246, 0.2) 30%, transparent 70%);
                    filter: blur(60px);
                }

                .hero-horizon {
                    position: absolute;
                    bottom: 0;
                    left: 50%;
                    width: 120%;
                    height: 300px;
                    background: linear-gradient(180deg, transparent 0%, rgba(20, 20, 30, 0.8) 100%);
                    border-radius: 100% 100% 0 0;
                    transform: translateX(-50%) translateY(40%);
                }

                .hero-horizon-line {
                    position: absolute;
                    bottom: 120px;
                    left: 0;
                    right: 0;
                    height: 2px;
                    background: linear-gradient(90deg, transparent 0%, rgba(139, 92, 246, 0.6) 30%, rgba(59, 130, 246, 0.6) 70%, transparent 100%);
                    box-shadow: 0 0 20px rgba(139, 92, 246, 0.5), 0 0 40px rgba(59, 130, 246, 0.3);
                }

                .hero-inner {
                    text-align: center;
                    width: 100%;
                }

                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    padding: 0.5rem 1rem;
                    margin-bottom: 2rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    backdrop-filter: blur(4px);
                    font-size: 0.875rem;
                    color: #9ca3af;
                }

                .hero-title {
                    font-size: 4.5rem;
                    font-weight: 400;
                    line-height: 1.15;
                    letter-spacing: -0.025em;
                    margin-bottom: 1.5rem;
                }

                .hero-subtitle {
                    max-width: 42rem;
                    margin: 0 auto 2.5rem;
                    font-size: 1.125rem;
                    line-height: 1.6;
                    color: #9ca3af;
                }

                .hero-form {
                    display: flex;
                    gap: 0.75rem;
                    justify-content: center;
                    max-width: 32rem;
                    margin: 0 auto 8rem;
                }

                .hero-input {
                    flex: 1;
                    padding: 1rem 1.5rem;
                    border-radius: 8px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    color: white;
                    font-size: 1rem;
                    transition: border-color 0.2s ease;
                }

                .hero-input:focus {
                    outline: none;
                    border-color: rgba(255, 255, 255, 0.3);
                }

                .hero-input::placeholder {
                    color: #6b7280;
                }

                .hero-submit {
                    padding: 1rem 2rem;
                    border: none;
                    border-radius: 8px;
                    background: white;
                    color: black;
                    font-size: 1rem;
                    font-weight: 500;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .hero-submit:hover {
                    background: #f3f4f6;
                }

                @media (max-width: 768px) {
                    .hero-title {
                        font-size: 3rem;
                    }

                    .hero-form {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </section>
    }
}
