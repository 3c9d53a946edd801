use yew::prelude::*;

use crate::components::icons::{Icon, IconSvg};
use crate::config::PRODUCT_NAME;
use crate::content::{Section, NAVIGATION};

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub active: Section,
    pub menu_open: bool,
    pub on_select: Callback<Section>,
    pub on_toggle_menu: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps {
        active,
        menu_open,
        on_select,
        on_toggle_menu,
    } = props;

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let link = |class: &'static str, active_class: &'static str| {
        NAVIGATION
            .iter()
            .map(|item| {
                let section = item.section;
                let onclick = {
                    let on_select = on_select.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        on_select.emit(section);
                    })
                };
                html! {
                    <button
                        key={section.id()}
                        class={classes!(class, (*active == section).then(|| active_class))}
                        data-section={section.id()}
                        {onclick}
                    >
                        {item.name}
                    </button>
                }
            })
            .collect::<Html>()
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <div class="nav-brand">
                    <div class="nav-logo">
                        <IconSvg icon={Icon::Code} />
                    </div>
                    <span class="nav-title">{PRODUCT_NAME}</span>
                </div>

                <div class="nav-right">
                    { link("nav-link", "active") }
                    <button class="nav-cta">{"Get Started"}</button>
                </div>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    <IconSvg icon={if *menu_open { Icon::Close } else { Icon::Menu }} />
                </button>
            </div>

            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { link("mobile-link", "active") }
                            <button class="nav-cta mobile-cta">{"Get Started"}</button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    background: rgba(0, 0, 0, 0.8);
                    backdrop-filter: blur(16px);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                }

                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 2rem;
                    height: 64px;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .nav-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }

                .nav-logo {
                    width: 40px;
                    height: 40px;
                    border-radius: 8px;
                    background: linear-gradient(135deg, #22d3ee, #2563eb);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transform: rotate(12deg);
                    transition: transform 0.3s ease;
                }

                .nav-logo:hover {
                    transform: rotate(0deg);
                }

                .nav-logo .icon {
                    width: 24px;
                    height: 24px;
                    color: white;
                }

                .nav-title {
                    font-size: 1.25rem;
                    font-weight: 700;
                    background: linear-gradient(90deg, #22d3ee, #2563eb);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }

                .nav-link {
                    background: none;
                    border: none;
                    color: #d1d5db;
                    font-size: 0.875rem;
                    font-weight: 500;
                    cursor: pointer;
                    transition: color 0.2s ease;
                }

                .nav-link:hover,
                .nav-link.active {
                    color: #22d3ee;
                }

                .nav-cta {
                    padding: 0.5rem 1.5rem;
                    border: none;
                    border-radius: 9999px;
                    background: linear-gradient(90deg, #06b6d4, #2563eb);
                    color: white;
                    font-size: 0.875rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .nav-cta:hover {
                    transform: scale(1.05);
                    box-shadow: 0 10px 15px rgba(6, 182, 212, 0.5);
                }

                .burger-menu {
                    display: none;
                    padding: 0.5rem;
                    border: none;
                    border-radius: 8px;
                    background: none;
                    color: white;
                    cursor: pointer;
                }

                .burger-menu .icon {
                    width: 24px;
                    height: 24px;
                }

                .mobile-menu {
                    display: none;
                    padding: 1rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(0, 0, 0, 0.95);
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .mobile-link {
                    display: block;
                    width: 100%;
                    text-align: left;
                    padding: 0.5rem 1rem;
                    border: none;
                    border-radius: 8px;
                    background: none;
                    color: #d1d5db;
                    cursor: pointer;
                }

                .mobile-link.active {
                    background: rgba(6, 182, 212, 0.2);
                    color: #22d3ee;
                }

                .mobile-cta {
                    width: 100%;
                }

                @media (max-width: 768px) {
                    .nav-right {
                        display: none;
                    }

                    .burger-menu {
                        display: block;
                    }

                    .mobile-menu {
                        display: flex;
                    }

                    .nav-content {
                        padding: 0 1rem;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
