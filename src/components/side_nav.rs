use yew::prelude::*;

use crate::content::{Section, NAVIGATION};

#[derive(Properties, PartialEq)]
pub struct SideNavProps {
    pub active: Section,
    pub on_select: Callback<Section>,
}

/// Dot indicator on the right edge; one dot per section, label on hover.
#[function_component(SideNav)]
pub fn side_nav(props: &SideNavProps) -> Html {
    html! {
        <div class="side-nav">
            {
                NAVIGATION.iter().map(|item| {
                    let section = item.section;
                    let onclick = {
                        let on_select = props.on_select.clone();
                        Callback::from(move |_: MouseEvent| on_select.emit(section))
                    };
                    html! {
                        <button
                            key={section.id()}
                            class="side-nav-item"
                            aria-label={item.name}
                            data-section={section.id()}
                            {onclick}
                        >
                            <div class={classes!("side-nav-dot", (props.active == section).then(|| "active"))}></div>
                            <span class="side-nav-label">{item.name}</span>
                        </button>
                    }
                }).collect::<Html>()
            }
            <style>
                {r#"
                .side-nav {
                    position: fixed;
                    right: 2rem;
                    top: 50%;
                    transform: translateY(-50%);
                    z-index: 50;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .side-nav-item {
                    position: relative;
                    background: none;
                    border: none;
                    padding: 0;
                    cursor: pointer;
                }

                .side-nav-dot {
                    width: 8px;
                    height: 8px;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.3);
                    transition: all 0.3s ease;
                }

                .side-nav-item:hover .side-nav-dot {
                    background: rgba(255, 255, 255, 0.6);
                }

                .side-nav-dot.active {
                    background: white;
                    transform: scale(1.25);
                }

                .side-nav-label {
                    position: absolute;
                    right: 1.5rem;
                    top: 50%;
                    transform: translateY(-50%);
                    font-size: 0.75rem;
                    color: rgba(255, 255, 255, 0.7);
                    white-space: nowrap;
                    opacity: 0;
                    transition: opacity 0.2s ease;
                }

                .side-nav-item:hover .side-nav-label {
                    opacity: 1;
                }
                "#}
            </style>
        </div>
    }
}
