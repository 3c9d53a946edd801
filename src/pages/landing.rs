use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::glow::Glow;
use crate::components::nav::Nav;
use crate::components::side_nav::SideNav;
use crate::config::{NavMode, NAV_HEIGHT};
use crate::content::Section;
use crate::listener::WindowListener;
use crate::scroll_spy::{self, Pointer};
use crate::sections::about::AboutSection;
use crate::sections::features::FeaturesSection;
use crate::sections::home::HomeSection;
use crate::sections::pricing::PricingSection;
use crate::state::{PageAction, PageState};

#[derive(Properties, PartialEq, Default)]
pub struct LandingProps {
    #[prop_or_default]
    pub mode: NavMode,
}

/// Section named by the URL fragment, if any.
fn section_from_hash() -> Option<Section> {
    let hash = web_sys::window()?.location().hash().ok()?;
    hash.parse().ok()
}

/// Smoothly scrolls so the section starts just below the fixed nav bar.
fn scroll_to_section(section: Section) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(element) = window
        .document()
        .and_then(|document| document.get_element_by_id(section.id()))
    else {
        warn!("Section #{} is not rendered, cannot scroll to it", section.id());
        return;
    };

    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let top = element.get_bounding_client_rect().top() + scroll_y - NAV_HEIGHT;

    let options = ScrollToOptions::new();
    options.set_top(top.max(0.0));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Re-measures the rendered sections and reports which one holds the
/// viewport midpoint.
fn spy_active_section() -> Option<Section> {
    let window = web_sys::window()?;
    let extents = scroll_spy::measure_sections(&window);
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    scroll_spy::active_section(scroll_y, scroll_spy::viewport_height(&window), &extents)
}

fn render_section(section: Section) -> Html {
    match section {
        Section::Home => html! { <HomeSection key="home" /> },
        Section::About => html! { <AboutSection key="about" /> },
        Section::Features => html! { <FeaturesSection key="features" /> },
        Section::Pricing => html! { <PricingSection key="pricing" /> },
    }
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let mode = props.mode;
    let state = use_reducer_eq(|| PageState::starting_at(section_from_hash().unwrap_or_default()));

    // Pointer tracking for the glow
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::attach("mousemove", move |e: Event| {
                    if let Some(e) = e.dyn_ref::<MouseEvent>() {
                        dispatcher.dispatch(PageAction::TrackPointer(Pointer {
                            x: e.client_x() as f64,
                            y: e.client_y() as f64,
                        }));
                    }
                });

                move || drop(listener)
            },
            (),
        );
    }

    // Scroll spy, continuous layout only
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |mode| {
                let listener = if *mode == NavMode::Scroll {
                    if let Some(section) = section_from_hash() {
                        scroll_to_section(section);
                    }

                    let update = move || {
                        if let Some(section) = spy_active_section() {
                            debug!("Scroll spy: {} in view", section);
                            dispatcher.dispatch(PageAction::Spy(section));
                        }
                    };
                    update();

                    WindowListener::attach("scroll", move |_: Event| update())
                } else {
                    None
                };

                move || drop(listener)
            },
            mode,
        );
    }

    let on_select = {
        let dispatcher = state.dispatcher();
        Callback::from(move |section: Section| {
            info!("Navigating to {} ({} mode)", section, mode);
            dispatcher.dispatch(PageAction::Select(section));
            if mode == NavMode::Scroll {
                scroll_to_section(section);
            }
        })
    };

    let on_toggle_menu = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(PageAction::ToggleMenu))
    };

    let sections = match mode {
        NavMode::Paged => render_section(state.active),
        NavMode::Scroll => Section::ALL.into_iter().map(render_section).collect::<Html>(),
    };

    html! {
        <div class={classes!("landing-page", format!("mode-{}", mode))}>
            <Nav
                active={state.active}
                menu_open={state.menu_open}
                on_select={on_select.clone()}
                {on_toggle_menu}
            />
            <SideNav active={state.active} {on_select} />
            <Glow pointer={state.pointer} />

            <main>
                { sections }
            </main>

            <Footer />

            <style>
                {r#"
                body {
                    margin: 0;
                    background: black;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                }

                .landing-page {
                    min-height: 100vh;
                    background: black;
                    color: white;
                    overflow-x: hidden;
                }

                .page-section {
                    position: relative;
                    min-height: 100vh;
                    padding: 8rem 2rem 5rem;
                    display: flex;
                    align-items: center;
                    box-sizing: border-box;
                }

                .section-inner {
                    position: relative;
                    z-index: 10;
                    max-width: 80rem;
                    margin: 0 auto;
                }

                .section-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .section-header h2 {
                    font-size: 3.75rem;
                    font-weight: 400;
                    margin-bottom: 1.5rem;
                }

                .section-header p {
                    max-width: 48rem;
                    margin: 0 auto;
                    font-size: 1.125rem;
                    color: #9ca3af;
                }

                .display-italic {
                    font-family: Georgia, "Times New Roman", serif;
                    font-style: italic;
                }

                .glass-panel {
                    background: rgba(255, 255, 255, 0.05);
                    backdrop-filter: blur(4px);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 12px;
                }

                .accent-icon {
                    color: #22d3ee;
                }

                @media (max-width: 768px) {
                    .page-section {
                        padding: 6rem 1rem 4rem;
                    }

                    .section-header h2 {
                        font-size: 3rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
