#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlElement, MouseEvent, MouseEventInit};

use codeai_landing::config::{NavMode, NAV_HEIGHT};
use codeai_landing::content::{Section, PRICING_PLANS};
use codeai_landing::listener::active_listener_count;
use codeai_landing::pages::landing::{Landing, LandingProps};
use codeai_landing::sections::pricing::PricingSection;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_root() -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    root
}

/// Lets Yew's scheduler flush renders and effects.
async fn settle() {
    TimeoutFuture::new(0).await;
}

fn mount_landing(root: &Element, mode: NavMode) -> yew::AppHandle<Landing> {
    yew::Renderer::<Landing>::with_root_and_props(root.clone(), LandingProps { mode }).render()
}

fn nav_link(root: &Element, section: Section) -> Element {
    let selector = format!(".nav-link[data-section=\"{}\"]", section.id());
    root.query_selector(&selector).unwrap().unwrap()
}

fn section_top(root: &Element, section: Section) -> f64 {
    root.query_selector(&format!("#{}", section.id()))
        .unwrap()
        .unwrap()
        .get_bounding_client_rect()
        .top()
}

fn count(root: &Element, selector: &str) -> u32 {
    root.query_selector_all(selector).unwrap().length()
}

#[wasm_bindgen_test]
async fn pricing_renders_every_plan_and_feature() {
    let root = mount_root();
    let handle = yew::Renderer::<PricingSection>::with_root(root.clone()).render();
    settle().await;

    assert_eq!(count(&root, ".pricing-card"), 3);
    assert_eq!(count(&root, ".pricing-card.popular"), 1);
    assert_eq!(count(&root, ".popular-tag"), 1);

    let cards = root.query_selector_all(".pricing-card").unwrap();
    for (index, plan) in PRICING_PLANS.iter().enumerate() {
        let card: Element = cards.item(index as u32).unwrap().dyn_into().unwrap();
        assert_eq!(count(&card, "li"), plan.features.len() as u32, "{}", plan.name);
        assert!(card.text_content().unwrap().contains(plan.name));
    }

    handle.destroy();
}

#[wasm_bindgen_test]
async fn paged_selection_swaps_the_visible_section() {
    let root = mount_root();
    let handle = yew::Renderer::<Landing>::with_root_and_props(
        root.clone(),
        LandingProps { mode: NavMode::Paged },
    )
    .render();
    settle().await;

    for section in Section::ALL {
        let selector = format!(".nav-link[data-section=\"{}\"]", section.id());
        let link: HtmlElement = root.query_selector(&selector).unwrap().unwrap().dyn_into().unwrap();
        link.click();
        settle().await;

        let link = root.query_selector(&selector).unwrap().unwrap();
        assert!(link.class_list().contains("active"), "{} not active", section);
        assert_eq!(count(&root, ".nav-link.active"), 1);
        assert_eq!(count(&root, ".page-section"), 1);
        assert!(root.query_selector(&format!("#{}", section.id())).unwrap().is_some());
    }

    handle.destroy();
}

#[wasm_bindgen_test]
async fn mobile_menu_closes_after_selection() {
    let root = mount_root();
    let handle = yew::Renderer::<Landing>::with_root_and_props(
        root.clone(),
        LandingProps { mode: NavMode::Paged },
    )
    .render();
    settle().await;

    let burger: HtmlElement = root.query_selector(".burger-menu").unwrap().unwrap().dyn_into().unwrap();
    burger.click();
    settle().await;
    assert_eq!(count(&root, ".mobile-menu"), 1);

    let entry: HtmlElement = root
        .query_selector(".mobile-link[data-section=\"features\"]")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    entry.click();
    settle().await;

    assert_eq!(count(&root, ".mobile-menu"), 0);
    assert!(root.query_selector("#features").unwrap().is_some());

    handle.destroy();
}

#[wasm_bindgen_test]
async fn scroll_mode_renders_all_sections() {
    let root = mount_root();
    let handle = yew::Renderer::<Landing>::with_root_and_props(
        root.clone(),
        LandingProps { mode: NavMode::Scroll },
    )
    .render();
    settle().await;

    assert_eq!(count(&root, ".page-section"), 4);
    for section in Section::ALL {
        assert!(root.query_selector(&format!("#{}", section.id())).unwrap().is_some());
    }

    handle.destroy();
}

#[wasm_bindgen_test]
async fn glow_is_centred_on_last_pointer_position() {
    let root = mount_root();
    let handle = yew::Renderer::<Landing>::with_root(root.clone()).render();
    settle().await;

    let init = MouseEventInit::new();
    init.set_client_x(300);
    init.set_client_y(400);
    let event = MouseEvent::new_with_mouse_event_init_dict("mousemove", &init).unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();
    settle().await;

    let glow = root.query_selector(".pointer-glow").unwrap().unwrap();
    let style = glow.get_attribute("style").unwrap();
    assert!(style.contains("left: 50px;"), "{}", style);
    assert!(style.contains("top: 150px;"), "{}", style);

    handle.destroy();
}

#[wasm_bindgen_test]
async fn unmount_removes_listeners_without_duplicates_on_remount() {
    let before = active_listener_count();

    let root = mount_root();
    let handle = yew::Renderer::<Landing>::with_root_and_props(
        root.clone(),
        LandingProps { mode: NavMode::Scroll },
    )
    .render();
    settle().await;
    // mousemove + scroll
    assert_eq!(active_listener_count(), before + 2);

    handle.destroy();
    settle().await;
    assert_eq!(active_listener_count(), before);

    let handle = yew::Renderer::<Landing>::with_root_and_props(
        root,
        LandingProps { mode: NavMode::Paged },
    )
    .render();
    settle().await;
    assert_eq!(active_listener_count(), before + 1);

    handle.destroy();
    settle().await;
    assert_eq!(active_listener_count(), before);
}

#[wasm_bindgen_test]
async fn scroll_spy_follows_window_position() {
    let window = web_sys::window().unwrap();
    let root = mount_root();
    let handle = mount_landing(&root, NavMode::Scroll);
    settle().await;

    let about_top = section_top(&root, Section::About) + window.scroll_y().unwrap();
    window.scroll_to_with_x_and_y(0.0, about_top);
    window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
    settle().await;

    assert!(nav_link(&root, Section::About).class_list().contains("active"));
    assert_eq!(count(&root, ".nav-link.active"), 1);

    handle.destroy();
    window.scroll_to_with_x_and_y(0.0, 0.0);
}

#[wasm_bindgen_test]
async fn scroll_selection_brings_each_section_under_the_nav_bar() {
    let window = web_sys::window().unwrap();
    let root = mount_root();
    let handle = mount_landing(&root, NavMode::Scroll);
    settle().await;

    for section in Section::ALL.into_iter().rev() {
        let link: HtmlElement = nav_link(&root, section).dyn_into().unwrap();
        link.click();

        // smooth scrolling, poll until it lands
        let mut landed = false;
        for _ in 0..60 {
            TimeoutFuture::new(50).await;
            let top = section_top(&root, section);
            if (top - NAV_HEIGHT).abs() <= 2.0
                && nav_link(&root, section).class_list().contains("active")
            {
                landed = true;
                break;
            }
        }
        assert!(landed, "{} never scrolled into place (top {})", section, section_top(&root, section));
        assert_eq!(count(&root, ".nav-link.active"), 1);
    }

    handle.destroy();
    window.scroll_to_with_x_and_y(0.0, 0.0);
}

#[wasm_bindgen_test]
async fn url_fragment_picks_the_initial_section() {
    let location = web_sys::window().unwrap().location();
    location.set_hash("pricing").unwrap();

    let root = mount_root();
    let handle = mount_landing(&root, NavMode::Paged);
    settle().await;
    location.set_hash("").unwrap();

    assert_eq!(count(&root, ".page-section"), 1);
    assert!(root.query_selector("#pricing").unwrap().is_some());
    assert!(nav_link(&root, Section::Pricing).class_list().contains("active"));

    handle.destroy();
}
