use yew::prelude::*;

/// Stroke icons drawn inline, 24x24 viewBox.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Code,
    Menu,
    Close,
    Zap,
    Brain,
    Sparkles,
    CheckCircle,
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

fn shape(icon: Icon) -> Html {
    match icon {
        Icon::Code => html! {
            <>
                <path d="m18 16 4-4-4-4" />
                <path d="m6 8-4 4 4 4" />
                <path d="m14.5 4-5 16" />
            </>
        },
        Icon::Menu => html! {
            <>
                <line x1="4" x2="20" y1="6" y2="6" />
                <line x1="4" x2="20" y1="12" y2="12" />
                <line x1="4" x2="20" y1="18" y2="18" />
            </>
        },
        Icon::Close => html! {
            <>
                <path d="M18 6 6 18" />
                <path d="m6 6 12 12" />
            </>
        },
        Icon::Zap => html! {
            <polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2" />
        },
        Icon::Brain => html! {
            <>
                <path d="M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z" />
                <path d="M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z" />
                <path d="M12 5v13" />
            </>
        },
        Icon::Sparkles => html! {
            <>
                <path d="m12 3-1.912 5.813a2 2 0 0 1-1.275 1.275L3 12l5.813 1.912a2 2 0 0 1 1.275 1.275L12 21l1.912-5.813a2 2 0 0 1 1.275-1.275L21 12l-5.813-1.912a2 2 0 0 1-1.275-1.275L12 3Z" />
                <path d="M5 3v4" />
                <path d="M3 5h4" />
            </>
        },
        Icon::CheckCircle => html! {
            <>
                <circle cx="12" cy="12" r="10" />
                <path d="m9 12 2 2 4-4" />
            </>
        },
    }
}

#[function_component(IconSvg)]
pub fn icon_svg(props: &IconProps) -> Html {
    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { shape(props.icon) }
        </svg>
    }
}
