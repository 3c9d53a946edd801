//! Static page copy. Everything the sections render lives here so the
//! components stay free of literals.

use std::fmt;
use std::str::FromStr;

use crate::components::icons::Icon;

/// The four content blocks, in priority order. The scroll spy resolves
/// ties towards the variant declared first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    About,
    Features,
    Pricing,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Features,
        Section::Pricing,
    ];

    /// Anchor id of the `<section>` element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Features => "features",
            Section::Pricing => "pricing",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    /// Accepts a bare id or a URL fragment (`#pricing`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().trim_start_matches('#').to_ascii_lowercase();
        Section::ALL
            .into_iter()
            .find(|section| section.id() == id)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavigationItem {
    pub name: &'static str,
    pub section: Section,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureCard {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Capability {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    pub icon: Icon,
    pub title: &'static str,
    pub caption: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PricingPlan {
    pub name: &'static str,
    /// Whole US dollars per month.
    pub monthly_price: u32,
    pub features: &'static [&'static str],
    pub popular: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [&'static str],
}

pub const NAVIGATION: &[NavigationItem] = &[
    NavigationItem { name: "Home", section: Section::Home },
    NavigationItem { name: "About", section: Section::About },
    NavigationItem { name: "Features", section: Section::Features },
    NavigationItem { name: "Pricing", section: Section::Pricing },
];

pub const FEATURES: &[FeatureCard] = &[
    FeatureCard {
        icon: Icon::Brain,
        title: "AI-Powered Intelligence",
        description: "Advanced AI algorithms that understand context and generate production-ready code instantly.",
    },
    FeatureCard {
        icon: Icon::Zap,
        title: "Lightning Fast",
        description: "Generate, debug, and refactor code in milliseconds with our optimized AI engine.",
    },
    FeatureCard {
        icon: Icon::Sparkles,
        title: "Smart Suggestions",
        description: "Real-time intelligent code suggestions that adapt to your coding style and patterns.",
    },
    FeatureCard {
        icon: Icon::Code,
        title: "Multi-Language Support",
        description: "Supports 50+ programming languages with framework-specific optimizations.",
    },
];

pub const CAPABILITIES: &[Capability] = &[
    Capability {
        title: "Code Completion",
        description: "Intelligent autocomplete that predicts your next line of code",
    },
    Capability {
        title: "Bug Detection",
        description: "Automatically identify and fix bugs before they reach production",
    },
    Capability {
        title: "Code Refactoring",
        description: "Optimize and improve your codebase with AI-powered suggestions",
    },
];

pub const ABOUT_HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: Icon::Brain,
        title: "AI-First Approach",
        caption: "Built on cutting-edge machine learning",
    },
    Highlight {
        icon: Icon::Zap,
        title: "Lightning Performance",
        caption: "Optimized for speed and efficiency",
    },
    Highlight {
        icon: Icon::Sparkles,
        title: "Continuous Innovation",
        caption: "Weekly updates and improvements",
    },
];

pub const ABOUT_STATS: &[Stat] = &[
    Stat { value: "500K+", label: "Developers" },
    Stat { value: "50M+", label: "Code Lines" },
    Stat { value: "99.9%", label: "Uptime" },
];

pub const PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Starter",
        monthly_price: 19,
        features: &[
            "100 AI requests/day",
            "Basic code generation",
            "Email support",
            "5 projects",
        ],
        popular: false,
    },
    PricingPlan {
        name: "Pro",
        monthly_price: 49,
        features: &[
            "Unlimited AI requests",
            "Advanced code generation",
            "Priority support",
            "Unlimited projects",
            "Team collaboration",
        ],
        popular: true,
    },
    PricingPlan {
        name: "Enterprise",
        monthly_price: 199,
        features: &[
            "Everything in Pro",
            "Custom AI models",
            "Dedicated support",
            "On-premise deployment",
            "SLA guarantee",
        ],
        popular: false,
    },
];

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        heading: "Product",
        links: &["Features", "Pricing", "Documentation", "API"],
    },
    FooterColumn {
        heading: "Company",
        links: &["About", "Blog", "Careers", "Contact"],
    },
    FooterColumn {
        heading: "Legal",
        links: &["Privacy", "Terms", "Security"],
    },
];
