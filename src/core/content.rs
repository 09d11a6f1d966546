//! Static landing page content
//!
//! Copy, cards and badges shown on the landing page. Everything here is
//! immutable and compiled into the bundle.

use serde::Serialize;

/// A card with an icon (emoji or short glyph), a title and a description.
///
/// Used for the feature carousel, the "How It Works" steps and the benefits grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

impl Card {
    pub const fn new(icon: &'static str, title: &'static str, description: &'static str) -> Self {
        Self {
            icon,
            title,
            description,
        }
    }
}

/// A technology badge in the "Built with Modern Tech" grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TechBadge {
    pub name: &'static str,
    pub icon: &'static str,
}

/// Repository popularity shown in the community section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommunityStats {
    pub stars: u32,
    pub forks: u32,
}

pub const PRODUCT_NAME: &str = "Open Fiesta";
pub const REPOSITORY_URL: &str = "https://github.com/NiladriHazra/Open-Fiesta";
pub const CHAT_PATH: &str = "/chat";
pub const LOGO_PATH: &str = "/Web_logo.svg";

pub const HERO_TITLE: &str = "Chat & Compare 300+ AI Models in One Place";
pub const HERO_SUBTITLE: &str = "Access top AI like OpenAI, Gemini, Claude & more—instantly, securely, and reliably. \
     Built for developers, researchers, and AI enthusiasts.";

/// Cards of the scroll-driven feature carousel
pub const FEATURES: &[Card] = &[
    Card::new(
        "🚀",
        "Access 300+ Premium AI Models Instantly",
        "Connect to industry-leading AI models including GPT-4, Claude 3.5 Sonnet, Gemini Pro, \
         DeepSeek, Grok, LLaMA, and hundreds more through a single, unified interface. No need to \
         juggle multiple accounts or platforms.",
    ),
    Card::new(
        "🔐",
        "Bank-Grade Security & Complete Privacy",
        "Your API keys and conversations remain 100% private with local browser storage. Zero \
         server uploads, zero data mining, zero compromises. Your sensitive information never \
         leaves your device.",
    ),
    Card::new(
        "⚡",
        "Pre-Configured Professional API Keys",
        "Skip the setup hassle with our built-in premium API keys. Start chatting with top-tier AI \
         models immediately without creating accounts or managing billing across multiple services.",
    ),
    Card::new(
        "🔄",
        "Advanced Side-by-Side Model Comparison",
        "Run identical prompts across multiple AI models simultaneously and compare responses in \
         real-time. Perfect for finding the optimal model for coding, writing, analysis, or \
         creative tasks.",
    ),
    Card::new(
        "🌐",
        "Real-Time Web Search Integration",
        "Enhance AI responses with live web search capabilities. Get up-to-date information, \
         current events, and recent data seamlessly integrated into your conversations for more \
         accurate and relevant answers.",
    ),
    Card::new(
        "📷",
        "Advanced Vision & Image Analysis",
        "Upload and analyze images, screenshots, documents, and diagrams with vision-enabled AI \
         models. Perfect for code review, design feedback, document analysis, and visual \
         problem-solving.",
    ),
];

/// Numbered steps of the "How It Works" section
pub const HOW_IT_WORKS: &[Card] = &[
    Card::new(
        "1",
        "Start Chatting",
        "Use default models instantly or add your own API keys for personalized access to premium AI models",
    ),
    Card::new(
        "2",
        "Ask Your Question",
        "From creative writing to complex coding problems—ask anything and get intelligent responses",
    ),
    Card::new(
        "3",
        "Compare AI Responses",
        "View side-by-side results from different models to find the perfect AI for your specific needs",
    ),
];

/// "Why Choose Open Fiesta?" benefits
pub const BENEFITS: &[Card] = &[
    Card::new(
        "⚡",
        "Efficiency",
        "Skip managing multiple API accounts—access everything in one place",
    ),
    Card::new(
        "🔒",
        "Security",
        "Your API keys stay local—never uploaded to our servers",
    ),
    Card::new(
        "🎯",
        "Flexibility",
        "Choose built-in keys or bring your own—customize your AI experience",
    ),
    Card::new(
        "🌟",
        "Transparent",
        "100% open-source, community-driven development",
    ),
];

pub const TECH_STACK: &[TechBadge] = &[
    TechBadge { name: "Next.js", icon: "⚛️" },
    TechBadge { name: "TypeScript", icon: "📘" },
    TechBadge { name: "Tailwind CSS", icon: "🎨" },
    TechBadge { name: "Docker", icon: "🐳" },
    TechBadge { name: "Supabase", icon: "⚡" },
    TechBadge { name: "Open Source", icon: "🔓" },
];

pub const EXAMPLE_PROMPTS: &[&str] = &[
    "Write a haiku about Monday mornings",
    "Explain quantum physics like I'm a golden retriever",
    "Create a marketing strategy for a sustainable fashion brand",
    "Debug this Python code and suggest improvements",
    "Generate a creative story about time travel",
    "Compare the pros and cons of different cloud providers",
];

pub const COMMUNITY_STATS: CommunityStats = CommunityStats {
    stars: 892,
    forks: 165,
};

/// Anchor targets of the header navigation, in display order
pub const NAV_SECTIONS: &[(&str, &str)] = &[
    ("#features", "Features"),
    ("#how-it-works", "How It Works"),
    ("#tech-stack", "Tech Stack"),
];

/// Footer links (label, href)
pub const FOOTER_LINKS: &[(&str, &str)] = &[
    ("Privacy", "#"),
    ("Terms", "#"),
    ("Docs", "#"),
    ("Support", "#"),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_filled(cards: &[Card]) {
        for card in cards {
            assert!(!card.icon.is_empty());
            assert!(!card.title.trim().is_empty());
            assert!(!card.description.trim().is_empty());
        }
    }

    #[test]
    fn test_feature_cards() {
        assert_eq!(FEATURES.len(), 6);
        assert_filled(FEATURES);
        assert_eq!(FEATURES[0].icon, "🚀");
        assert_eq!(FEATURES[5].title, "Advanced Vision & Image Analysis");
    }

    #[test]
    fn test_line_continuations_keep_single_spaces() {
        for card in FEATURES {
            assert!(!card.description.contains("  "), "{}", card.title);
        }
        assert!(!HERO_SUBTITLE.contains("  "));
    }

    #[test]
    fn test_how_it_works_is_numbered() {
        let numbers: Vec<&str> = HOW_IT_WORKS.iter().map(|step| step.icon).collect();
        assert_eq!(numbers, vec!["1", "2", "3"]);
        assert_filled(HOW_IT_WORKS);
    }

    #[test]
    fn test_benefits_and_badges() {
        assert_eq!(BENEFITS.len(), 4);
        assert_filled(BENEFITS);
        assert_eq!(TECH_STACK.len(), 6);
        assert_eq!(EXAMPLE_PROMPTS.len(), 6);
    }

    #[test]
    fn test_nav_targets_are_anchors() {
        assert!(NAV_SECTIONS.iter().all(|(href, _)| href.starts_with('#')));
    }

    #[test]
    fn test_card_serializes_verbatim() {
        let json = serde_json::to_value(HOW_IT_WORKS[0]).unwrap();
        assert_eq!(json["icon"], "1");
        assert_eq!(json["title"], "Start Chatting");
    }
}
