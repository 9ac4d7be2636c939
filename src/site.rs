//! Static landing page content

pub struct Feature {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        slug: "contextual-chatbot",
        title: "Contextual AI Chatbots",
        description: "Upload all of your instruction manuals and SOP's and allow your team members to quickly find what they need using natural language.",
    },
    Feature {
        slug: "centralized-access",
        title: "Centralized Access",
        description: "Dive into any software tool you use without ever leaving the platform. No more tiresome toggling between apps or web pages.",
    },
    Feature {
        slug: "ai-powered-insights",
        title: "AI-Powered Insights",
        description: "By pooling data from all your integrated software, our AI engine uncovers insights that would have been missed in isolation.",
    },
    Feature {
        slug: "content-creation",
        title: "Automated AI Content Creation",
        description: "With an intuitive feel for your company, our system can generate personalized marketing content optimized for your business.",
    },
];

pub struct FeatureTab {
    pub index: usize,
    pub feature: &'static Feature,
    pub active: bool,
}

pub fn feature_tabs(selected: usize) -> Vec<FeatureTab> {
    FEATURES
        .iter()
        .enumerate()
        .map(|(index, feature)| FeatureTab {
            index,
            feature,
            active: index == selected,
        })
        .collect()
}

/// Index of the feature tab to open, falling back to the first one
pub fn selected_feature(raw: Option<&str>) -> usize {
    raw.and_then(|v| v.parse::<usize>().ok())
        .filter(|i| *i < FEATURES.len())
        .unwrap_or(0)
}
