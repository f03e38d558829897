/// Streaming platform normalization and badge metadata
///
/// Providers report the same platform under many regional and tier names
/// ("Disney+ Hotstar", "Amazon Prime Video with Ads", ...). These are folded into
/// one canonical name before deduplication and display.
use serde::Serialize;

use crate::models::WatchmodeSource;

/// Most badges rendered for one title
pub const MAX_PLATFORM_BADGES: usize = 8;

/// Badge color for platforms without a brand entry
pub const DEFAULT_PLATFORM_COLOR: &str = "#666";

/// Ordered rewrite rules; the first rule with a matching fragment wins
const NAME_RULES: &[(&[&str], &str)] = &[
    (&["Disney", "Hotstar"], "Disney+"),
    (&["Prime"], "Prime Video"),
    (&["HBO"], "HBO Max"),
    (&["Apple TV"], "Apple TV+"),
    (&["Paramount"], "Paramount+"),
];

struct Brand {
    name: &'static str,
    color: &'static str,
    icon_url: &'static str,
}

const BRANDS: &[Brand] = &[
    Brand {
        name: "Netflix",
        color: "#E50914",
        icon_url: "https://cdn.simpleicons.org/netflix/E50914",
    },
    Brand {
        name: "Prime Video",
        color: "#00A8E1",
        icon_url: "https://cdn.simpleicons.org/primevideo/00A8E1",
    },
    Brand {
        name: "Disney+",
        color: "#113CCF",
        icon_url: "https://upload.wikimedia.org/wikipedia/commons/3/3e/Disney%2B_logo.svg",
    },
    Brand {
        name: "Hulu",
        color: "#1CE783",
        icon_url: "https://cdn.simpleicons.org/hulu/1CE783",
    },
    Brand {
        name: "HBO Max",
        color: "#9D34DA",
        icon_url: "https://cdn.simpleicons.org/hbomax/9D34DA",
    },
    Brand {
        name: "Apple TV+",
        color: "#000000",
        icon_url: "https://cdn.simpleicons.org/appletv/white",
    },
    Brand {
        name: "Paramount+",
        color: "#0064FF",
        icon_url: "https://cdn.simpleicons.org/paramountplus/0064FF",
    },
    Brand {
        name: "Peacock",
        color: "#000000",
        icon_url: "https://upload.wikimedia.org/wikipedia/commons/d/d3/NBCUniversal_Peacock_Logo.svg",
    },
    Brand {
        name: "YouTube Premium",
        color: "#FF0000",
        icon_url: "https://cdn.simpleicons.org/youtube/FF0000",
    },
];

/// Badge icon: a known logo, or a short text mark on the badge color
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlatformIcon {
    Image { url: String },
    Text { label: String },
}

/// One deduplicated streaming platform ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderBadge {
    pub name: String,
    pub color: String,
    pub icon: PlatformIcon,
}

impl ProviderBadge {
    pub fn for_platform(name: &str) -> Self {
        let brand = BRANDS.iter().find(|brand| brand.name == name);
        let color = brand.map_or(DEFAULT_PLATFORM_COLOR, |brand| brand.color);
        let icon = match brand {
            Some(brand) => PlatformIcon::Image {
                url: brand.icon_url.to_string(),
            },
            None => PlatformIcon::Text {
                label: name.chars().take(2).collect(),
            },
        };

        Self {
            name: name.to_string(),
            color: color.to_string(),
            icon,
        }
    }
}

/// Maps a provider-reported name to its canonical platform name
pub fn normalize_platform_name(name: &str) -> String {
    NAME_RULES
        .iter()
        .find(|(fragments, _)| fragments.iter().any(|fragment| name.contains(fragment)))
        .map_or_else(|| name.to_string(), |(_, canonical)| canonical.to_string())
}

/// Canonical names of streamable sources, first occurrence per name, in order
///
/// Rent and buy offers are dropped; callers check the unfiltered list to tell
/// "rent/buy only" apart from "nothing at all".
pub fn streaming_platforms(sources: &[WatchmodeSource]) -> Vec<String> {
    let mut platforms: Vec<String> = Vec::new();
    for source in sources.iter().filter(|s| s.source_type.is_streaming()) {
        let name = normalize_platform_name(&source.name);
        if !platforms.contains(&name) {
            platforms.push(name);
        }
    }
    platforms
}

/// Badges for the first `MAX_PLATFORM_BADGES` platforms
pub fn platform_badges(platforms: &[String]) -> Vec<ProviderBadge> {
    platforms
        .iter()
        .take(MAX_PLATFORM_BADGES)
        .map(|name| ProviderBadge::for_platform(name))
        .collect()
}
