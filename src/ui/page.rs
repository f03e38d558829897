use serde::Serialize;

use crate::models::{ModelType, Movie, StatsResponse};
use crate::services::StreamingInfo;

/// Genres shown as quick-browse pills when the backend offers them
pub const POPULAR_GENRES: [&str; 8] = [
    "Action",
    "Comedy",
    "Drama",
    "Thriller",
    "Romance",
    "Horror",
    "Sci-Fi",
    "Animation",
];

/// Genres shown on a card
const CARD_GENRE_LIMIT: usize = 3;

/// Everything the browser shell renders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub search: SearchBox,
    pub suggestions: Vec<String>,
    pub model: ModelType,
    pub hero_visible: bool,
    pub content: Content,
    pub stats: Option<StatsView>,
    pub genre_pills: Vec<String>,
    pub modal: Option<ModalView>,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            search: SearchBox::default(),
            suggestions: Vec::new(),
            model: ModelType::default(),
            hero_visible: true,
            content: Content::Empty,
            stats: None,
            genre_pills: Vec::new(),
            modal: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchBox {
    pub text: String,
    pub active: bool,
}

/// Main content area below the search bar
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Content {
    #[default]
    Empty,
    Loading,
    Error {
        message: String,
    },
    Results {
        heading: String,
        subheading: Option<String>,
        cards: Vec<Card>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub index: usize,
    pub title: String,
    pub year_label: String,
    pub genres: String,
    pub poster: Poster,
}

impl Card {
    pub fn placeholder(index: usize, movie: &Movie) -> Self {
        let genres: Vec<&str> = movie
            .genre_names()
            .into_iter()
            .take(CARD_GENRE_LIMIT)
            .collect();

        Self {
            index,
            title: movie.title.clone(),
            year_label: movie.year.map(|year| year.to_string()).unwrap_or_default(),
            genres: genres.join(" • "),
            poster: Poster::Placeholder,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Poster {
    Placeholder,
    Image { url: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsView {
    pub total_movies: u64,
    pub available_genres: u64,
}

impl From<StatsResponse> for StatsView {
    fn from(stats: StatsResponse) -> Self {
        Self {
            total_movies: stats.total_movies,
            available_genres: stats.available_genres,
        }
    }
}

/// Detail overlay for one card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModalView {
    pub index: usize,
    pub title: String,
    pub poster_url: Option<String>,
    pub rating_label: String,
    pub year_label: String,
    pub genres: String,
    pub overview: String,
    pub match_score_label: String,
    pub streaming: StreamingPanel,
}

impl ModalView {
    pub fn new(index: usize, movie: &Movie, poster_url: Option<String>) -> Self {
        Self {
            index,
            title: movie.title.clone(),
            poster_url,
            rating_label: format!("{:.1}/10", movie.rating),
            year_label: movie
                .year
                .map(|year| year.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            genres: movie.genre_names().join(", "),
            overview: movie
                .overview
                .clone()
                .filter(|overview| !overview.is_empty())
                .unwrap_or_else(|| "No description available.".to_string()),
            match_score_label: format!("{:.2}", movie.match_score()),
            streaming: StreamingPanel::Loading,
        }
    }
}

/// "Where to Watch" section of the modal
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "info", rename_all = "snake_case")]
pub enum StreamingPanel {
    Loading,
    Ready(StreamingInfo),
}

/// Keeps backend genres that are popular, in backend order
pub fn popular_genre_pills(genres: &[String]) -> Vec<String> {
    genres
        .iter()
        .filter(|genre| POPULAR_GENRES.contains(&genre.as_str()))
        .cloned()
        .collect()
}
