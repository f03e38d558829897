use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::{
    error::AppError,
    models::{ModelType, Movie, SortBy},
    services::{PosterResolver, RecommendationBackend, StreamingResolver},
    ui::{
        debounce::Debouncer,
        page::{popular_genre_pills, Card, Content, ModalView, Page, Poster, StreamingPanel},
    },
};

pub const RECOMMENDATION_COUNT: usize = 12;
pub const GENRE_BROWSE_COUNT: usize = 20;
pub const SUGGESTION_LIMIT: usize = 5;
pub const MIN_SUGGESTION_QUERY_LEN: usize = 2;

/// A rendered recommendation and the poster resolved for it so far
#[derive(Debug, Clone)]
struct RecommendationSlot {
    movie: Movie,
    poster_url: Option<String>,
}

struct ViewState {
    page: Page,
    slots: Vec<RecommendationSlot>,
    /// Bumped by every recommendation or genre fetch
    generation: u64,
    /// Bumped by every modal open and close
    modal_token: u64,
    /// Bumped by every suggestion lookup and every gesture that clears suggestions
    suggestion_ticket: u64,
}

impl ViewState {
    fn clear_suggestions(&mut self) {
        self.suggestion_ticket += 1;
        self.page.suggestions.clear();
    }
}

/// Background lookups started by a render
///
/// Dropping the handle leaves the tasks running; awaiting `wait` joins them.
#[derive(Debug, Default)]
pub struct Enrichment {
    tasks: Vec<JoinHandle<()>>,
}

impl Enrichment {
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub async fn wait(self) {
        for task in self.tasks {
            if let Err(e) = task.await {
                tracing::error!(error = %e, "Enrichment task failed");
            }
        }
    }
}

/// Drives the page in response to user gestures
///
/// All view state lives behind one lock. Enrichment tasks write back only into
/// the generation or modal they were started for.
#[derive(Clone)]
pub struct Controller {
    backend: Arc<dyn RecommendationBackend>,
    posters: PosterResolver,
    streaming: StreamingResolver,
    debouncer: Debouncer,
    view: Arc<RwLock<ViewState>>,
}

impl Controller {
    pub fn new(
        backend: Arc<dyn RecommendationBackend>,
        posters: PosterResolver,
        streaming: StreamingResolver,
        suggestion_debounce: Duration,
    ) -> Self {
        Self {
            backend,
            posters,
            streaming,
            debouncer: Debouncer::new(suggestion_debounce),
            view: Arc::new(RwLock::new(ViewState {
                page: Page::default(),
                slots: Vec::new(),
                generation: 0,
                modal_token: 0,
                suggestion_ticket: 0,
            })),
        }
    }

    /// Snapshot of the current page
    pub async fn page(&self) -> Page {
        self.view.read().await.page.clone()
    }

    // ------------------------------------------------------------------
    // Search box
    // ------------------------------------------------------------------

    /// Stores typed text and schedules a suggestion lookup for it
    ///
    /// The handle resolves to `true` if this keystroke's lookup actually ran.
    pub async fn input(&self, text: &str) -> JoinHandle<bool> {
        self.view.write().await.page.search.text = text.to_string();

        let controller = self.clone();
        self.debouncer.call(move || async move {
            let query = controller.view.read().await.page.search.text.clone();
            controller.search_suggestions(&query).await;
        })
    }

    /// Shows titles matching `query`, unless the list was cleared meanwhile
    pub async fn search_suggestions(&self, query: &str) {
        let query = query.trim();
        let ticket = {
            let mut view = self.view.write().await;
            if query.chars().count() < MIN_SUGGESTION_QUERY_LEN {
                view.clear_suggestions();
                return;
            }
            view.suggestion_ticket += 1;
            view.suggestion_ticket
        };

        let suggestions = match self.backend.search_movies(query, SUGGESTION_LIMIT).await {
            Ok(response) => response
                .movies
                .into_iter()
                .map(|movie| movie.title)
                .collect(),
            Err(e) => {
                tracing::warn!(query = %query, error = %e, "Suggestion search failed");
                Vec::new()
            }
        };

        let mut view = self.view.write().await;
        if view.suggestion_ticket != ticket {
            tracing::debug!(query = %query, "Dropping superseded suggestions");
            return;
        }
        view.page.suggestions = suggestions;
    }

    pub async fn select_suggestion(&self, title: &str) -> Enrichment {
        {
            let mut view = self.view.write().await;
            view.page.search.text = title.to_string();
            view.clear_suggestions();
        }
        self.get_recommendations(title).await
    }

    /// Searches for the typed title; blank text does nothing
    pub async fn submit(&self) -> Option<Enrichment> {
        let title = self.view.read().await.page.search.text.trim().to_string();
        if title.is_empty() {
            return None;
        }

        let enrichment = self.get_recommendations(&title).await;
        self.view.write().await.clear_suggestions();
        Some(enrichment)
    }

    pub async fn toggle_search(&self) {
        let mut view = self.view.write().await;
        view.page.search.active = !view.page.search.active;
    }

    pub async fn focus_search(&self) {
        self.view.write().await.page.search.active = true;
    }

    /// A click anywhere but the search box collapses it, unless it holds text
    pub async fn click_outside(&self) {
        let mut view = self.view.write().await;
        if view.page.search.text.is_empty() {
            view.page.search.active = false;
            view.clear_suggestions();
        }
    }

    /// Logo click: back to the landing view
    pub async fn go_home(&self) {
        let mut view = self.view.write().await;
        view.generation += 1;
        view.slots.clear();
        view.page.search.text.clear();
        view.page.search.active = false;
        view.clear_suggestions();
        view.page.hero_visible = true;
        view.page.content = Content::Empty;
    }

    pub async fn set_model(&self, model: ModelType) {
        self.view.write().await.page.model = model;
    }

    // ------------------------------------------------------------------
    // Recommendation fetching
    // ------------------------------------------------------------------

    pub async fn get_recommendations(&self, title: &str) -> Enrichment {
        let (generation, model) = self.start_fetch().await;

        tracing::info!(title = %title, model = %model, "Fetching recommendations");

        match self
            .backend
            .recommend(title, model, RECOMMENDATION_COUNT)
            .await
        {
            Ok(response) => {
                let heading = format!("More Like: {}", response.query_movie);
                self.show_results(generation, heading, None, response.recommendations)
                    .await
            }
            Err(e) => {
                self.show_error(generation, &e, "Please try another title.")
                    .await;
                Enrichment::default()
            }
        }
    }

    pub async fn browse_genre(&self, genre: &str, sort_by: SortBy) -> Enrichment {
        let (generation, _) = self.start_fetch().await;

        tracing::info!(genre = %genre, sort_by = sort_by.as_str(), "Browsing genre");

        match self
            .backend
            .browse_genre(genre, GENRE_BROWSE_COUNT, sort_by)
            .await
        {
            Ok(response) => {
                let heading = format!("Top {} Movies", response.genre);
                let subheading = format!(
                    "Sorted by {} • {} movies available",
                    response.sort_by, response.total_found
                );
                self.show_results(
                    generation,
                    heading,
                    Some(subheading),
                    response.recommendations,
                )
                .await
            }
            Err(e) => {
                self.show_error(generation, &e, "Please try another genre.")
                    .await;
                Enrichment::default()
            }
        }
    }

    /// Hides the hero, shows the spinner and invalidates the previous results
    async fn start_fetch(&self) -> (u64, ModelType) {
        let mut view = self.view.write().await;
        view.generation += 1;
        view.slots.clear();
        view.page.hero_visible = false;
        view.page.content = Content::Loading;
        (view.generation, view.page.model)
    }

    async fn show_error(&self, generation: u64, error: &AppError, hint: &str) {
        if error.is_network_or_parse() {
            tracing::warn!(error = %error, "Fetch failed");
        } else {
            tracing::info!(error = %error, "Nothing to show");
        }

        let mut view = self.view.write().await;
        if view.generation != generation {
            return;
        }
        view.page.content = Content::Error {
            message: format!("{}. {}", error, hint),
        };
    }

    async fn show_results(
        &self,
        generation: u64,
        heading: String,
        subheading: Option<String>,
        movies: Vec<Movie>,
    ) -> Enrichment {
        {
            let mut view = self.view.write().await;
            if view.generation != generation {
                tracing::debug!(generation, "Dropping superseded results");
                return Enrichment::default();
            }

            let cards = movies
                .iter()
                .enumerate()
                .map(|(index, movie)| Card::placeholder(index, movie))
                .collect();
            view.page.content = Content::Results {
                heading,
                subheading,
                cards,
            };
            view.slots = movies
                .iter()
                .cloned()
                .map(|movie| RecommendationSlot {
                    movie,
                    poster_url: None,
                })
                .collect();
        }

        let tasks = movies
            .into_iter()
            .enumerate()
            .map(|(index, movie)| {
                let controller = self.clone();
                tokio::spawn(async move {
                    let poster = controller
                        .posters
                        .fetch_poster_url(&movie.title, movie.year)
                        .await;
                    controller.apply_poster(generation, index, poster).await;
                })
            })
            .collect();

        Enrichment { tasks }
    }

    /// Writes a resolved poster into its card; stale generations are ignored
    async fn apply_poster(&self, generation: u64, index: usize, poster: Option<String>) -> bool {
        let mut view = self.view.write().await;
        if view.generation != generation {
            return false;
        }

        let Some(slot) = view.slots.get_mut(index) else {
            return false;
        };
        slot.poster_url = poster.clone();

        if let (Some(url), Content::Results { cards, .. }) = (poster, &mut view.page.content) {
            if let Some(card) = cards.get_mut(index) {
                card.poster = Poster::Image { url };
            }
        }
        true
    }

    // ------------------------------------------------------------------
    // Modal
    // ------------------------------------------------------------------

    /// Opens the detail modal for a card and starts its streaming lookup
    ///
    /// Returns `None` when no card has this index.
    pub async fn open_card(&self, index: usize) -> Option<Enrichment> {
        let (token, movie) = {
            let mut view = self.view.write().await;
            let slot = view.slots.get(index)?.clone();

            view.modal_token += 1;
            view.page.modal = Some(ModalView::new(index, &slot.movie, slot.poster_url));
            (view.modal_token, slot.movie)
        };

        let controller = self.clone();
        let task = tokio::spawn(async move {
            let info = controller
                .streaming
                .fetch_streaming_info(&movie.title, movie.year)
                .await;

            let mut view = controller.view.write().await;
            if view.modal_token != token {
                tracing::debug!(title = %movie.title, "Modal changed before streaming info arrived");
                return;
            }
            if let Some(modal) = view.page.modal.as_mut() {
                modal.streaming = StreamingPanel::Ready(info);
            }
        });

        Some(Enrichment { tasks: vec![task] })
    }

    pub async fn close_modal(&self) {
        let mut view = self.view.write().await;
        view.modal_token += 1;
        view.page.modal = None;
    }

    // ------------------------------------------------------------------
    // Page load
    // ------------------------------------------------------------------

    pub async fn load_stats(&self) {
        match self.backend.stats().await {
            Ok(stats) => self.view.write().await.page.stats = Some(stats.into()),
            Err(e) => tracing::warn!(error = %e, "Failed to load stats"),
        }
    }

    pub async fn load_genres(&self) {
        match self.backend.genres().await {
            Ok(response) => {
                self.view.write().await.page.genre_pills = popular_genre_pills(&response.genres)
            }
            Err(e) => tracing::warn!(error = %e, "Failed to load genres"),
        }
    }

    pub async fn boot(&self) {
        tokio::join!(self.load_stats(), self.load_genres());
    }
}
