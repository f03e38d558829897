pub mod backend;
pub mod platforms;
pub mod posters;
pub mod providers;
pub mod streaming;

pub use backend::{HttpBackend, RecommendationBackend};
pub use posters::PosterResolver;
pub use streaming::{StreamingInfo, StreamingResolver};
