pub mod resolver;
pub mod response;
pub mod search;
pub mod source;

pub use resolver::{
    display_title_from_slug, load_all_events, AllEventsCache, CategoryResolver, CategorySources, EmptyResultPolicy,
    ResolvedCategory, Superseded, ALL_EVENTS_CACHE_KEY, ALL_EVENTS_TTL_SECONDS,
};
pub use response::{CategoryResolution, ResolutionStep};
pub use search::{find_by_slug, search_within, single_search_hit};
pub use source::{CategoryParam, FetchFailure, FetchOutcome, OlympiadSource};
