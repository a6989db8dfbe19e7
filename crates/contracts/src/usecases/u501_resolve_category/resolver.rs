//! Разрешение категории по slug из адреса
//!
//! Цепочка шагов выполняется строго последовательно, до первого непустого ответа:
//!
//! 1. серверный фильтр `category=<slug>`;
//! 2. slug -> категория, затем серверный фильтр `category_id=<id>` и `category=<id>`;
//! 3. локальный отбор из полного списка мероприятий (кэш или `fetch_all`);
//! 4. если категорию найти не удалось, пустой результат с заголовком из slug.
//!
//! Ошибки сети на любом шаге не пробрасываются, а переводят к следующему шагу.
//! Полный список мероприятий никогда не возвращается вместо результата категории.

use chrono::Duration;

use super::response::{CategoryResolution, ResolutionStep};
use super::source::{CategoryParam, FetchOutcome, OlympiadSource};
use crate::domain::a001_category::aggregate::normalize_slug;
use crate::domain::a001_category::Category;
use crate::domain::a002_olympiad::Olympiad;
use crate::shared::cache::{Clock, TimedCache};
use crate::shared::cancellation::CancellationToken;

pub const ALL_EVENTS_CACHE_KEY: &str = "olympiads:all";
pub const ALL_EVENTS_TTL_SECONDS: i64 = 60;

/// Кэш полного списка мероприятий, последний источник для локального отбора
pub type AllEventsCache = TimedCache<Vec<Olympiad>>;

impl TimedCache<Vec<Olympiad>> {
    pub fn for_all_events() -> Self {
        TimedCache::new(
            ALL_EVENTS_CACHE_KEY,
            Duration::seconds(ALL_EVENTS_TTL_SECONDS),
        )
    }
}

/// Как трактовать успешный, но пустой ответ серверного фильтра
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyResultPolicy {
    /// Пустой успешный ответ означает "в категории ничего нет".
    /// Варианты параметра (slug, id) всё равно перебираются, но локальный
    /// отбор не выполняется.
    #[default]
    TrustEmpty,
    /// Пустой ответ считается неудачей, цепочка идёт до локального отбора
    FallThrough,
}

/// Запуск отменён более новым запросом; результат нужно отбросить
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("category resolution superseded by a newer request")]
pub struct Superseded;

/// Категория после сверки slug с живым списком и статической таблицей
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCategory {
    /// Slug из адреса, нормализованный
    pub requested_slug: String,
    /// Slug найденной категории; после сверки по названию может отличаться от запрошенного
    pub slug: String,
    pub title: String,
    /// Идентификатор бэкенда; только из живого списка
    pub id: Option<i64>,
    /// Идентификатор статической таблицы, справочно
    pub seed_id: Option<i64>,
}

impl ResolvedCategory {
    /// Мероприятие относится к категории: по `category_id` либо по устаревшему
    /// строковому полю, совпадающему с запрошенным slug, slug категории или названием
    pub fn matches(&self, event: &Olympiad) -> bool {
        if let (Some(id), Some(event_category)) = (self.id, event.category_id) {
            if id == event_category {
                return true;
            }
        }
        event.category.as_deref().is_some_and(|legacy| {
            let legacy = legacy.trim().to_lowercase();
            legacy == self.requested_slug
                || legacy == normalize_slug(&self.slug)
                || legacy == self.title.to_lowercase()
        })
    }
}

/// Оба источника категорий: список из API и статическая таблица
#[derive(Debug, Clone, Copy)]
pub struct CategorySources<'a> {
    pub live: &'a [Category],
    pub seed: &'a [Category],
}

impl<'a> CategorySources<'a> {
    pub fn new(live: &'a [Category], seed: &'a [Category]) -> Self {
        Self { live, seed }
    }

    pub fn live_only(live: &'a [Category]) -> Self {
        Self { live, seed: &[] }
    }

    /// Найти категорию по slug. Живой список приоритетнее; запись статической
    /// таблицы дополнительно сверяется с живым списком по названию, так как
    /// slug в источниках может различаться.
    pub fn resolve_slug(&self, slug: &str) -> Option<ResolvedCategory> {
        let requested_slug = normalize_slug(slug);
        let seed = self.seed.iter().find(|c| c.slug_matches(slug));
        let live = self.live.iter().find(|c| c.slug_matches(slug)).or_else(|| {
            seed.and_then(|s| {
                let title = s.title.to_lowercase();
                self.live.iter().find(|c| c.title.to_lowercase() == title)
            })
        });

        match (live, seed) {
            (Some(live), seed) => Some(ResolvedCategory {
                requested_slug,
                slug: live.slug.clone(),
                title: live.title.clone(),
                id: Some(live.id),
                seed_id: seed.map(|s| s.id),
            }),
            (None, Some(seed)) => Some(ResolvedCategory {
                requested_slug,
                slug: seed.slug.clone(),
                title: seed.title.clone(),
                id: None,
                seed_id: Some(seed.id),
            }),
            (None, None) => None,
        }
    }
}

/// Заголовок из сырого slug: декодирование, `-`/`_` в пробелы, заглавная первая буква
pub fn display_title_from_slug(slug: &str) -> String {
    let decoded = urlencoding::decode(slug)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| slug.to_string());
    let spaced = decoded.replace(['-', '_'], " ");
    let trimmed = spaced.trim();

    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Полный список мероприятий: свежий кэш, затем запрос, затем устаревший кэш.
/// `None`, только если запрос не удался и кэш пуст.
pub async fn load_all_events<S, C>(source: &S, cache: &AllEventsCache, clock: &C) -> Option<Vec<Olympiad>>
where
    S: OlympiadSource + ?Sized,
    C: Clock + ?Sized,
{
    if let Some(events) = cache.get_fresh(clock.now()) {
        log::debug!("Using cached '{}'", cache.key());
        return Some(events);
    }

    match source.fetch_all().await {
        FetchOutcome::Success(events) => {
            cache.store(events.clone(), clock.now());
            Some(events)
        }
        FetchOutcome::Failed(failure) => {
            log::warn!("Fetching all events failed: {}", failure);
            cache.get_any()
        }
    }
}

fn ensure_current(token: &CancellationToken) -> Result<(), Superseded> {
    if token.is_cancelled() {
        Err(Superseded)
    } else {
        Ok(())
    }
}

/// Цепочка разрешения категории поверх источника мероприятий
pub struct CategoryResolver<'a, S: ?Sized, C: ?Sized> {
    source: &'a S,
    cache: &'a AllEventsCache,
    clock: &'a C,
    policy: EmptyResultPolicy,
}

impl<'a, S, C> CategoryResolver<'a, S, C>
where
    S: OlympiadSource + ?Sized,
    C: Clock + ?Sized,
{
    pub fn new(source: &'a S, cache: &'a AllEventsCache, clock: &'a C) -> Self {
        Self {
            source,
            cache,
            clock,
            policy: EmptyResultPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: EmptyResultPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> EmptyResultPolicy {
        self.policy
    }

    pub async fn resolve(
        &self,
        slug: &str,
        sources: &CategorySources<'_>,
        token: &CancellationToken,
    ) -> Result<CategoryResolution, Superseded> {
        let resolved = sources.resolve_slug(slug);
        let display_title = resolved
            .as_ref()
            .map(|c| c.title.clone())
            .unwrap_or_else(|| display_title_from_slug(slug));
        let category_id = resolved.as_ref().and_then(|c| c.id);
        let finish = |matched_events: Vec<Olympiad>, step: ResolutionStep| CategoryResolution {
            display_title: display_title.clone(),
            category_id,
            matched_events,
            step,
        };

        log::debug!(
            "resolve_category: slug='{}' resolved={:?} policy={:?}",
            slug,
            resolved,
            self.policy
        );

        let mut answered_empty = false;

        ensure_current(token)?;
        let by_slug = CategoryParam::Slug(slug.to_string());
        match self.source.filter_by_category(&by_slug).await {
            FetchOutcome::Success(items) if !items.is_empty() => {
                ensure_current(token)?;
                log::debug!("{} events via {}", items.len(), by_slug.to_query_pair());
                return Ok(finish(items, ResolutionStep::ServerBySlug));
            }
            FetchOutcome::Success(_) => answered_empty = true,
            FetchOutcome::Failed(failure) => {
                log::warn!("Filter {} failed: {}", by_slug.to_query_pair(), failure);
            }
        }

        if let Some(id) = category_id {
            for param in [CategoryParam::CategoryId(id), CategoryParam::Id(id)] {
                ensure_current(token)?;
                match self.source.filter_by_category(&param).await {
                    FetchOutcome::Success(items) if !items.is_empty() => {
                        ensure_current(token)?;
                        log::debug!("{} events via {}", items.len(), param.to_query_pair());
                        return Ok(finish(items, ResolutionStep::ServerById));
                    }
                    FetchOutcome::Success(_) => answered_empty = true,
                    FetchOutcome::Failed(failure) => {
                        log::warn!("Filter {} failed: {}", param.to_query_pair(), failure);
                    }
                }
            }
        }

        ensure_current(token)?;
        let Some(category) = resolved else {
            log::info!("Slug '{}' matches no category, showing empty list", slug);
            return Ok(finish(Vec::new(), ResolutionStep::Unresolved));
        };

        if answered_empty && self.policy == EmptyResultPolicy::TrustEmpty {
            log::debug!("Server answered empty for '{}', skipping local fallback", slug);
            return Ok(finish(Vec::new(), ResolutionStep::ServerEmpty));
        }

        let events = self.all_events().await;
        ensure_current(token)?;
        let Some(events) = events else {
            log::warn!("No event source available for '{}'", slug);
            return Ok(finish(Vec::new(), ResolutionStep::Unavailable));
        };

        let matched: Vec<Olympiad> = events.into_iter().filter(|e| category.matches(e)).collect();
        log::debug!("{} events matched locally for '{}'", matched.len(), slug);
        Ok(finish(matched, ResolutionStep::LocalReconciliation))
    }

    async fn all_events(&self) -> Option<Vec<Olympiad>> {
        load_all_events(self.source, self.cache, self.clock).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::cancellation::CancellationSource;
    use crate::usecases::u501_resolve_category::search::{search_within, single_search_hit};
    use crate::usecases::u501_resolve_category::source::FetchFailure;
    use async_trait::async_trait;
    use chrono::{DateTime, TimeZone, Utc};
    use std::cell::{Cell, RefCell};

    /// Как отвечает серверный фильтр в тестовом источнике
    #[derive(Clone, Copy, PartialEq)]
    enum Server {
        Down,
        /// Фильтрует по category_id; slug переводится в id по списку категорий
        Filters,
        /// Понимает только `category_id`, на остальное отвечает пусто
        OnlyCategoryId,
        AlwaysEmpty,
    }

    struct FakeSource {
        server: Server,
        all_down: bool,
        categories: Vec<Category>,
        events: Vec<Olympiad>,
        filter_calls: RefCell<Vec<CategoryParam>>,
        fetch_all_calls: Cell<usize>,
        cancel_on_filter: Option<CancellationSource>,
    }

    impl FakeSource {
        fn new(server: Server, categories: Vec<Category>, events: Vec<Olympiad>) -> Self {
            Self {
                server,
                all_down: false,
                categories,
                events,
                filter_calls: RefCell::new(Vec::new()),
                fetch_all_calls: Cell::new(0),
                cancel_on_filter: None,
            }
        }

        fn by_id(&self, id: i64) -> Vec<Olympiad> {
            self.events
                .iter()
                .filter(|e| e.category_id == Some(id))
                .cloned()
                .collect()
        }
    }

    #[async_trait(?Send)]
    impl OlympiadSource for FakeSource {
        async fn filter_by_category(&self, param: &CategoryParam) -> FetchOutcome<Olympiad> {
            self.filter_calls.borrow_mut().push(param.clone());
            if let Some(cancel) = &self.cancel_on_filter {
                cancel.cancel_all();
            }
            match (self.server, param) {
                (Server::Down, _) => FetchOutcome::Failed(FetchFailure::Status(503)),
                (Server::AlwaysEmpty, _) => FetchOutcome::Success(Vec::new()),
                (Server::OnlyCategoryId, CategoryParam::CategoryId(id)) => {
                    FetchOutcome::Success(self.by_id(*id))
                }
                (Server::OnlyCategoryId, _) => FetchOutcome::Success(Vec::new()),
                (Server::Filters, CategoryParam::Slug(slug)) => {
                    match self.categories.iter().find(|c| c.slug == *slug) {
                        Some(c) => FetchOutcome::Success(self.by_id(c.id)),
                        None => FetchOutcome::Success(Vec::new()),
                    }
                }
                (Server::Filters, CategoryParam::Id(id) | CategoryParam::CategoryId(id)) => {
                    FetchOutcome::Success(self.by_id(*id))
                }
            }
        }

        async fn fetch_all(&self) -> FetchOutcome<Olympiad> {
            self.fetch_all_calls.set(self.fetch_all_calls.get() + 1);
            if self.all_down {
                FetchOutcome::Failed(FetchFailure::Transport("connection refused".into()))
            } else {
                FetchOutcome::Success(self.events.clone())
            }
        }
    }

    struct FakeClock {
        now: Cell<DateTime<Utc>>,
    }

    impl FakeClock {
        fn new() -> Self {
            Self {
                now: Cell::new(Utc.timestamp_opt(1_700_000_000, 0).unwrap()),
            }
        }

        fn advance(&self, secs: i64) {
            self.now.set(self.now.get() + Duration::seconds(secs));
        }
    }

    impl Clock for FakeClock {
        fn now(&self) -> DateTime<Utc> {
            self.now.get()
        }
    }

    fn event(id: i64, category_id: i64, title: &str) -> Olympiad {
        let mut o = Olympiad::new(id, title);
        o.category_id = Some(category_id);
        o.slug = format!("event-{}", id);
        o
    }

    fn scenario_categories() -> Vec<Category> {
        vec![Category::new(1, "olimpiady", "Олимпиады")]
    }

    fn scenario_events() -> Vec<Olympiad> {
        vec![event(5, 1, "Test A"), event(6, 2, "Test B")]
    }

    fn ids(events: &[Olympiad]) -> Vec<i64> {
        events.iter().map(|e| e.id).collect()
    }

    #[tokio::test]
    async fn test_local_reconciliation_scenario() {
        let categories = scenario_categories();
        let source = FakeSource::new(Server::Down, categories.clone(), scenario_events());
        let cache = AllEventsCache::for_all_events();
        let clock = FakeClock::new();
        let resolver = CategoryResolver::new(&source, &cache, &clock);

        let result = resolver
            .resolve("olimpiady", &CategorySources::live_only(&categories), &CancellationToken::never())
            .await
            .unwrap();

        assert_eq!(ids(&result.matched_events), vec![5]);
        assert_eq!(result.display_title, "Олимпиады");
        assert_eq!(result.category_id, Some(1));
        assert_eq!(result.step, ResolutionStep::LocalReconciliation);
    }

    #[tokio::test]
    async fn test_failed_categories_gives_slug_title_and_empty_list() {
        let source = FakeSource::new(Server::Down, Vec::new(), scenario_events());
        let cache = AllEventsCache::for_all_events();
        let clock = FakeClock::new();
        let resolver = CategoryResolver::new(&source, &cache, &clock);

        let result = resolver
            .resolve("hakatony", &CategorySources::live_only(&[]), &CancellationToken::never())
            .await
            .unwrap();

        assert!(result.matched_events.is_empty());
        assert_eq!(result.display_title, "Hakatony");
        assert_eq!(result.category_id, None);
        assert_eq!(result.step, ResolutionStep::Unresolved);
        assert_eq!(source.fetch_all_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_unknown_slug_never_returns_everything() {
        let categories = scenario_categories();
        let events = scenario_events();
        for server in [Server::Down, Server::AlwaysEmpty, Server::Filters] {
            let source = FakeSource::new(server, categories.clone(), events.clone());
            let cache = AllEventsCache::for_all_events();
            let clock = FakeClock::new();
            let resolver = CategoryResolver::new(&source, &cache, &clock)
                .with_policy(EmptyResultPolicy::FallThrough);

            let result = resolver
                .resolve("unknown", &CategorySources::live_only(&categories), &CancellationToken::never())
                .await
                .unwrap();

            assert!(result.matched_events.is_empty());
            assert_ne!(result.matched_events, events);
        }
    }

    #[tokio::test]
    async fn test_authoritative_slug_result_skips_fetch_all() {
        let categories = scenario_categories();
        let source = FakeSource::new(Server::Filters, categories.clone(), scenario_events());
        let cache = AllEventsCache::for_all_events();
        let clock = FakeClock::new();
        let resolver = CategoryResolver::new(&source, &cache, &clock);

        let result = resolver
            .resolve("olimpiady", &CategorySources::live_only(&categories), &CancellationToken::never())
            .await
            .unwrap();

        assert_eq!(ids(&result.matched_events), vec![5]);
        assert_eq!(result.step, ResolutionStep::ServerBySlug);
        assert_eq!(source.fetch_all_calls.get(), 0);
        assert_eq!(source.filter_calls.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_id_parameter_tried_after_empty_slug_query() {
        let categories = scenario_categories();
        let source = FakeSource::new(Server::OnlyCategoryId, categories.clone(), scenario_events());
        let cache = AllEventsCache::for_all_events();
        let clock = FakeClock::new();
        let resolver = CategoryResolver::new(&source, &cache, &clock);

        let result = resolver
            .resolve("olimpiady", &CategorySources::live_only(&categories), &CancellationToken::never())
            .await
            .unwrap();

        assert_eq!(ids(&result.matched_events), vec![5]);
        assert_eq!(result.step, ResolutionStep::ServerById);
        assert_eq!(
            *source.filter_calls.borrow(),
            vec![CategoryParam::Slug("olimpiady".into()), CategoryParam::CategoryId(1)]
        );
        assert_eq!(source.fetch_all_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_empty_policy_decides_local_fallback() {
        let categories = scenario_categories();
        let sources = CategorySources::live_only(&categories);
        let clock = FakeClock::new();

        let trusting = FakeSource::new(Server::AlwaysEmpty, categories.clone(), scenario_events());
        let cache = AllEventsCache::for_all_events();
        let result = CategoryResolver::new(&trusting, &cache, &clock)
            .resolve("olimpiady", &sources, &CancellationToken::never())
            .await
            .unwrap();
        assert!(result.matched_events.is_empty());
        assert_eq!(result.step, ResolutionStep::ServerEmpty);
        assert_eq!(trusting.filter_calls.borrow().len(), 3);
        assert_eq!(trusting.fetch_all_calls.get(), 0);

        let falling = FakeSource::new(Server::AlwaysEmpty, categories.clone(), scenario_events());
        let cache = AllEventsCache::for_all_events();
        let result = CategoryResolver::new(&falling, &cache, &clock)
            .with_policy(EmptyResultPolicy::FallThrough)
            .resolve("olimpiady", &sources, &CancellationToken::never())
            .await
            .unwrap();
        assert_eq!(ids(&result.matched_events), vec![5]);
        assert_eq!(result.step, ResolutionStep::LocalReconciliation);
        assert_eq!(falling.fetch_all_calls.get(), 1);
    }

    #[tokio::test]
    async fn test_server_and_local_paths_agree() {
        let categories = vec![
            Category::new(1, "olimpiady", "Олимпиады"),
            Category::new(2, "hakatony", "Хакатоны"),
            Category::new(3, "konkursy", "Конкурсы"),
        ];
        let events = vec![
            event(10, 1, "Физтех"),
            event(11, 2, "Цифровой прорыв"),
            event(12, 1, "Высшая проба"),
            event(13, 2, "HackMIPT"),
        ];
        let sources = CategorySources::live_only(&categories);
        let clock = FakeClock::new();

        for category in &categories {
            let server = FakeSource::new(Server::Filters, categories.clone(), events.clone());
            let local = FakeSource::new(Server::Down, categories.clone(), events.clone());
            let server_cache = AllEventsCache::for_all_events();
            let local_cache = AllEventsCache::for_all_events();

            let via_server = CategoryResolver::new(&server, &server_cache, &clock)
                .with_policy(EmptyResultPolicy::FallThrough)
                .resolve(&category.slug, &sources, &CancellationToken::never())
                .await
                .unwrap();
            let via_local = CategoryResolver::new(&local, &local_cache, &clock)
                .resolve(&category.slug, &sources, &CancellationToken::never())
                .await
                .unwrap();

            assert_eq!(via_server.matched_events, via_local.matched_events, "slug {}", category.slug);
            assert_eq!(via_server.display_title, via_local.display_title);
            assert_eq!(via_server.category_id, via_local.category_id);
        }
    }

    #[tokio::test]
    async fn test_resolve_is_idempotent() {
        let categories = scenario_categories();
        let events = scenario_events();
        let source = FakeSource::new(Server::Down, categories.clone(), events.clone());
        let cache = AllEventsCache::for_all_events();
        let clock = FakeClock::new();
        let resolver = CategoryResolver::new(&source, &cache, &clock);
        let sources = CategorySources::live_only(&categories);

        let first = resolver.resolve("olimpiady", &sources, &CancellationToken::never()).await.unwrap();
        let second = resolver.resolve("olimpiady", &sources, &CancellationToken::never()).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(categories, scenario_categories());
        assert_eq!(source.events, events);
    }

    #[tokio::test]
    async fn test_cache_reused_until_stale() {
        let categories = scenario_categories();
        let source = FakeSource::new(Server::Down, categories.clone(), scenario_events());
        let cache = AllEventsCache::for_all_events();
        let clock = FakeClock::new();
        let resolver = CategoryResolver::new(&source, &cache, &clock);
        let sources = CategorySources::live_only(&categories);

        resolver.resolve("olimpiady", &sources, &CancellationToken::never()).await.unwrap();
        clock.advance(30);
        resolver.resolve("olimpiady", &sources, &CancellationToken::never()).await.unwrap();
        assert_eq!(source.fetch_all_calls.get(), 1);

        clock.advance(ALL_EVENTS_TTL_SECONDS);
        resolver.resolve("olimpiady", &sources, &CancellationToken::never()).await.unwrap();
        assert_eq!(source.fetch_all_calls.get(), 2);
    }

    #[tokio::test]
    async fn test_stale_cache_used_when_fetch_all_fails() {
        let categories = scenario_categories();
        let mut source = FakeSource::new(Server::Down, categories.clone(), Vec::new());
        source.all_down = true;
        let cache = AllEventsCache::for_all_events();
        let clock = FakeClock::new();
        cache.store(scenario_events(), clock.now());
        clock.advance(ALL_EVENTS_TTL_SECONDS * 10);

        let result = CategoryResolver::new(&source, &cache, &clock)
            .resolve("olimpiady", &CategorySources::live_only(&categories), &CancellationToken::never())
            .await
            .unwrap();
        assert_eq!(ids(&result.matched_events), vec![5]);

        cache.invalidate();
        let result = CategoryResolver::new(&source, &cache, &clock)
            .resolve("olimpiady", &CategorySources::live_only(&categories), &CancellationToken::never())
            .await
            .unwrap();
        assert!(result.matched_events.is_empty());
        assert_eq!(result.step, ResolutionStep::Unavailable);
    }

    #[tokio::test]
    async fn test_superseded_run_is_discarded() {
        let categories = scenario_categories();
        let cancellation = CancellationSource::new();
        let mut source = FakeSource::new(Server::Filters, categories.clone(), scenario_events());
        source.cancel_on_filter = Some(cancellation.clone());
        let cache = AllEventsCache::for_all_events();
        let clock = FakeClock::new();
        let resolver = CategoryResolver::new(&source, &cache, &clock);

        let token = cancellation.issue();
        let result = resolver
            .resolve("olimpiady", &CategorySources::live_only(&categories), &token)
            .await;

        assert_eq!(result, Err(Superseded));
        assert_eq!(source.fetch_all_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_legacy_category_string_matches() {
        let categories = scenario_categories();
        let mut by_title = Olympiad::new(20, "Legacy title");
        by_title.category = Some("олимпиады".into());
        let mut by_slug = Olympiad::new(21, "Legacy slug");
        by_slug.category = Some("OLIMPIADY".into());
        let mut other = Olympiad::new(22, "Other");
        other.category = Some("hakatony".into());

        let source = FakeSource::new(Server::Down, categories.clone(), vec![by_title, by_slug, other]);
        let cache = AllEventsCache::for_all_events();
        let clock = FakeClock::new();

        let result = CategoryResolver::new(&source, &cache, &clock)
            .resolve("olimpiady", &CategorySources::live_only(&categories), &CancellationToken::never())
            .await
            .unwrap();
        assert_eq!(ids(&result.matched_events), vec![20, 21]);
    }

    #[tokio::test]
    async fn test_legacy_string_matches_requested_slug_after_title_reconciliation() {
        let live = vec![Category::new(7, "hackathons", "Хакатоны")];
        let seed = vec![Category::new(102, "hakatony", "Хакатоны")];
        let mut legacy = Olympiad::new(30, "Legacy hackathon");
        legacy.category = Some("hakatony".into());
        let mut unrelated = Olympiad::new(31, "Unrelated");
        unrelated.category = Some("konkursy".into());

        let source = FakeSource::new(Server::Down, live.clone(), vec![legacy, unrelated]);
        let cache = AllEventsCache::for_all_events();
        let clock = FakeClock::new();

        let result = CategoryResolver::new(&source, &cache, &clock)
            .resolve("hakatony", &CategorySources::new(&live, &seed), &CancellationToken::never())
            .await
            .unwrap();
        assert_eq!(result.step, ResolutionStep::LocalReconciliation);
        assert_eq!(result.category_id, Some(7));
        assert_eq!(ids(&result.matched_events), vec![30]);
    }

    #[tokio::test]
    async fn test_seed_only_resolution_when_live_list_is_empty() {
        let seed = vec![Category::new(102, "hakatony", "Хакатоны")];
        let mut legacy = Olympiad::new(40, "Seed hackathon");
        legacy.category = Some("Хакатоны".into());
        let mut other = event(41, 999, "Other");
        other.category = Some("olimpiady".into());

        for policy in [EmptyResultPolicy::TrustEmpty, EmptyResultPolicy::FallThrough] {
            let source = FakeSource::new(Server::AlwaysEmpty, Vec::new(), vec![legacy.clone(), other.clone()]);
            let cache = AllEventsCache::for_all_events();
            let clock = FakeClock::new();

            let result = CategoryResolver::new(&source, &cache, &clock)
                .with_policy(policy)
                .resolve("hakatony", &CategorySources::new(&[], &seed), &CancellationToken::never())
                .await
                .unwrap();

            assert_eq!(result.display_title, "Хакатоны");
            assert_eq!(result.category_id, None);
            // без живого id запрашивается только вариант со slug
            assert_eq!(
                *source.filter_calls.borrow(),
                vec![CategoryParam::Slug("hakatony".into())]
            );
            match policy {
                EmptyResultPolicy::TrustEmpty => {
                    assert_eq!(result.step, ResolutionStep::ServerEmpty);
                    assert!(result.matched_events.is_empty());
                    assert_eq!(source.fetch_all_calls.get(), 0);
                }
                EmptyResultPolicy::FallThrough => {
                    assert_eq!(result.step, ResolutionStep::LocalReconciliation);
                    assert_eq!(ids(&result.matched_events), vec![40]);
                }
            }
        }
    }

    #[tokio::test]
    async fn test_load_all_events_prefers_fresh_then_stale_cache() {
        let mut source = FakeSource::new(Server::Down, Vec::new(), scenario_events());
        let cache = AllEventsCache::for_all_events();
        let clock = FakeClock::new();

        assert_eq!(ids(&load_all_events(&source, &cache, &clock).await.unwrap()), vec![5, 6]);
        assert_eq!(ids(&load_all_events(&source, &cache, &clock).await.unwrap()), vec![5, 6]);
        assert_eq!(source.fetch_all_calls.get(), 1);

        clock.advance(ALL_EVENTS_TTL_SECONDS + 1);
        source.all_down = true;
        assert_eq!(ids(&load_all_events(&source, &cache, &clock).await.unwrap()), vec![5, 6]);
        assert_eq!(source.fetch_all_calls.get(), 2);

        let empty_cache = AllEventsCache::for_all_events();
        assert_eq!(load_all_events(&source, &empty_cache, &clock).await, None);
    }

    #[test]
    fn test_seed_reconciled_with_live_by_title() {
        let live = vec![Category::new(7, "hackathons", "Хакатоны")];
        let seed = vec![Category::new(102, "hakatony", "Хакатоны")];

        let resolved = CategorySources::new(&live, &seed).resolve_slug("hakatony").unwrap();
        assert_eq!(resolved.id, Some(7));
        assert_eq!(resolved.seed_id, Some(102));
        assert_eq!(resolved.slug, "hackathons");
        assert_eq!(resolved.requested_slug, "hakatony");

        let seed_only = CategorySources::new(&[], &seed).resolve_slug("hakatony").unwrap();
        assert_eq!(seed_only.id, None);
        assert_eq!(seed_only.title, "Хакатоны");
    }

    #[test]
    fn test_display_title_from_slug() {
        assert_eq!(display_title_from_slug("hakatony"), "Hakatony");
        assert_eq!(display_title_from_slug("it-konkursy"), "It konkursy");
        assert_eq!(
            display_title_from_slug("%D1%85%D0%B0%D0%BA%D0%B0%D1%82%D0%BE%D0%BD%D1%8B"),
            "Хакатоны"
        );
        assert_eq!(display_title_from_slug(""), "");
    }

    #[tokio::test]
    async fn test_search_composes_with_resolution() {
        let categories = scenario_categories();
        let events = vec![
            event(5, 1, "Test A"),
            event(7, 1, "Another test"),
            event(6, 2, "Test B"),
        ];
        let source = FakeSource::new(Server::Filters, categories.clone(), events);
        let cache = AllEventsCache::for_all_events();
        let clock = FakeClock::new();

        let result = CategoryResolver::new(&source, &cache, &clock)
            .resolve("olimpiady", &CategorySources::live_only(&categories), &CancellationToken::never())
            .await
            .unwrap();

        assert_eq!(search_within(&result.matched_events, "test").len(), 2);
        let hit = single_search_hit(&result.matched_events, "Test A");
        assert_eq!(hit.map(|o| o.slug.as_str()), Some("event-5"));
        assert_eq!(result.display_title, "Олимпиады");
        assert_eq!(result.category_id, Some(1));
    }
}
