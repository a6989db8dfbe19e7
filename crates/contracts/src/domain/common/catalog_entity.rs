/// Трейт для записей каталога, приходящих из удалённого API
///
/// Определяет идентичность записи и метаданные коллекции,
/// из которых строятся пути запросов и подписи в UI.
pub trait CatalogEntity {
    // ============================================================================
    // Методы экземпляра (данные конкретной записи)
    // ============================================================================

    /// Числовой идентификатор записи (ключ идентичности)
    fn id(&self) -> i64;

    /// URL-ключ записи. Не гарантированно стабилен между источниками
    fn slug(&self) -> &str;

    /// Отображаемое название
    fn title(&self) -> &str;

    // ============================================================================
    // Метаданные коллекции (статические данные)
    // ============================================================================

    /// Индекс сущности в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции в API (например, "categories")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число)
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число)
    fn list_name() -> &'static str;

    // ============================================================================
    // Методы с реализацией по умолчанию
    // ============================================================================

    /// Полное имя сущности (например, "a001_categories")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// Путь коллекции в REST API (например, "/api/v1/categories")
    fn api_path() -> String {
        format!("/api/v1/{}", Self::collection_name())
    }
}
