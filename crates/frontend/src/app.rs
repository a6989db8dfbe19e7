use crate::routes::routes::AppRoutes;
use crate::shared::catalog_context::CatalogContext;
use crate::system::auth::context::AuthProvider;
use crate::system::favorites::context::FavoritesProvider;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Shared catalog data: categories and the all-events cache.
    let catalog = CatalogContext::new();
    catalog.load_categories();
    provide_context(catalog);

    view! {
        <ConfigProvider>
            <AuthProvider>
                <FavoritesProvider>
                    <AppRoutes />
                </FavoritesProvider>
            </AuthProvider>
        </ConfigProvider>
    }
}
