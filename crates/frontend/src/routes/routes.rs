use crate::domain::a001_category::ui::page::CategoryPage;
use crate::domain::a002_olympiad::ui::details::OlympiadDetails;
use crate::layout::footer::footer::Footer;
use crate::layout::header::header::Header;
use crate::system::favorites::ui::page::FavoritesPage;
use crate::system::pages::documents::DocumentsPage;
use crate::system::pages::feedback::FeedbackPage;
use crate::system::pages::home::HomePage;
use crate::system::pages::not_found::NotFound;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <div class="app-layout">
                <div class="gradient-bg" aria-hidden="true"></div>
                <Header />
                <main class="app-main">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/category/:slug") view=CategoryPage />
                        <Route path=path!("/olympiad/:slug") view=OlympiadDetails />
                        <Route path=path!("/favorites") view=FavoritesPage />
                        <Route path=path!("/documents") view=DocumentsPage />
                        <Route path=path!("/feedback") view=FeedbackPage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}
