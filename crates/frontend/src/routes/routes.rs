use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_product::ui::list::ProductList;
use crate::layout::Shell;
use crate::system::pages::home::HomePage;
use crate::system::pages::not_found::NotFound;
use crate::system::pages::users::UsersPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/categoria") view=CategoryList />
                    <Route path=path!("/producto") view=ProductList />
                    <Route path=path!("/usuario") view=UsersPage />
                </Routes>
            </Shell>
        </Router>
    }
}
