//! Root wrapper of every routed page.
//!
//! Sets `id` (`"{entity}--{category}"`, e.g. `"a002_product--list"`) and
//! `data-page-category` on the root element so a page can be found from the
//! DOM inspector.

use leptos::prelude::*;

/// Table of records with create/edit/delete.
pub const PAGE_CAT_LIST: &str = "list";

/// Static informational page.
pub const PAGE_CAT_SYSTEM: &str = "system";

#[component]
pub fn PageFrame(
    page_id: &'static str,
    /// `PAGE_CAT_LIST` or `PAGE_CAT_SYSTEM`.
    category: &'static str,
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let base_class = match category {
        PAGE_CAT_SYSTEM => "page page--system",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div id=page_id class=full_class data-page-category=category>
            {children()}
        </div>
    }
}
