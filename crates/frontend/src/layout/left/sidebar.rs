use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Clone, Copy, Debug, PartialEq)]
struct MenuItem {
    path: &'static str,
    label: &'static str,
    icon: &'static str,
}

const MENU: &[MenuItem] = &[
    MenuItem { path: "/", label: "Menú", icon: "home" },
    MenuItem { path: "/categoria", label: "Categoría", icon: "category" },
    MenuItem { path: "/producto", label: "Producto", icon: "product" },
    MenuItem { path: "/usuario", label: "Usuario", icon: "user" },
];

fn is_active(item_path: &str, current: &str) -> bool {
    if item_path == "/" {
        current == "/"
    } else {
        current == item_path || current.starts_with(&format!("{item_path}/"))
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="app-sidebar__content">
            <div class="app-sidebar__group">"Principal"</div>
            {MENU
                .iter()
                .map(|item| {
                    let path = item.path;
                    view! {
                        <A href=path attr:class="app-sidebar__link">
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || {
                                    location.pathname.with(|p| is_active(path, p))
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(item.icon)}
                                    <span>{item.label}</span>
                                </div>
                            </div>
                        </A>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/producto"));
        assert!(is_active("/producto", "/producto"));
        assert!(!is_active("/producto", "/productos"));
        assert!(!is_active("/categoria", "/"));
    }
}
