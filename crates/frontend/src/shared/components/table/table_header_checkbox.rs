//! Select-all checkbox for a table header
//!
//! ```rust,ignore
//! <TableHeaderCheckbox
//!     ids=visible_ids
//!     selected=selected
//!     on_change=Callback::new(move |check_all: bool| { /* ... */ })
//! />
//! ```

use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq)]
enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

fn state_of(ids: &[String], selected: &HashSet<String>) -> CheckboxState {
    let count = ids.iter().filter(|id| selected.contains(*id)).count();
    if count == 0 {
        CheckboxState::Unchecked
    } else if count == ids.len() {
        CheckboxState::Checked
    } else {
        CheckboxState::Indeterminate
    }
}

/// Checked when every visible row is selected, indeterminate when some are.
#[component]
pub fn TableHeaderCheckbox(
    /// Ids of the rows currently shown
    #[prop(into)]
    ids: Signal<Vec<String>>,
    #[prop(into)]
    selected: Signal<HashSet<String>>,
    /// `true` = select all shown rows, `false` = clear them
    on_change: Callback<bool>,
) -> impl IntoView {
    let state = Signal::derive(move || ids.with(|ids| selected.with(|sel| state_of(ids, sel))));
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move |_| {
        let indeterminate = state.get() == CheckboxState::Indeterminate;
        if let Some(input) = checkbox_ref.get() {
            if let Some(el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                el.set_indeterminate(indeterminate);
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || state.get() == CheckboxState::Checked
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_of() {
        let ids = vec!["1".to_string(), "2".to_string()];
        let mut selected = HashSet::new();
        assert_eq!(state_of(&ids, &selected), CheckboxState::Unchecked);
        selected.insert("1".to_string());
        assert_eq!(state_of(&ids, &selected), CheckboxState::Indeterminate);
        selected.insert("2".to_string());
        assert_eq!(state_of(&ids, &selected), CheckboxState::Checked);
        assert_eq!(state_of(&[], &selected), CheckboxState::Unchecked);
    }
}
