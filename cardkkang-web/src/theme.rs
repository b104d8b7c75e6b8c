// Theme class handling on the document root

use cardkkang_game::{StorageKeys, Theme, ThemePreference};

use crate::dom;
use crate::storage::WebStorage;

pub const DARK_CLASS: &str = "dark";

/// Saved preference backed by `localStorage`.
#[must_use]
pub fn preference() -> ThemePreference<WebStorage> {
    ThemePreference::new(WebStorage::new(), &StorageKeys::default())
}

/// Add or remove the `dark` class on `<html>`.
pub fn apply(theme: Theme) {
    let Some(root) = dom::root_element() else {
        return;
    };
    let classes = root.class_list();
    let result = if theme.is_dark() {
        classes.add_1(DARK_CLASS)
    } else {
        classes.remove_1(DARK_CLASS)
    };
    if let Err(err) = result {
        log::warn!("could not apply theme {theme}: {}", dom::js_error_message(&err));
    }
}

/// Flip the theme, persist it, and restyle the page.
pub fn toggle(current: Theme) -> Theme {
    let next = preference().toggle(current);
    apply(next);
    log::info!("theme switched to {next}");
    next
}
