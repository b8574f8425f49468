//! Theme and language application.
//!
//! Applies the `.dark` class and the `lang` attribute to the `<html>`
//! element. `System` resolves against the OS color-scheme preference
//! at application time.

use crate::state::ui::{Language, Theme};

/// Whether the OS currently prefers a dark color scheme.
fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .is_some_and(|mq| mq.matches())
}

/// Apply or remove the `.dark` class on the document element.
pub fn apply(theme: Theme) {
    let dark = match theme {
        Theme::Dark => true,
        Theme::Light => false,
        Theme::System => system_prefers_dark(),
    };

    if let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let class_list = el.class_list();
        if dark {
            let _ = class_list.add_1("dark");
        } else {
            let _ = class_list.remove_1("dark");
        }
    }
}

/// Set the `lang` attribute on the document element.
pub fn apply_lang(lang: Language) {
    if let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = el.set_attribute("lang", lang.as_str());
    }
}
