use super::*;

#[test]
fn theme_cycles_light_dark_system() {
    let mut ui = UiState { theme: Theme::Light, lang: Language::En };
    ui.cycle_theme();
    assert_eq!(ui.theme, Theme::Dark);
    ui.cycle_theme();
    assert_eq!(ui.theme, Theme::System);
    ui.cycle_theme();
    assert_eq!(ui.theme, Theme::Light);
}

#[test]
fn theme_persistence_round_trips() {
    for theme in [Theme::Light, Theme::Dark, Theme::System] {
        assert_eq!(Theme::from_str_or_default(theme.as_str()), theme);
    }
    assert_eq!(Theme::from_str_or_default("purple"), Theme::System);
}

#[test]
fn language_toggles_and_round_trips() {
    let mut ui = UiState::default();
    assert_eq!(ui.lang, Language::En);
    ui.toggle_lang();
    assert_eq!(ui.lang, Language::Vi);
    ui.toggle_lang();
    assert_eq!(ui.lang, Language::En);

    assert_eq!(Language::from_str_or_default("vi"), Language::Vi);
    assert_eq!(Language::from_str_or_default("fr"), Language::En);
}
