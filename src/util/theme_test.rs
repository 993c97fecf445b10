use super::*;

#[test]
fn default_theme_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn stored_value_round_trips() {
    assert_eq!(Theme::from_stored(Theme::Dark.as_str()), Theme::Dark);
    assert_eq!(Theme::from_stored(Theme::Light.as_str()), Theme::Light);
}

#[test]
fn unknown_stored_value_falls_back_to_light() {
    assert_eq!(Theme::from_stored("solarized"), Theme::Light);
    assert_eq!(Theme::from_stored(""), Theme::Light);
}

#[test]
fn toggling_twice_returns_to_the_original() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

#[test]
fn glyph_and_favicon_differ_per_theme() {
    assert_ne!(Theme::Light.toggle_glyph(), Theme::Dark.toggle_glyph());
    assert_ne!(Theme::Light.favicon(), Theme::Dark.favicon());
}
