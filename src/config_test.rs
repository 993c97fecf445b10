use super::*;

fn table() -> RouteTable {
    RouteTable::new(
        vec![
            ("home".to_owned(), "pages/home.html".to_owned()),
            ("doctors".to_owned(), "pages/doctors.html".to_owned()),
            ("404".to_owned(), "pages/404.html".to_owned()),
        ],
        "404",
    )
}

#[test]
fn resolve_known_key() {
    assert_eq!(table().resolve("doctors"), "pages/doctors.html");
}

#[test]
fn resolve_unknown_key_falls_back() {
    let t = table();
    assert_eq!(t.resolve("pharmacy"), "pages/404.html");
    assert_eq!(t.resolve(""), "pages/404.html");
}

#[test]
fn fallback_key_is_in_table() {
    let t = table();
    assert!(t.contains(t.fallback_key()));
}

#[test]
fn defaults_cover_all_navigation_routes() {
    let config = SiteConfig::defaults();
    for key in ["home", "about", "services", "doctors", "contact"] {
        assert!(config.routes.contains(key), "missing route {key}");
    }
    assert_eq!(config.routes.resolve("doctors"), "pages/doctors.html");
}

#[test]
fn meta_table_falls_back_to_default() {
    let config = SiteConfig::defaults();
    let known = config.meta.get("about");
    assert!(known.title.contains("About"));

    let unknown = config.meta.get("no-such-page");
    assert_eq!(unknown, config.meta.get("definitely-not-a-page"));
    assert!(!unknown.title.is_empty());
}

#[test]
fn canonical_urls_carry_the_fragment() {
    let config = SiteConfig::defaults();
    assert!(config.meta.get("doctors").canonical.ends_with("#/doctors"));
    assert!(config.meta.get("home").canonical.ends_with('/'));
}
