//! Site configuration: the route table, per-page document metadata, and
//! contact details. Everything is built once at startup and handed to the
//! components through context, so there are no module-level mutable tables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Route key for the landing page, used when the fragment is empty.
pub const HOME_ROUTE: &str = "home";

/// Route key whose page hosts the contact form component.
pub const CONTACT_ROUTE: &str = "contact";

/// Static mapping from route keys to relative partial paths.
///
/// Unknown keys resolve to the fallback entry, which must itself be present
/// in the table.
#[derive(Clone, Debug)]
pub struct RouteTable {
    entries: Vec<(String, String)>,
    fallback: String,
}

impl RouteTable {
    pub fn new(entries: Vec<(String, String)>, fallback: impl Into<String>) -> Self {
        let fallback = fallback.into();
        debug_assert!(
            entries.iter().any(|(key, _)| *key == fallback),
            "fallback route must have a table entry"
        );
        Self { entries, fallback }
    }

    /// Partial path for `key`, or the fallback partial for unknown keys.
    pub fn resolve(&self, key: &str) -> &str {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .or_else(|| self.entries.iter().find(|(k, _)| *k == self.fallback))
            .map(|(_, path)| path.as_str())
            .unwrap_or_default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn fallback_key(&self) -> &str {
        &self.fallback
    }
}

/// Document metadata for one page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub canonical: String,
}

/// Route key to [`PageMeta`] mapping with a default record for keys that
/// have no entry of their own.
#[derive(Clone, Debug)]
pub struct MetaTable {
    entries: Vec<(String, PageMeta)>,
    default: PageMeta,
}

impl MetaTable {
    pub fn new(entries: Vec<(String, PageMeta)>, default: PageMeta) -> Self {
        Self { entries, default }
    }

    pub fn get(&self, key: &str) -> &PageMeta {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map_or(&self.default, |(_, meta)| meta)
    }
}

/// Where contact-form submissions go and what the clinic answers on.
#[derive(Clone, Debug)]
pub struct ContactConfig {
    pub mailbox: String,
    pub subject_prefix: String,
    pub phone_display: String,
}

/// Everything the shell needs, constructed once in `App`.
#[derive(Clone, Debug)]
pub struct SiteConfig {
    pub routes: RouteTable,
    pub meta: MetaTable,
    pub contact: ContactConfig,
}

impl SiteConfig {
    /// Production configuration for the Svitanok site.
    pub fn defaults() -> Self {
        const BASE: &str = "https://svitanokmed.com";

        let routes = RouteTable::new(
            vec![
                route(HOME_ROUTE, "pages/home.html"),
                route("about", "pages/about.html"),
                route("services", "pages/services.html"),
                route("doctors", "pages/doctors.html"),
                route(CONTACT_ROUTE, "pages/contact.html"),
                route("404", "pages/404.html"),
            ],
            "404",
        );

        let meta = MetaTable::new(
            vec![
                (
                    HOME_ROUTE.to_owned(),
                    page_meta(
                        "Svitanok Medical Center",
                        "Family medicine, diagnostics, and outpatient care in the heart of the city.",
                        format!("{BASE}/"),
                    ),
                ),
                (
                    "about".to_owned(),
                    page_meta(
                        "About us | Svitanok Medical Center",
                        "Our history, our values, and the standards behind our care.",
                        format!("{BASE}/#/about"),
                    ),
                ),
                (
                    "services".to_owned(),
                    page_meta(
                        "Services | Svitanok Medical Center",
                        "Consultations, laboratory diagnostics, ultrasound, and preventive checkups.",
                        format!("{BASE}/#/services"),
                    ),
                ),
                (
                    "doctors".to_owned(),
                    page_meta(
                        "Our doctors | Svitanok Medical Center",
                        "Meet the physicians and specialists of Svitanok Medical Center.",
                        format!("{BASE}/#/doctors"),
                    ),
                ),
                (
                    CONTACT_ROUTE.to_owned(),
                    page_meta(
                        "Contact | Svitanok Medical Center",
                        "Book a visit, ask a question, or find our address and opening hours.",
                        format!("{BASE}/#/contact"),
                    ),
                ),
            ],
            page_meta(
                "Svitanok Medical Center",
                "Svitanok Medical Center: modern outpatient care for the whole family.",
                format!("{BASE}/"),
            ),
        );

        let contact = ContactConfig {
            mailbox: "reception@svitanokmed.com".to_owned(),
            subject_prefix: "Website inquiry".to_owned(),
            phone_display: "+380 44 123 45 67".to_owned(),
        };

        Self {
            routes,
            meta,
            contact,
        }
    }
}

fn route(key: &str, path: &str) -> (String, String) {
    (key.to_owned(), path.to_owned())
}

fn page_meta(title: &str, description: &str, canonical: String) -> PageMeta {
    PageMeta {
        title: title.to_owned(),
        description: description.to_owned(),
        canonical,
    }
}
