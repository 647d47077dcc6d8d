//! First-visit marketing attribution. The three UTM parameters from the
//! entry URL are persisted under fixed keys so conversion tracking can credit
//! the originating campaign later.

pub const SOURCE_KEY: &str = "utm_source";
pub const MEDIUM_KEY: &str = "utm_medium";
pub const CAMPAIGN_KEY: &str = "utm_campaign";

/// Writer for the captured attribution record. The page backs this with
/// localStorage; tests back it with a plain map.
pub trait AttributionStore {
    fn write(&mut self, key: &str, value: &str);
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attribution {
    pub source: Option<String>,
    pub medium: Option<String>,
    pub campaign: Option<String>,
}

impl Attribution {
    /// Parses the entry query string (`?utm_source=google&...`). Parameters
    /// with a blank value count as absent.
    pub fn from_query(query: &str) -> Self {
        let mut attribution = Self::default();
        for pair in query.trim_start_matches('?').split('&') {
            let (key, value) = match pair.split_once('=') {
                Some(kv) => kv,
                None => (pair, ""),
            };
            let value = decode_component(value);
            if value.is_empty() {
                continue;
            }
            match key {
                SOURCE_KEY => attribution.source = Some(value),
                MEDIUM_KEY => attribution.medium = Some(value),
                CAMPAIGN_KEY => attribution.campaign = Some(value),
                _ => {}
            }
        }
        attribution
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_none() && self.medium.is_none() && self.campaign.is_none()
    }

    /// Persists the full record, blank-filling absent fields. When no
    /// parameter was present nothing is written, so an earlier record
    /// survives the visit untouched.
    pub fn persist(&self, store: &mut impl AttributionStore) {
        if self.is_empty() {
            return;
        }
        store.write(SOURCE_KEY, self.source.as_deref().unwrap_or(""));
        store.write(MEDIUM_KEY, self.medium.as_deref().unwrap_or(""));
        store.write(CAMPAIGN_KEY, self.campaign.as_deref().unwrap_or(""));
    }
}

/// Runs the whole capture: parse the entry query, persist if anything was
/// there. Called once per page load.
pub fn capture(query: &str, store: &mut impl AttributionStore) {
    Attribution::from_query(query).persist(store);
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

/// localStorage-backed store. Opening returns `None` when storage is
/// unavailable and writes are best effort; losing attribution must never
/// break the page.
pub struct LocalAttributionStore {
    storage: web_sys::Storage,
}

impl LocalAttributionStore {
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        Some(Self { storage })
    }
}

impl AttributionStore for LocalAttributionStore {
    fn write(&mut self, key: &str, value: &str) {
        let _ = self.storage.set_item(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeStore {
        records: HashMap<String, String>,
    }

    impl AttributionStore for FakeStore {
        fn write(&mut self, key: &str, value: &str) {
            self.records.insert(key.to_string(), value.to_string());
        }
    }

    fn record<'a>(store: &'a FakeStore, key: &str) -> Option<&'a str> {
        store.records.get(key).map(String::as_str)
    }

    #[test]
    fn single_parameter_writes_the_full_record() {
        let mut store = FakeStore::default();
        capture("?utm_source=google", &mut store);

        assert_eq!(record(&store, SOURCE_KEY), Some("google"));
        assert_eq!(record(&store, MEDIUM_KEY), Some(""));
        assert_eq!(record(&store, CAMPAIGN_KEY), Some(""));
    }

    #[test]
    fn no_parameters_leaves_prior_record_untouched() {
        let mut store = FakeStore::default();
        store.write(SOURCE_KEY, "newsletter");
        store.write(MEDIUM_KEY, "email");
        store.write(CAMPAIGN_KEY, "spring");

        capture("", &mut store);
        capture("?ref=partner&gclid=abc123", &mut store);

        assert_eq!(record(&store, SOURCE_KEY), Some("newsletter"));
        assert_eq!(record(&store, MEDIUM_KEY), Some("email"));
        assert_eq!(record(&store, CAMPAIGN_KEY), Some("spring"));
    }

    #[test]
    fn blank_valued_parameter_counts_as_absent() {
        let mut store = FakeStore::default();
        capture("?utm_source=&utm_medium=", &mut store);
        assert!(store.records.is_empty());
    }

    #[test]
    fn later_capture_overwrites_the_whole_record() {
        let mut store = FakeStore::default();
        capture("?utm_source=google&utm_medium=cpc&utm_campaign=launch", &mut store);
        capture("?utm_medium=social", &mut store);

        assert_eq!(record(&store, SOURCE_KEY), Some(""));
        assert_eq!(record(&store, MEDIUM_KEY), Some("social"));
        assert_eq!(record(&store, CAMPAIGN_KEY), Some(""));
    }

    #[test]
    fn values_are_url_decoded() {
        let parsed =
            Attribution::from_query("?utm_campaign=summer+sale%21&utm_source=ad%20network");
        assert_eq!(parsed.campaign.as_deref(), Some("summer sale!"));
        assert_eq!(parsed.source.as_deref(), Some("ad network"));
        assert_eq!(parsed.medium, None);
    }
}
