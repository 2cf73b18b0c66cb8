//! Request query strings as an ordered multimap.
//!
//! Filter forms submit `station[]` once per checked station, which a plain
//! key/value deserializer would collapse, so the raw pairs are kept in order.

pub const CAPTURE_DATE: &str = "capture_date";
pub const CAPTURE_RADIANT: &str = "capture_radiant";
pub const CAPTURE_PAGE: &str = "capture_page";
pub const CAPTURE_LIMIT: &str = "capture_limit";
pub const STATION: &str = "station[]";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parse a raw (still percent-encoded) query string, without the leading `?`.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        QueryParams {
            pairs: url::form_urlencoded::parse(raw.as_bytes())
                .into_owned()
                .collect(),
        }
    }

    /// First value of `key`, if present and not blank.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// All values of a multi-value key. `station` and `station[]` are the same key.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        let bare = key.strip_suffix("[]").unwrap_or(key);
        self.pairs
            .iter()
            .filter(move |(k, _)| k.strip_suffix("[]").unwrap_or(k.as_str()) == bare)
            .map(|(_, v)| v.as_str())
    }

    /// Copy of these params with `key` replaced by a single `value`, appended last.
    pub fn with(&self, key: &str, value: impl Into<String>) -> Self {
        let mut pairs: Vec<_> = self
            .pairs
            .iter()
            .filter(|(k, _)| k != key)
            .cloned()
            .collect();
        pairs.push((key.to_string(), value.into()));
        QueryParams { pairs }
    }

    /// Percent-encoded form, without the leading `?`.
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_repeated_station_values() {
        let query = QueryParams::parse("station%5B%5D=5&station%5B%5D=7&capture_date=2021-08-12");
        let stations: Vec<_> = query.get_all(STATION).collect();
        assert_eq!(stations, vec!["5", "7"]);
        assert_eq!(query.get(CAPTURE_DATE), Some("2021-08-12"));
    }

    #[test]
    fn bare_station_key_is_accepted() {
        let query = QueryParams::parse("?station=3&station[]=4");
        let stations: Vec<_> = query.get_all(STATION).collect();
        assert_eq!(stations, vec!["3", "4"]);
    }

    #[test]
    fn blank_values_read_as_missing() {
        let query = QueryParams::parse("capture_radiant=&capture_date=%20");
        assert_eq!(query.get(CAPTURE_RADIANT), None);
        assert_eq!(query.get(CAPTURE_DATE), None);
    }

    #[test]
    fn with_overrides_single_key_and_keeps_the_rest() {
        let query = QueryParams::parse("station[]=5&capture_page=2&capture_radiant=PER");
        let next = query.with(CAPTURE_PAGE, "3");
        assert_eq!(
            next.to_query_string(),
            "station%5B%5D=5&capture_radiant=PER&capture_page=3"
        );
        // original untouched
        assert_eq!(query.get(CAPTURE_PAGE), Some("2"));
    }
}
