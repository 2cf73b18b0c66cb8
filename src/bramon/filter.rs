use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::query::{
    QueryParams, CAPTURE_DATE, CAPTURE_LIMIT, CAPTURE_PAGE, CAPTURE_RADIANT, STATION,
};

/// Filter and paging for a captures request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureFilter {
    pub captured_at_date: Option<NaiveDate>,
    pub station_ids: BTreeSet<u64>,
    pub radiant_class: Option<String>,
    pub page: u32,
    pub limit: u32,
}

impl CaptureFilter {
    pub fn new(limit: u32) -> Self {
        CaptureFilter {
            captured_at_date: None,
            station_ids: BTreeSet::new(),
            radiant_class: None,
            page: 1,
            limit: limit.max(1),
        }
    }

    /// Build a filter from the gallery form's query parameters. Values that
    /// don't parse are dropped rather than rejected.
    pub fn from_query(query: &QueryParams, default_limit: u32) -> Self {
        let mut filter = CaptureFilter::new(default_limit);

        filter.captured_at_date = query.get(CAPTURE_DATE).and_then(|s| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|e| log::debug!("Ignoring capture_date {:?}: {}", s, e))
                .ok()
        });

        filter.station_ids = query
            .get_all(STATION)
            .filter_map(|s| s.trim().parse().ok())
            .collect();

        filter.radiant_class = query.get(CAPTURE_RADIANT).map(String::from);

        if let Some(page) = query.get(CAPTURE_PAGE).and_then(parse_positive) {
            filter.page = page;
        }
        if let Some(limit) = query.get(CAPTURE_LIMIT).and_then(parse_positive) {
            filter.limit = limit;
        }

        filter
    }

    /// Query parameters for `operator/captures`.
    pub fn to_api_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("page", self.page.to_string()), ("limit", self.limit.to_string())];

        if let Some(date) = self.captured_at_date {
            params.push(("filter[captured_at]", date.format("%Y-%m-%d").to_string()));
        }
        for id in &self.station_ids {
            params.push(("filter[station][]", id.to_string()));
        }
        if let Some(class) = &self.radiant_class {
            params.push(("filter[class]", class.clone()));
        }

        params
    }
}

fn parse_positive(s: &str) -> Option<u32> {
    s.parse::<u32>().ok().filter(|n| *n >= 1)
}
