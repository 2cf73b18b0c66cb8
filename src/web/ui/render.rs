//! Fragment renderers behind the UI routes. Each takes the request's query
//! parameters explicitly and returns an HTML fragment.

use askama::Template;

use crate::bramon::{BramonClient, CaptureFilter, Station};
use crate::gallery::{CapturePage, PageLink, PageLinkKind};
use crate::query::{QueryParams, CAPTURE_DATE, CAPTURE_RADIANT, STATION};
use crate::radiants::RadiantCatalog;
use crate::web::config::{Config, Labels};

use super::templates::{
    CaptureGalleryTemplate, EntryView, LinkView, RadiantOption, StationFilterTemplate,
    StationOption,
};

/// Station checkboxes plus date and radiant controls, pre-filled from `query`.
pub fn render_station_filter(
    stations: &[Station],
    radiants: &RadiantCatalog,
    query: &QueryParams,
    labels: &Labels,
) -> askama::Result<String> {
    station_filter(stations, radiants, query, labels, false).render()
}

/// Fetch the stations and render the filter form. When the API can't be
/// reached the form is still rendered, without stations.
pub async fn render_station_form(
    client: &BramonClient,
    radiants: &RadiantCatalog,
    query: &QueryParams,
    labels: &Labels,
) -> askama::Result<String> {
    match client.fetch_stations().await {
        Ok(stations) => render_station_filter(&stations, radiants, query, labels),
        Err(e) => {
            log::warn!("Failed to fetch stations: {}", e);
            station_filter(&[], radiants, query, labels, true).render()
        }
    }
}

fn station_filter<'a>(
    stations: &[Station],
    radiants: &RadiantCatalog,
    query: &'a QueryParams,
    labels: &'a Labels,
    unavailable: bool,
) -> StationFilterTemplate<'a> {
    let checked: Vec<u64> = query
        .get_all(STATION)
        .filter_map(|s| s.trim().parse().ok())
        .collect();
    let selected_radiant = query.get(CAPTURE_RADIANT);

    StationFilterTemplate {
        stations: stations
            .iter()
            .map(|s| StationOption {
                id: s.id,
                name: s.name.clone(),
                checked: checked.contains(&s.id),
            })
            .collect(),
        radiants: radiants
            .iter()
            .map(|r| RadiantOption {
                code: r.code.clone(),
                name: r.name.clone(),
                selected: selected_radiant == Some(r.code.as_str()),
            })
            .collect(),
        capture_date: query.get(CAPTURE_DATE).unwrap_or_default(),
        unavailable,
        labels,
    }
}

/// Gallery list and pagination for an already shaped page.
pub fn render_capture_page(page: &CapturePage, labels: &Labels) -> askama::Result<String> {
    let link_view = |link: &PageLink| LinkView {
        direction: link.kind.direction(),
        kind: link.kind.to_string(),
        page: link.page,
        href: link.href.clone(),
        text: match link.kind {
            PageLinkKind::First => labels.first.clone(),
            PageLinkKind::Previous => "<".to_string(),
            PageLinkKind::Next => ">".to_string(),
            PageLinkKind::Last => labels.last.clone(),
        },
    };

    CaptureGalleryTemplate {
        entries: page
            .entries
            .iter()
            .map(|e| EntryView {
                thumbnail_url: &e.thumbnail_url,
                full_url: &e.full_url,
                filename: &e.filename,
                classification: e.classification.as_deref(),
                station: &e.station,
                captured_at: &e.captured_at,
            })
            .collect(),
        before: page.pagination.before.iter().map(link_view).collect(),
        after: page.pagination.after.iter().map(link_view).collect(),
        current_page: page.pagination.current_page,
        unavailable: page.unavailable,
        labels,
    }
    .render()
}

/// Fetch the captures selected by `query` and render the gallery. Upstream
/// failures render an empty first page with an unavailable notice.
pub async fn render_captures(
    client: &BramonClient,
    query: &QueryParams,
    config: &Config,
) -> askama::Result<String> {
    let filter = CaptureFilter::from_query(query, config.gallery.page_limit);
    let page = CapturePage::from_result(client.fetch_captures(&filter).await, query);
    render_capture_page(&page, &config.labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bramon::{parse_captured_at, ApiError, Capture, CaptureFile, CaptureId, PageResult};

    fn stations() -> Vec<Station> {
        vec![
            Station {
                id: 5,
                name: "CAP1 Capivari".to_string(),
            },
            Station {
                id: 7,
                name: "TLN2 Tatui".to_string(),
            },
        ]
    }

    fn capture(id: u64, class: Option<&str>) -> Capture {
        let name = format!("M{:03}T.jpg", id);
        Capture {
            id: CaptureId::Number(id),
            class: class.map(String::from),
            captured_at: parse_captured_at("2021-08-12 03:21:45").unwrap(),
            station: stations()[0].clone(),
            files: vec![CaptureFile {
                url: format!("https://cdn.example/{}", name),
                filename: name,
            }],
        }
    }

    #[test]
    fn station_is_checked_only_when_requested() {
        let radiants = RadiantCatalog::default();
        let labels = Labels::default();
        let query = QueryParams::parse("station[]=5");

        let html = render_station_filter(&stations(), &radiants, &query, &labels).unwrap();
        assert!(html.contains(r#"value="5" checked="checked""#));
        assert!(!html.contains(r#"value="7" checked="checked""#));

        // id 5 missing from the list: nothing is checked
        let html = render_station_filter(&stations()[1..], &radiants, &query, &labels).unwrap();
        assert!(!html.contains("checked"));
        assert!(!html.contains(r#"value="5""#));
    }

    #[test]
    fn radiant_options_follow_catalog_order_and_selection() {
        let radiants = RadiantCatalog::parse("QUA:Quadrantids\nPER:Perseids");
        let query = QueryParams::parse("capture_radiant=PER&capture_date=2021-08-12");
        let html =
            render_station_filter(&stations(), &radiants, &query, &Labels::default()).unwrap();

        let qua = html.find("QUA - Quadrantids").unwrap();
        let per = html.find("PER - Perseids").unwrap();
        assert!(qua < per);
        assert!(html.contains(r#"<option value="PER" selected="selected">"#));
        assert!(html.contains(r#"<option value="QUA">"#));
        assert!(html.contains(r#"value="2021-08-12""#));
    }

    #[test]
    fn station_names_are_escaped() {
        let evil = vec![Station {
            id: 1,
            name: "<script>alert(1)</script>".to_string(),
        }];
        let html = render_station_filter(
            &evil,
            &RadiantCatalog::default(),
            &QueryParams::default(),
            &Labels::default(),
        )
        .unwrap();
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn classification_or_placeholder() {
        let result = Ok(PageResult {
            items: vec![capture(1, None), capture(2, Some("sporadic"))],
            current_page: 1,
            last_page: 1,
        });
        let page = CapturePage::from_result(result, &QueryParams::default());
        let html = render_capture_page(&page, &Labels::default()).unwrap();

        assert!(html.contains(r#"<span class="bramon-unclassified">Unclassified</span>"#));
        assert!(html.contains(r#"<span class="bramon-class">sporadic</span>"#));
        assert!(html.contains("12/08/2021 03:21:45"));
        assert!(html.contains("M002P.jpg"));
        assert!(html.contains(r#"data-lightbox="captures""#));
    }

    #[test]
    fn pagination_links_render_for_middle_page() {
        let result = Ok(PageResult {
            items: vec![capture(1, None)],
            current_page: 3,
            last_page: 5,
        });
        let page = CapturePage::from_result(result, &QueryParams::parse("capture_page=3"));
        let html = render_capture_page(&page, &Labels::default()).unwrap();

        for n in [1, 2, 4, 5] {
            assert!(html.contains(&format!(r#"data-page="{}""#, n)));
        }
        assert!(!html.contains(r#"data-page="3""#));
        assert!(html.contains(r#"<span aria-current="page" class="page-numbers current">3</span>"#));
        assert!(html.contains(">First</a>"));
        assert!(html.contains(">Last</a>"));
    }

    #[test]
    fn unavailable_page_shows_notice_and_no_links() {
        let err = ApiError::Status {
            status: reqwest::StatusCode::BAD_GATEWAY,
            body: String::new(),
        };
        let page = CapturePage::from_result(Err(err), &QueryParams::parse("capture_page=2"));
        let html = render_capture_page(&page, &Labels::default()).unwrap();

        assert!(html.contains("bramon-unavailable"));
        assert!(!html.contains("data-page"));
        assert!(!html.contains("<li"));
        assert!(html.contains(r#"class="page-numbers current">1</span>"#));
    }
}
