use serde::Serialize;
use strum_macros::Display;
use utoipa::ToSchema;

use crate::query::{QueryParams, CAPTURE_PAGE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, ToSchema)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PageLinkKind {
    First,
    Previous,
    Next,
    Last,
}

impl PageLinkKind {
    /// Which side of the current page the link sits on.
    pub fn direction(&self) -> &'static str {
        match self {
            PageLinkKind::First | PageLinkKind::Previous => "previous",
            PageLinkKind::Next | PageLinkKind::Last => "next",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PageLink {
    pub kind: PageLinkKind,
    pub page: u32,
    /// Relative href (`?...`) keeping every other query parameter.
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Pagination {
    pub current_page: u32,
    pub last_page: u32,
    pub before: Vec<PageLink>,
    pub after: Vec<PageLink>,
}

impl Pagination {
    pub fn new(current_page: u32, last_page: u32, query: &QueryParams) -> Self {
        let current_page = current_page.max(1);
        let link = |kind, page: u32| PageLink {
            kind,
            page,
            href: format!("?{}", query.with(CAPTURE_PAGE, page.to_string()).to_query_string()),
        };

        let mut before = Vec::new();
        if current_page > 1 {
            before.push(link(PageLinkKind::First, 1));
            before.push(link(PageLinkKind::Previous, current_page - 1));
        }

        let mut after = Vec::new();
        if current_page < last_page {
            after.push(link(PageLinkKind::Next, current_page + 1));
            after.push(link(PageLinkKind::Last, last_page));
        }

        Pagination {
            current_page,
            last_page: last_page.max(1),
            before,
            after,
        }
    }

    pub fn links(&self) -> impl Iterator<Item = &PageLink> {
        self.before.iter().chain(self.after.iter())
    }
}
