use log::{debug, error};
use thiserror::Error;

use crate::config::ListingConfig;
use crate::fetcher::{self, FetchError};
use crate::filter;
use crate::pager::{Pager, RequestPager};
use crate::paginator;
use crate::records::UserRecord;
use crate::render::{self, ColumnLabels, PagerDescriptor, RenderResult};

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("failed to build HTTP client: {source}")]
    HttpClientBuild {
        #[source]
        source: reqwest::Error,
    },
}

/// The users listing widget. One instance holds the endpoint configuration
/// and a reusable HTTP client; each render call is otherwise stateless, so
/// concurrent calls need no coordination.
#[derive(Clone, Debug)]
pub struct ListingWidget {
    config: ListingConfig,
    client: reqwest::blocking::Client,
}

impl ListingWidget {
    pub fn new(config: ListingConfig) -> Result<Self, WidgetError> {
        let client = fetcher::build_client(config.timeout_seconds)
            .map_err(|e| WidgetError::HttpClientBuild { source: e })?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ListingConfig {
        &self.config
    }

    /// Runs the fetch, filter, paginate, render pipeline against the pager
    /// collaborator. Always returns a displayable document; an upstream
    /// failure becomes an error document instead of a fault.
    pub fn render(&self, pager: &mut dyn Pager) -> RenderResult {
        let records = match self.fetch_records() {
            Ok(records) => records,
            Err(e) => {
                error!("users listing fetch failed: {e}");
                return render::render_error(&e);
            }
        };

        let filtered = filter::filter_by_first_name(records, &self.config.exclude_first_name);
        let page_size = self.config.page_size();

        // Bidirectional pager contract: report totals in, read the current
        // index out. The index is used verbatim; out-of-range values fall
        // through to an empty page.
        pager.create_pager(filtered.len(), page_size);
        let current_page = pager.find_page();

        let page = paginator::paginate(&filtered, page_size, current_page);
        debug!(
            "rendering page {current_page}: {} of {} records",
            page.items.len(),
            page.total_items
        );

        let labels = ColumnLabels {
            email: self.config.email_label.clone(),
            forename: self.config.forename_label.clone(),
            surname: self.config.surname_label.clone(),
        };
        let descriptor = PagerDescriptor {
            total_items: page.total_items,
            page_size,
            current_page,
        };
        render::render_page(&page, &labels, descriptor)
    }

    /// Renders a fixed page index for hosts without a pager collaborator.
    pub fn render_at(&self, page_index: i64) -> RenderResult {
        let mut pager = RequestPager::new(page_index);
        self.render(&mut pager)
    }

    fn fetch_records(&self) -> Result<Vec<UserRecord>, FetchError> {
        let raw = fetcher::fetch_raw(&self.client, &self.config.api_url)?;
        Ok(raw.iter().map(UserRecord::from_value).collect())
    }
}
