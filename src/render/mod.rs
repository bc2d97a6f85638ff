use serde::Serialize;

use crate::fetcher::FetchError;
use crate::paginator::Page;

/// Configured column labels in display order.
#[derive(Clone, Debug, Serialize)]
pub struct ColumnLabels {
    pub email: String,
    pub forename: String,
    pub surname: String,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct HeaderCell {
    pub key: String,
    pub label: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct TableDocument {
    pub header: Vec<HeaderCell>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Clone, Debug, Serialize)]
pub struct PagerDescriptor {
    pub total_items: usize,
    pub page_size: usize,
    pub current_page: i64,
}

/// What one render call produces: a table plus pager state, or a
/// displayable error message. Never both, never neither.
#[derive(Clone, Debug, Serialize)]
pub enum RenderResult {
    Table {
        table: TableDocument,
        pager: PagerDescriptor,
    },
    Error {
        message: String,
    },
}

impl RenderResult {
    pub fn table(&self) -> Option<&TableDocument> {
        match self {
            RenderResult::Table { table, .. } => Some(table),
            RenderResult::Error { .. } => None,
        }
    }

    pub fn pager(&self) -> Option<&PagerDescriptor> {
        match self {
            RenderResult::Table { pager, .. } => Some(pager),
            RenderResult::Error { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            RenderResult::Table { .. } => None,
            RenderResult::Error { message } => Some(message),
        }
    }
}

/// Builds the table document for one page slice. The header follows the
/// fixed column order (email, forename, surname); each row projects exactly
/// those three fields. The pager descriptor is attached even when the page
/// is empty.
pub fn render_page(page: &Page, labels: &ColumnLabels, pager: PagerDescriptor) -> RenderResult {
    let header = vec![
        HeaderCell {
            key: "email".to_string(),
            label: labels.email.clone(),
        },
        HeaderCell {
            key: "first_name".to_string(),
            label: labels.forename.clone(),
        },
        HeaderCell {
            key: "last_name".to_string(),
            label: labels.surname.clone(),
        },
    ];
    let rows = page
        .items
        .iter()
        .map(|record| {
            vec![
                record.email.clone(),
                record.first_name.clone(),
                record.last_name.clone(),
            ]
        })
        .collect();
    RenderResult::Table {
        table: TableDocument { header, rows },
        pager,
    }
}

/// An error replaces the entire table; no partial results.
pub fn render_error(error: &FetchError) -> RenderResult {
    RenderResult::Error {
        message: error.to_string(),
    }
}
