//! Admin directory controller
//!
//! Loads the employee list and, on selection, one employee's full
//! record. Each render replaces the target container entirely; errors
//! render as an in-container state rather than propagating. Detail
//! loads carry a generation counter so a stale response (an earlier
//! click resolving after a later one) is dropped and the latest-clicked
//! employee always wins.

use crate::api::DirectoryApi;
use crate::view::{DetailRow, DirectoryView, ListRow};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::warn;

/// Placeholder row text for an empty directory.
pub const NO_EMPLOYEES_TEXT: &str = "No employees found";
/// Error state text for the list container.
pub const LIST_ERROR_TEXT: &str = "Could not load employees.";
/// Error state text for the detail container.
pub const DETAIL_ERROR_TEXT: &str = "Could not load employee details.";

pub struct DirectoryController<A, V> {
    api: A,
    view: Arc<V>,
    detail_generation: AtomicU64,
}

impl<A, V> DirectoryController<A, V>
where
    A: DirectoryApi,
    V: DirectoryView,
{
    pub fn new(api: A, view: Arc<V>) -> Self {
        Self {
            api,
            view,
            detail_generation: AtomicU64::new(0),
        }
    }

    /// Fetch and render the employee list. An empty list renders a
    /// single placeholder row.
    pub async fn load_employees(&self) {
        match self.api.employees().await {
            Ok(list) if list.is_empty() => self.view.render_empty(NO_EMPLOYEES_TEXT),
            Ok(list) => {
                let rows: Vec<ListRow> = list
                    .into_iter()
                    .map(|e| ListRow {
                        id: e.id,
                        name: e.name,
                        email: e.email,
                    })
                    .collect();
                self.view.render_employees(&rows);
            }
            Err(e) => {
                warn!("failed to load employees: {e}");
                self.view.render_list_error(LIST_ERROR_TEXT);
            }
        }
    }

    /// Fetch and render one employee's record as the fixed-schema
    /// table, with `"-"` for every absent value.
    pub async fn load_detail(&self, id: i64) {
        let generation = self.detail_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let result = self.api.employee(id).await;

        // a later click superseded this load while it was in flight
        if self.detail_generation.load(Ordering::SeqCst) != generation {
            return;
        }

        match result {
            Ok(detail) => {
                let rows: Vec<DetailRow> = detail
                    .display_rows()
                    .into_iter()
                    .map(|(label, value)| DetailRow { label, value })
                    .collect();
                self.view.render_detail(&rows);
            }
            Err(e) => {
                warn!(id, "failed to load employee detail: {e}");
                self.view.render_detail_error(DETAIL_ERROR_TEXT);
            }
        }
    }
}
