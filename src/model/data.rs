//! Data Model
//!
//! The records currently on screen and their server paging window. Record
//! sets are replaced wholesale on every fetch; there is no local cache or
//! merge logic.

use crate::logic::paging::PageWindow;
use crate::model::types::Record;
use crate::resources::Resource;

#[derive(Debug, Clone)]
pub struct DataModel {
    /// Resource whose list is showing
    pub resource: Resource,

    /// Current page of records as returned by the server
    pub records: Vec<Record>,

    /// Server paging window (total comes from the list envelope)
    pub window: PageWindow,

    /// A list fetch is in flight
    pub loading: bool,
}

impl DataModel {
    pub fn new(resource: Resource, page_size: u32) -> Self {
        Self {
            resource,
            records: Vec::new(),
            window: PageWindow::new(page_size),
            loading: false,
        }
    }

    /// Swap in a freshly fetched page
    pub fn replace_page(&mut self, records: Vec<Record>, page: u32, limit: u32, total: u64) {
        self.records = records;
        self.window.page = page.max(1);
        self.window.limit = limit.max(1);
        self.window.total = total;
        self.loading = false;
    }
}
