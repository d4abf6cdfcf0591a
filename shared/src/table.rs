//! State of the list-filter-table pages (articles, comments).

use crate::{PageState, notice::Notice};

/// Rows per table page.
pub const TABLE_PAGE_SIZE: usize = 8;

/// Chip colours, picked by the chip's position in its list.
pub const CHIP_COLORS: [&str; 5] = ["", "#2db7f5", "#87d068", "#f50", "#108ee9"];

/// Colour of the chip at `index`; positions past the palette get none.
pub fn chip_color(index: usize) -> &'static str {
    CHIP_COLORS.get(index).copied().unwrap_or("")
}

/// Table page state.
#[derive(Debug, Clone, PartialEq)]
pub struct TableState<T> {
    /// Last fetched rows, in server order.
    pub items: Vec<T>,
    /// A fetch or mutation is in flight.
    pub loading: bool,
    /// Current page, 1-based.
    pub page: usize,
    /// Row awaiting delete confirmation.
    pub pending_delete: Option<u32>,
    /// Row shown in the detail modal.
    pub detail: Option<T>,
    /// Latest notice.
    pub notice: Option<Notice>,
}

impl<T> Default for TableState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            page: 1,
            pending_delete: None,
            detail: None,
            notice: None,
        }
    }
}

/// Events applied to a [`TableState`].
#[derive(Debug, Clone, PartialEq)]
pub enum TableAction<T> {
    /// A request started.
    Loading,
    /// Rows arrived.
    Loaded(Vec<T>),
    /// A request failed.
    Failed(String),
    /// Ask for confirmation before deleting `id`.
    RequestDelete(u32),
    /// Confirmation dismissed.
    CancelDelete,
    /// Confirmation accepted; the delete call is about to be issued.
    ConfirmDelete,
    /// Open the detail modal.
    ShowDetail(T),
    /// Close the detail modal.
    CloseDetail,
    /// Jump to a page.
    SetPage(usize),
    /// Show a notice.
    Notify(Notice),
    /// Hide the notice.
    DismissNotice,
}

impl<T: Clone> TableState<T> {
    /// Number of pages, at least one.
    pub fn total_pages(&self) -> usize {
        total_pages(self.items.len(), TABLE_PAGE_SIZE)
    }

    /// Rows of the current page.
    pub fn visible(&self) -> &[T] {
        page_slice(&self.items, self.page, TABLE_PAGE_SIZE)
    }
}

impl<T: Clone + PartialEq> PageState for TableState<T> {
    type Action = TableAction<T>;

    fn apply(&mut self, action: Self::Action) {
        match action {
            TableAction::Loading => self.loading = true,
            TableAction::Loaded(items) => {
                self.items = items;
                self.loading = false;
                self.page = self.page.clamp(1, self.total_pages());
            },
            TableAction::Failed(message) => {
                self.loading = false;
                self.notice = Some(Notice::error(message));
            },
            TableAction::RequestDelete(id) => self.pending_delete = Some(id),
            TableAction::CancelDelete => self.pending_delete = None,
            TableAction::ConfirmDelete => {
                self.pending_delete = None;
                self.loading = true;
            },
            TableAction::ShowDetail(item) => self.detail = Some(item),
            TableAction::CloseDetail => self.detail = None,
            TableAction::SetPage(page) => self.page = page.clamp(1, self.total_pages()),
            TableAction::Notify(notice) => self.notice = Some(notice),
            TableAction::DismissNotice => self.notice = None,
        }
    }
}

/// Number of pages needed for `len` rows, at least one.
pub fn total_pages(len: usize, per_page: usize) -> usize {
    let per_page = per_page.max(1);
    len.div_ceil(per_page).max(1)
}

/// Rows of 1-based `page`; out-of-range pages are clamped.
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    if items.is_empty() {
        return items;
    }
    let per_page = per_page.max(1);
    let page = page.clamp(1, total_pages(items.len(), per_page));
    let start = per_page * (page - 1);
    let end = usize::min(start + per_page, items.len());
    &items[start..end]
}
