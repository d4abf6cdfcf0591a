//! Reducer plumbing shared by the management pages.

use std::{cell::RefCell, ops::Deref, rc::Rc};

use thrive_admin_shared::{
    api::ListResource,
    notice::Notice,
    seq::RequestSeq,
    table::{TableAction, TableState},
    workflow::delete_then_refetch,
    PageState,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Reducer wrapper around a shared [`PageState`].
///
/// Async callbacks dispatch actions instead of setting cloned state, so a
/// response that lands after other updates still sees the latest state.
#[derive(PartialEq)]
pub struct PageStore<S>(S);

impl<S> Deref for PageStore<S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.0
    }
}

impl<S: PageState> Reducible for PageStore<S> {
    type Action = S::Action;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        next.apply(action);
        Rc::new(PageStore(next))
    }
}

/// Page-local reducer seeded by `init`.
///
/// # Example
/// ```rust,ignore
/// let table = use_page_state(TableState::<Article>::default);
/// table.dispatch(TableAction::Loading);
/// ```
#[hook]
pub fn use_page_state<S, F>(init: F) -> UseReducerHandle<PageStore<S>>
where
    S: PageState + 'static,
    F: FnOnce() -> S,
{
    use_reducer(move || PageStore(init()))
}

/// Request sequence guard that lives as long as the page.
#[hook]
pub fn use_request_seq() -> Rc<RefCell<RequestSeq>> {
    use_mut_ref(RequestSeq::default)
}

/// Handles of a list-filter-table page.
pub struct ListTable<R>
where
    R: ListResource,
    R::Entity: PartialEq,
{
    /// Table state and its dispatcher.
    pub state: UseReducerHandle<PageStore<TableState<R::Entity>>>,
    /// Fetch the list, filtered when a query is given.
    pub fetch: Callback<Option<R::Query>>,
    /// Delete a confirmed row, notify, then refetch the full list.
    pub delete: Callback<u32>,
}

/// Table state bound to `make()`'s resource. Fetches the unfiltered list on
/// mount. `subject` names the entity in error messages and `deleted` is the
/// success notice after a delete.
#[hook]
pub fn use_list_table<R>(make: fn() -> R, subject: &'static str, deleted: &'static str) -> ListTable<R>
where
    R: ListResource + 'static,
    R::Entity: PartialEq + 'static,
    R::Query: 'static,
{
    let state = use_page_state(TableState::<R::Entity>::default);
    let seq = use_request_seq();

    let fetch = {
        let table = state.dispatcher();
        let seq = seq.clone();
        use_callback((), move |query: Option<R::Query>, _| {
            let table = table.clone();
            let seq = seq.clone();
            let ticket = seq.borrow_mut().begin();
            table.dispatch(TableAction::Loading);
            spawn_local(async move {
                let result = make().list(query.as_ref()).await;
                if !seq.borrow().is_current(ticket) {
                    return;
                }
                match result {
                    Ok(rows) => table.dispatch(TableAction::Loaded(rows)),
                    Err(e) => {
                        web_sys::console::error_1(&format!("Failed to fetch {subject}: {e}").into());
                        table.dispatch(TableAction::Failed(format!("获取{subject}列表失败：{e}")));
                    },
                }
            });
        })
    };

    let delete = {
        let table = state.dispatcher();
        let seq = seq.clone();
        use_callback((), move |id: u32, _| {
            let table = table.clone();
            let seq = seq.clone();
            table.dispatch(TableAction::ConfirmDelete);
            let ticket = seq.borrow_mut().begin();
            spawn_local(async move {
                match delete_then_refetch(&make(), id).await {
                    Ok(refetched) => {
                        table.dispatch(TableAction::Notify(Notice::success(deleted)));
                        if !seq.borrow().is_current(ticket) {
                            return;
                        }
                        match refetched {
                            Ok(rows) => table.dispatch(TableAction::Loaded(rows)),
                            Err(e) => table.dispatch(TableAction::Failed(format!(
                                "获取{subject}列表失败：{e}"
                            ))),
                        }
                    },
                    Err(e) => {
                        web_sys::console::error_1(&format!("Failed to delete {subject} {id}: {e}").into());
                        table.dispatch(TableAction::Failed(format!("删除{subject}失败：{e}")));
                    },
                }
            });
        })
    };

    {
        let fetch = fetch.clone();
        use_effect_with((), move |_| {
            fetch.emit(None);
            || ()
        });
    }

    ListTable {
        state,
        fetch,
        delete,
    }
}
