//! Dashboard page controller.
//!
//! Owns the page state, the current page of products, the loading flag,
//! the modal and the notification queue. Every fetch carries a generation
//! number; a completion from an older generation is discarded so a slow,
//! superseded response can never overwrite newer data.

use crate::catalog::{ListQuery, Product, ProductPage, ProductUpdate};
use crate::dashboard::api::{ClientError, ProductApi};
use crate::dashboard::form::ProductForm;
use crate::dashboard::state::{ModalState, Notice, PageState};

pub const LOAD_FAILED: &str = "Failed to load product data";
pub const SAVE_FAILED: &str = "Failed to save product";
pub const PRODUCT_ADDED: &str = "Product added successfully";
pub const PRODUCT_UPDATED: &str = "Product updated successfully";

/// A started fetch: the query sent and the generation it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub query: ListQuery,
}

#[derive(Debug)]
pub struct DashboardController<A> {
    api: A,
    page: PageState,
    products: Vec<Product>,
    loading: bool,
    modal: ModalState,
    form: ProductForm,
    notices: Vec<Notice>,
    debounced_search: String,
    generation: u64,
    last_query: Option<ListQuery>,
}

impl<A: ProductApi> DashboardController<A> {
    pub fn new(api: A, page_size: u32) -> Self {
        Self {
            api,
            page: PageState::new(page_size),
            products: Vec::new(),
            loading: true,
            modal: ModalState::Closed,
            form: ProductForm::default(),
            notices: Vec::new(),
            debounced_search: String::new(),
            generation: 0,
            last_query: None,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn page_state(&self) -> &PageState {
        &self.page
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn debounced_search(&self) -> &str {
        &self.debounced_search
    }

    /// The query a fetch issued now would send.
    pub fn effective_query(&self) -> ListQuery {
        ListQuery::new(self.page.page, self.page.limit, self.debounced_search.clone())
    }

    /// Whether page or debounced term moved since the last fetch started.
    pub fn needs_sync(&self) -> bool {
        self.last_query.as_ref() != Some(&self.effective_query())
    }

    /// Start a fetch: bumps the generation and raises the loading flag.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;

        let query = self.effective_query();
        self.last_query = Some(query.clone());

        tracing::debug!(
            generation = self.generation,
            page = query.page,
            limit = query.limit,
            search = %query.search,
            "Fetching products"
        );

        FetchTicket {
            generation: self.generation,
            query,
        }
    }

    /// Apply a fetch result. Returns `false` if the ticket was superseded.
    pub fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<ProductPage, ClientError>,
    ) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                generation = ticket.generation,
                current = self.generation,
                "Discarding superseded product page"
            );
            return false;
        }

        match result {
            Ok(page) => {
                self.products = page.data;
                self.page.apply(&page.pagination);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch product data");
                self.notify(Notice::Error(LOAD_FAILED.to_string()));
            }
        }

        self.loading = false;
        true
    }

    /// Fetch the current page with the debounced search term.
    pub async fn fetch_products(&mut self) {
        let ticket = self.begin_fetch();
        let result = self.api.list_products(&ticket.query).await;
        self.finish_fetch(ticket, result);
    }

    /// Echo a search box edit. The page resets to 1; no fetch happens here.
    ///
    /// A fetch still in flight for another page is invalidated so its
    /// pagination cannot undo the reset. Returns whether that happened.
    pub fn search_input(&mut self, text: impl Into<String>) -> bool {
        self.page.set_search(text);

        let stale = self.loading
            && self
                .last_query
                .as_ref()
                .is_some_and(|query| query.page != self.page.page);
        if stale {
            self.generation += 1;
            self.loading = false;
            tracing::debug!(
                generation = self.generation,
                "Search edit invalidated in-flight fetch"
            );
        }
        stale
    }

    pub fn apply_debounced_search(&mut self, term: String) {
        self.debounced_search = term;
    }

    /// Move the pagination control. Returns whether the page changed.
    pub fn change_page(&mut self, page: u32) -> bool {
        self.page.set_page(page)
    }

    pub fn open_create(&mut self) {
        self.form = ProductForm::default();
        self.modal = ModalState::Creating;
    }

    pub fn open_edit(&mut self, product: Product) {
        self.form = ProductForm::from_product(&product);
        self.modal = ModalState::Editing(product);
    }

    pub fn cancel_modal(&mut self) {
        self.modal = ModalState::Closed;
    }

    /// Submit the modal form: update when editing, create otherwise.
    ///
    /// On success the modal closes and the list is fetched again. Returns
    /// whether the record was saved.
    pub async fn submit_form(&mut self, form: ProductForm) -> bool {
        self.form = form;

        if !self.modal.is_open() {
            tracing::warn!("Form submitted while the modal is closed");
            return false;
        }

        let input = match self.form.validate() {
            Ok(input) => input,
            Err(e) => {
                self.notify(Notice::Error(e.to_string()));
                return false;
            }
        };

        self.loading = true;

        let outcome = match self.modal.editing() {
            Some(product) => {
                let update = ProductUpdate::new(product.product_id.clone(), input);
                self.api
                    .update_product(&update)
                    .await
                    .map(|_| PRODUCT_UPDATED)
            }
            None => self
                .api
                .create_product(&input)
                .await
                .map(|_| PRODUCT_ADDED),
        };

        let saved = match outcome {
            Ok(message) => {
                self.modal = ModalState::Closed;
                self.notify(Notice::Success(message.to_string()));
                self.fetch_products().await;
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to save product");
                self.notify(Notice::Error(SAVE_FAILED.to_string()));
                false
            }
        };

        self.loading = false;
        saved
    }

    /// Demo delete: only a notification, the backend is not called.
    pub fn delete_product(&mut self, product_id: &str) {
        self.notify(Notice::Success(format!(
            "(Demo) Successfully Deleted Product: {product_id}"
        )));
    }

    fn notify(&mut self, notice: Notice) {
        match &notice {
            Notice::Success(message) => tracing::info!(%message, "Notice"),
            Notice::Error(message) => tracing::warn!(%message, "Notice"),
        }
        self.notices.push(notice);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::catalog::{Pagination, ProductInput};
    use reqwest::StatusCode;
    use rust_decimal::Decimal;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum Call {
        List(ListQuery),
        Get(String),
        Create(ProductInput),
        Update(ProductUpdate),
    }

    /// Records calls and answers from canned responses.
    #[derive(Debug, Clone, Default)]
    pub(crate) struct FakeApi {
        pub calls: Arc<Mutex<Vec<Call>>>,
        pub fail_list: Arc<Mutex<bool>>,
        pub fail_save: Arc<Mutex<bool>>,
        pub total: u64,
        pub list_delay: Duration,
    }

    impl FakeApi {
        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        pub fn list_calls(&self) -> Vec<ListQuery> {
            self.calls()
                .into_iter()
                .filter_map(|c| match c {
                    Call::List(q) => Some(q),
                    _ => None,
                })
                .collect()
        }

        fn record(&self, call: Call) {
            self.calls.lock().unwrap().push(call);
        }

        fn failure() -> ClientError {
            ClientError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed".into(),
            }
        }
    }

    pub(crate) fn product(id: &str, title: &str) -> Product {
        Product {
            product_id: id.into(),
            product_title: title.into(),
            product_price: Decimal::new(1999, 2),
            product_description: None,
            product_image: None,
            product_category: None,
            created_timestamp: String::new(),
            updated_timestamp: String::new(),
        }
    }

    impl ProductApi for FakeApi {
        async fn list_products(&self, query: &ListQuery) -> Result<ProductPage, ClientError> {
            self.record(Call::List(query.clone()));
            if !self.list_delay.is_zero() {
                tokio::time::sleep(self.list_delay).await;
            }
            if *self.fail_list.lock().unwrap() {
                return Err(Self::failure());
            }
            let total_pages = self.total.div_ceil(u64::from(query.limit)).max(1) as u32;
            Ok(ProductPage {
                data: vec![product(&format!("p-{}", query.page), &query.search)],
                pagination: Pagination {
                    page: query.page,
                    limit: query.limit,
                    total: self.total,
                    total_pages,
                },
            })
        }

        async fn get_product(&self, product_id: &str) -> Result<Product, ClientError> {
            self.record(Call::Get(product_id.to_string()));
            Ok(product(product_id, "Fetched"))
        }

        async fn create_product(&self, input: &ProductInput) -> Result<Value, ClientError> {
            self.record(Call::Create(input.clone()));
            if *self.fail_save.lock().unwrap() {
                return Err(Self::failure());
            }
            Ok(json!({ "product_id": "new" }))
        }

        async fn update_product(&self, update: &ProductUpdate) -> Result<Value, ClientError> {
            self.record(Call::Update(update.clone()));
            if *self.fail_save.lock().unwrap() {
                return Err(Self::failure());
            }
            Ok(json!({ "product_id": update.product_id }))
        }
    }

    fn valid_form(title: &str) -> ProductForm {
        ProductForm {
            title: title.into(),
            price: "12.50".into(),
            ..ProductForm::default()
        }
    }

    #[tokio::test]
    async fn test_fetch_applies_pagination_but_keeps_search() {
        let api = FakeApi {
            total: 23,
            ..FakeApi::default()
        };
        let mut controller = DashboardController::new(api.clone(), 10);
        controller.change_page(2);
        controller.search_input("de");

        // search edit reset the page; move it again before fetching
        controller.change_page(2);
        controller.fetch_products().await;

        assert!(!controller.is_loading());
        assert_eq!(controller.products().len(), 1);
        assert_eq!(controller.page_state().page, 2);
        assert_eq!(controller.page_state().total_pages, 3);
        assert_eq!(controller.page_state().search, "de");
        assert_eq!(api.list_calls(), vec![ListQuery::new(2, 10, "")]);
    }

    #[tokio::test]
    async fn test_search_edit_invalidates_fetch_for_other_page() {
        let api = FakeApi {
            total: 40,
            ..FakeApi::default()
        };
        let mut controller = DashboardController::new(api.clone(), 10);
        controller.fetch_products().await;

        controller.change_page(3);
        let ticket = controller.begin_fetch();
        assert!(controller.search_input("lamp"));
        assert!(!controller.is_loading());

        let result = api.list_products(&ticket.query).await;
        assert!(!controller.finish_fetch(ticket, result));
        assert_eq!(controller.page_state().page, 1);

        controller.apply_debounced_search("lamp".into());
        assert!(controller.needs_sync());
        assert_eq!(controller.effective_query(), ListQuery::new(1, 10, "lamp"));
    }

    #[tokio::test]
    async fn test_search_edit_keeps_fetch_for_first_page() {
        let mut controller = DashboardController::new(FakeApi::default(), 10);
        let ticket = controller.begin_fetch();

        assert!(!controller.search_input("lamp"));
        let result = controller.api().list_products(&ticket.query).await;
        assert!(controller.finish_fetch(ticket, result));
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_products() {
        let api = FakeApi::default();
        let mut controller = DashboardController::new(api.clone(), 10);
        controller.fetch_products().await;
        let before = controller.products().to_vec();

        *api.fail_list.lock().unwrap() = true;
        controller.change_page(2);
        controller.fetch_products().await;

        assert_eq!(controller.products(), &before[..]);
        assert!(!controller.is_loading());
        assert_eq!(controller.notices(), &[Notice::Error(LOAD_FAILED.into())]);
    }

    #[tokio::test]
    async fn test_stale_fetch_is_discarded() {
        let mut controller = DashboardController::new(FakeApi::default(), 10);

        let first = controller.begin_fetch();
        controller.change_page(2);
        let second = controller.begin_fetch();

        let stale = Ok(ProductPage {
            data: vec![product("old", "old")],
            pagination: Pagination {
                page: 1,
                limit: 10,
                total: 1,
                total_pages: 1,
            },
        });
        assert!(!controller.finish_fetch(first, stale));
        assert!(controller.is_loading());
        assert!(controller.products().is_empty());

        let fresh = Ok(ProductPage {
            data: vec![product("new", "new")],
            pagination: Pagination {
                page: 2,
                limit: 10,
                total: 11,
                total_pages: 2,
            },
        });
        assert!(controller.finish_fetch(second, fresh));
        assert_eq!(controller.products()[0].product_id, "new");
        assert!(!controller.is_loading());
    }

    #[tokio::test]
    async fn test_create_refreshes_once() {
        let api = FakeApi::default();
        let mut controller = DashboardController::new(api.clone(), 10);
        controller.apply_debounced_search("lamp".into());
        controller.open_create();

        assert!(controller.submit_form(valid_form("Lamp")).await);

        assert!(!controller.modal().is_open());
        assert!(!controller.is_loading());
        assert_eq!(controller.notices(), &[Notice::Success(PRODUCT_ADDED.into())]);

        let calls = api.calls();
        assert_eq!(calls.len(), 2);
        assert!(matches!(&calls[0], Call::Create(input) if input.product_title == "Lamp"));
        assert_eq!(calls[1], Call::List(ListQuery::new(1, 10, "lamp")));
    }

    #[tokio::test]
    async fn test_edit_sends_update_with_id() {
        let api = FakeApi::default();
        let mut controller = DashboardController::new(api.clone(), 10);
        controller.open_edit(product("p-7", "Chair"));
        assert_eq!(controller.form().title, "Chair");
        assert_eq!(controller.modal().title(), Some("Edit Product"));

        assert!(controller.submit_form(valid_form("Armchair")).await);

        let calls = api.calls();
        match &calls[0] {
            Call::Update(update) => {
                assert_eq!(update.product_id, "p-7");
                assert_eq!(update.fields.product_title, "Armchair");
            }
            other => panic!("unexpected call {other:?}"),
        }
        assert_eq!(api.list_calls().len(), 1);
        assert_eq!(controller.notices(), &[Notice::Success(PRODUCT_UPDATED.into())]);
    }

    #[tokio::test]
    async fn test_save_failure_keeps_modal_open() {
        let api = FakeApi::default();
        *api.fail_save.lock().unwrap() = true;
        let mut controller = DashboardController::new(api.clone(), 10);
        controller.open_create();

        assert!(!controller.submit_form(valid_form("Lamp")).await);

        assert!(controller.modal().is_open());
        assert!(!controller.is_loading());
        assert_eq!(controller.notices(), &[Notice::Error(SAVE_FAILED.into())]);
        assert!(api.list_calls().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_form_never_calls_api() {
        let api = FakeApi::default();
        let mut controller = DashboardController::new(api.clone(), 10);
        controller.open_create();

        assert!(!controller.submit_form(ProductForm::default()).await);

        assert!(api.calls().is_empty());
        assert_eq!(
            controller.notices(),
            &[Notice::Error("Please enter Product Title!".into())]
        );
    }

    #[test]
    fn test_delete_is_demo_only() {
        let api = FakeApi::default();
        let mut controller = DashboardController::new(api.clone(), 10);
        controller.delete_product("p-3");

        assert!(api.calls().is_empty());
        assert_eq!(
            controller.take_notices(),
            vec![Notice::Success("(Demo) Successfully Deleted Product: p-3".into())]
        );
        assert!(controller.notices().is_empty());
    }

    #[test]
    fn test_needs_sync_tracks_query() {
        let mut controller = DashboardController::new(FakeApi::default(), 10);
        assert!(controller.needs_sync());

        controller.begin_fetch();
        assert!(!controller.needs_sync());

        controller.search_input("x");
        assert!(!controller.needs_sync());

        controller.apply_debounced_search("x".into());
        assert!(controller.needs_sync());
    }
}
