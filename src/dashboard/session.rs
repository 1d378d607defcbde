//! Single-task event loop driving a [`DashboardController`].
//!
//! ```text
//! DashboardEvent (mpsc)
//!     → controller transition
//!     → SearchInput: reschedule debouncer, no fetch
//!     → ChangePage / debounced term: fetch if the query moved
//! fetch completion
//!     → controller.finish_fetch (stale generations dropped)
//! ```
//!
//! Starting a fetch drops any fetch still in flight, as does a search edit
//! that moves the page back to 1. When the event channel
//! closes, a pending search edit is discarded and an in-flight fetch is
//! allowed to finish before the controller is handed back.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::catalog::{Product, ProductPage};
use crate::dashboard::api::{ClientError, ProductApi};
use crate::dashboard::controller::{DashboardController, FetchTicket};
use crate::dashboard::debounce::Debouncer;
use crate::dashboard::form::ProductForm;

/// User interactions on the dashboard page.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    SearchInput(String),
    ChangePage(u32),
    OpenCreate,
    OpenEdit(Product),
    CancelModal,
    Submit(ProductForm),
    Delete(String),
}

type FetchOutcome = (FetchTicket, Result<ProductPage, ClientError>);
type InFlight = Pin<Box<dyn Future<Output = FetchOutcome> + Send>>;

pub struct DashboardSession<A> {
    controller: DashboardController<A>,
    debouncer: Debouncer<String>,
    in_flight: Option<InFlight>,
}

impl<A> DashboardSession<A>
where
    A: ProductApi + Clone + 'static,
{
    pub fn new(controller: DashboardController<A>, debounce: Duration) -> Self {
        Self {
            controller,
            debouncer: Debouncer::new(debounce),
            in_flight: None,
        }
    }

    /// Run until `events` closes, then return the controller.
    pub async fn run(mut self, mut events: mpsc::Receiver<DashboardEvent>) -> DashboardController<A> {
        tracing::debug!(debounce = ?self.debouncer.delay(), "Dashboard session started");
        self.start_fetch();

        loop {
            let sync = tokio::select! {
                event = events.recv() => match event {
                    Some(event) => self.handle(event).await,
                    None => break,
                },
                term = self.debouncer.ready() => {
                    self.controller.apply_debounced_search(term);
                    true
                }
                (ticket, result) = next_outcome(&mut self.in_flight) => {
                    self.in_flight = None;
                    self.controller.finish_fetch(ticket, result);
                    false
                }
            };

            if sync && self.controller.needs_sync() {
                self.start_fetch();
            }
        }

        if let Some(fetch) = self.in_flight.take() {
            let (ticket, result) = fetch.await;
            self.controller.finish_fetch(ticket, result);
        }

        tracing::debug!("Dashboard session stopped");
        self.controller
    }

    /// Apply one event. Returns whether a fetch may be due.
    async fn handle(&mut self, event: DashboardEvent) -> bool {
        match event {
            DashboardEvent::SearchInput(text) => {
                if self.controller.search_input(text.clone()) {
                    self.in_flight = None;
                }
                self.debouncer.schedule(text);
                false
            }
            DashboardEvent::ChangePage(page) => self.controller.change_page(page),
            DashboardEvent::OpenCreate => {
                self.controller.open_create();
                false
            }
            DashboardEvent::OpenEdit(product) => {
                self.controller.open_edit(product);
                false
            }
            DashboardEvent::CancelModal => {
                self.controller.cancel_modal();
                false
            }
            DashboardEvent::Submit(form) => {
                self.controller.submit_form(form).await;
                false
            }
            DashboardEvent::Delete(product_id) => {
                self.controller.delete_product(&product_id);
                false
            }
        }
    }

    fn start_fetch(&mut self) {
        let ticket = self.controller.begin_fetch();
        let api = self.controller.api().clone();

        self.in_flight = Some(Box::pin(async move {
            let result = api.list_products(&ticket.query).await;
            (ticket, result)
        }));
    }
}

async fn next_outcome(in_flight: &mut Option<InFlight>) -> FetchOutcome {
    match in_flight {
        Some(fetch) => fetch.await,
        None => std::future::pending().await,
    }
}
