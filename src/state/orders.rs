#[cfg(test)]
#[path = "orders_test.rs"]
mod orders_test;

use crate::net::types::Order;
use crate::state::request_gen::RequestGen;

/// Order history state: the user's order list plus the currently
/// opened detail. List and detail fetch independently, so each carries
/// its own generation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrdersState {
    pub list: Vec<Order>,
    pub list_loading: bool,
    pub detail: Option<Order>,
    pub detail_loading: bool,
    list_gen: RequestGen,
    detail_gen: RequestGen,
}

impl OrdersState {
    pub fn begin_list(&mut self) -> RequestGen {
        self.list_loading = true;
        self.list_gen.begin()
    }

    pub fn apply_list(&mut self, ticket: RequestGen, list: Vec<Order>) -> bool {
        if !self.list_gen.is_current(ticket) {
            return false;
        }
        self.list = list;
        self.list_loading = false;
        true
    }

    pub fn fail_list(&mut self, ticket: RequestGen) -> bool {
        if !self.list_gen.is_current(ticket) {
            return false;
        }
        self.list_loading = false;
        true
    }

    /// Start a detail fetch; the stale detail is dropped immediately
    /// so a route change never shows the previous order.
    pub fn begin_detail(&mut self) -> RequestGen {
        self.detail = None;
        self.detail_loading = true;
        self.detail_gen.begin()
    }

    pub fn apply_detail(&mut self, ticket: RequestGen, order: Order) -> bool {
        if !self.detail_gen.is_current(ticket) {
            return false;
        }
        self.detail = Some(order);
        self.detail_loading = false;
        true
    }

    pub fn fail_detail(&mut self, ticket: RequestGen) -> bool {
        if !self.detail_gen.is_current(ticket) {
            return false;
        }
        self.detail_loading = false;
        true
    }

    /// Drop loaded data on logout.
    pub fn clear(&mut self) {
        self.list.clear();
        self.detail = None;
        self.list_loading = false;
        self.detail_loading = false;
        self.list_gen.begin();
        self.detail_gen.begin();
    }
}
