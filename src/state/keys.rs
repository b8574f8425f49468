#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

use crate::net::types::ApiKey;
use crate::state::request_gen::RequestGen;

/// API keys aggregated across the user's orders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApiKeysState {
    pub keys: Vec<ApiKey>,
    pub loading: bool,
    generation: RequestGen,
}

impl ApiKeysState {
    pub fn begin(&mut self) -> RequestGen {
        self.loading = true;
        self.generation.begin()
    }

    pub fn apply(&mut self, ticket: RequestGen, keys: Vec<ApiKey>) -> bool {
        if !self.generation.is_current(ticket) {
            return false;
        }
        self.keys = keys;
        self.loading = false;
        true
    }

    pub fn fail(&mut self, ticket: RequestGen) -> bool {
        if !self.generation.is_current(ticket) {
            return false;
        }
        self.loading = false;
        true
    }

    pub fn clear(&mut self) {
        self.keys.clear();
        self.loading = false;
        self.generation.begin();
    }
}
