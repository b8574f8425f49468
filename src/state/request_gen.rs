//! Request-generation tickets for fetch-backed state.
//!
//! Overlapping fetches for the same state are not cancelled; instead
//! each fetch target carries a monotonic generation. `begin` issues a
//! ticket and invalidates every earlier one, so a superseded response
//! resolving late can never overwrite newer state.

#[cfg(test)]
#[path = "request_gen_test.rs"]
mod request_gen_test;

/// Monotonic ticket pairing an in-flight request with the state it may
/// update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestGen(u64);

impl RequestGen {
    /// Start a new request; returns the ticket the response must
    /// present when it tries to apply its result.
    pub fn begin(&mut self) -> RequestGen {
        self.0 += 1;
        *self
    }

    /// Whether `ticket` still refers to the newest request.
    #[must_use]
    pub fn is_current(self, ticket: RequestGen) -> bool {
        self == ticket
    }
}
