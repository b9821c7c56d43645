//! Fetch State
//!
//! `data` / `loading` / `error` for one remote collection, with
//! last-request-wins ordering. Every request gets a token from `begin`;
//! a result is applied only if its token is still the latest one issued.

use crate::api::ApiError;

/// Identifies one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<ApiError>,
    /// Bumped every time `data` is replaced or cleared
    pub revision: u64,
    latest: u64,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            revision: 0,
            latest: 0,
        }
    }
}

impl<T> FetchState<T> {
    /// Start a request. Any earlier in-flight request becomes stale.
    pub fn begin(&mut self) -> RequestToken {
        self.latest += 1;
        self.loading = true;
        RequestToken(self.latest)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }

    /// Apply a finished request. Returns false (and changes nothing) when a
    /// newer request was issued after `token`.
    ///
    /// A failure keeps the previous `data`.
    pub fn resolve(&mut self, token: RequestToken, result: Result<T, ApiError>) -> bool {
        if !self.is_current(token) {
            return false;
        }

        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
                self.revision += 1;
            }
            Err(err) => self.error = Some(err),
        }
        true
    }

    /// Drop the data but keep the request bookkeeping
    pub fn discard_data(&mut self) {
        if self.data.take().is_some() {
            self.revision += 1;
        }
    }

    /// Back to the idle state; outstanding requests can no longer resolve
    pub fn clear(&mut self) {
        self.latest += 1;
        self.loading = false;
        self.error = None;
        self.discard_data();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(msg: &str) -> ApiError {
        ApiError::Tasks(msg.to_string())
    }

    #[test]
    fn test_success_sets_data_and_clears_loading() {
        let mut state = FetchState::<Vec<u32>>::default();
        let token = state.begin();
        assert!(state.loading);

        assert!(state.resolve(token, Ok(vec![1, 2])));
        assert!(!state.loading);
        assert_eq!(state.data, Some(vec![1, 2]));
        assert_eq!(state.error, None);
        assert_eq!(state.revision, 1);
    }

    #[test]
    fn test_failure_keeps_stale_data() {
        let mut state = FetchState::<Vec<u32>>::default();
        let first = state.begin();
        state.resolve(first, Ok(vec![7]));

        let second = state.begin();
        assert!(state.resolve(second, Err(failure("Network Error"))));

        assert!(!state.loading);
        assert_eq!(state.data, Some(vec![7]));
        assert_eq!(state.error, Some(failure("Network Error")));
        assert_eq!(state.revision, 1);
    }

    #[test]
    fn test_success_after_failure_clears_error() {
        let mut state = FetchState::<Vec<u32>>::default();
        let t = state.begin();
        state.resolve(t, Err(failure("boom")));
        let t = state.begin();
        state.resolve(t, Ok(vec![]));
        assert_eq!(state.error, None);
        assert_eq!(state.data, Some(vec![]));
    }

    #[test]
    fn test_later_request_wins_regardless_of_arrival_order() {
        let mut state = FetchState::<&str>::default();
        let a = state.begin();
        let b = state.begin();

        assert!(state.resolve(b, Ok("project B")));
        assert!(!state.resolve(a, Ok("project A")));

        assert_eq!(state.data, Some("project B"));
        assert!(!state.loading);
    }

    #[test]
    fn test_stale_response_does_not_end_loading() {
        let mut state = FetchState::<&str>::default();
        let a = state.begin();
        let _b = state.begin();

        assert!(!state.resolve(a, Err(failure("late"))));
        assert!(state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.data, None);
    }

    #[test]
    fn test_clear_resets_and_invalidates_in_flight() {
        let mut state = FetchState::<&str>::default();
        let t = state.begin();
        state.resolve(t, Err(failure("boom")));
        let in_flight = state.begin();

        state.clear();
        assert!(!state.resolve(in_flight, Ok("too late")));
        assert_eq!(state.data, None);
        assert_eq!(state.error, None);
        assert!(!state.loading);
    }

    #[test]
    fn test_revision_tracks_data_replacement() {
        let mut state = FetchState::<u8>::default();
        let t = state.begin();
        state.resolve(t, Ok(1));
        let t = state.begin();
        state.resolve(t, Ok(1));
        assert_eq!(state.revision, 2);

        state.discard_data();
        assert_eq!(state.revision, 3);
        state.discard_data();
        assert_eq!(state.revision, 3);
    }
}
