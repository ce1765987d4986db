//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use crate::{Error, expense::Ledger, timezone::get_local_offset};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,

    /// The in-memory list of expenses.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl AppState {
    /// Create a new [AppState] that owns `ledger`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezoneError] if `local_timezone` is not a known timezone.
    pub fn new(ledger: Ledger, local_timezone: &str) -> Result<Self, Error> {
        if get_local_offset(local_timezone).is_none() {
            return Err(Error::InvalidTimezoneError(local_timezone.to_owned()));
        }

        Ok(Self {
            local_timezone: local_timezone.to_owned(),
            ledger: Arc::new(Mutex::new(ledger)),
        })
    }
}
