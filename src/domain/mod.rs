//! Domain modules organized as vertical slices.
//!
//! - `balance` — subaccount balances as read from the contract
//! - `order` — client-side order records and request payloads
//! - `form` — the panel's raw input fields

pub mod balance;
pub mod form;
pub mod order;
