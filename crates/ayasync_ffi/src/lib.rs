//! Flutter bridge surface over `ayasync_core`.

pub mod api;
