//! In-memory REST service for a food-delivery menu and its orders.
//!
//! Two resource collections, `/dishes` and `/orders`, each behind a
//! validation pipeline that gates every mutating request: an ordered list
//! of checks that short-circuits on the first failure, so exactly one
//! error reaches the caller and no partial write ever lands. Records live
//! in insertion-ordered in-memory stores injected through [`state::AppState`].

pub mod data;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;
pub mod validation;
