//! Flight itinerary planner server.
//!
//! Answers: "what is the fastest way from A to B on this date?" over a
//! static catalog of scheduled flights, either nonstop or with connections.

pub mod cache;
pub mod carriers;
pub mod catalog;
pub mod domain;
pub mod planner;
pub mod report;
pub mod web;
