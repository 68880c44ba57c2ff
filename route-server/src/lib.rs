//! EV road-trip planner server.
//!
//! A web service that answers: "I'm driving this electric car from A to B,
//! where should I stop to charge?"

pub mod chargemap;
pub mod directions;
pub mod domain;
pub mod planner;
pub mod web;
