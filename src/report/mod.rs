//! Reporting boundary.
//!
//! The search core ends at an [`Evaluation`](crate::eval::Evaluation);
//! whatever renders it — a terminal printout, a Gantt chart, a file —
//! lives behind the [`ScheduleSink`] trait. The core only decides
//! which side of the feasibility line the result falls on and hands
//! over the data; it carries no rendering dependency.

mod sink;

pub use sink::{report, ScheduleSink, TextSink};
