//! `npc-output` — recording simulation runs for later analysis.
//!
//! # Crate layout
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`row`]      | `AgentSnapshotRow`, `TickSummaryRow`                 |
//! | [`writer`]   | `OutputWriter` trait                                 |
//! | [`csv`]      | `CsvWriter` backend                                  |
//! | [`observer`] | `SimOutputObserver<W>` — `SimObserver` → writer      |
//! | [`error`]    | `OutputError`, `OutputResult<T>`                     |
//!
//! The observer converts sim callbacks into plain rows; writers persist
//! them.  Only a CSV backend is provided — traces are post-processed with
//! ordinary tabular tooling, and nothing in the framework reads them back.

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
