//! uvmon: current UV index for ARPANSA monitoring stations.
//!
//! # Module structure
//!
//! ```text
//! uvmon
//! ├── model       — shared data types (Station, SortField, QueryOptions, FeedError, …)
//! ├── stations    — station name → civil time zone registry
//! ├── ingest
//! │   ├── (mod)   — FeedFetcher: live HTTP fetch or saved-file replay
//! │   └── arpansa — XML feed wire structures + parsing
//! ├── normalize   — raw feed record → Station, with field fallbacks
//! ├── analysis
//! │   ├── filter  — keep stations by id or name
//! │   └── sort    — per-field ordering, then optional reversal
//! ├── report      — table and quiet text layouts
//! ├── pipeline    — fetch → parse → normalize → filter → sort → render
//! ├── config      — layered configuration (defaults, TOML, env)
//! ├── logging     — tracing subscriber setup and run summaries
//! └── cli         — command line arguments
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod report;
pub mod stations;
