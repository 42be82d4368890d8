//! Win and draw detection.
//!
//! `compute_status` is a pure function of the board. The state machine calls
//! it after every move, and the search relies on that fresh status at every
//! depth.

pub mod lines;
pub mod status;

pub use lines::Line;
pub use status::{compute_status, winning_line, Status};
