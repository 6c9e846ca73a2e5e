//! Pure building blocks shared by the filters: mode rendering, line
//! classification and bounded line reading.

pub mod classify;
pub mod lines;
pub mod mode;
