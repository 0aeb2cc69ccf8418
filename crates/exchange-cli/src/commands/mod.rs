pub mod batch;
pub mod check;
