pub mod inception;
pub mod models;
