pub mod app;
pub mod input;
pub mod render;
pub mod row_edit;
pub mod theme;

pub use app::run;
