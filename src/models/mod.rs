mod dashboard;
mod table_view;

pub use dashboard::{Dashboard, Snapshot};
pub use table_view::{AssetRow, SortColumn, SortDirection};
