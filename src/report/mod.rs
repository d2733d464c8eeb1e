pub mod fixed_in;
pub mod model;
pub mod output;
pub mod severity;
pub mod sorter;
pub mod table;

pub use model::{BaseImage, Report, Upgrade, Vulnerability};
pub use output::{render, OutputFormat, RenderOptions};
pub use sorter::{SortKey, SortOrder};
