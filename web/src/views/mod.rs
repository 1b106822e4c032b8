mod page;

pub use page::{HomePage, SitePage};
