// Request and response shapes shared by the API layer and the order service
pub mod order;
pub mod page;
pub mod request;
pub mod settlement;

pub use order::*;
pub use page::{Direction, Page, PageRequest, Sort, SortParseError, DEFAULT_SORT_PROPERTY};
pub use request::*;
pub use settlement::*;
