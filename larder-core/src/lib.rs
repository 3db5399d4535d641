pub mod autofill;
pub mod error;
pub mod http;
pub mod listing;
pub mod pagination;
pub mod recipe;

pub use autofill::{AutofillConfig, AutofillDraft, AutofillResolver};
pub use error::{ConfigError, FetchError, ResolveError, ValidationError};
pub use http::{HttpClient, MockClient, MockResponse, ReqwestClient};
pub use listing::{
    build_listing, build_recent_listing, build_sorted_listing, sort_columns, Direction,
    SortColumn, SortField, SortSpec,
};
pub use pagination::{paginate, parse_page_number, Page, PAGE_SIZE};
pub use recipe::{Recipe, RecipeFields, MAX_NAME_LEN};
