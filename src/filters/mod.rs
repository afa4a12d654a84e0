pub mod codec;
pub mod model;
pub mod parser;

pub use model::{FilterSet, SortOrder};
pub use parser::parse_user_query;
