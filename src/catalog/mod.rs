mod persistence;
mod store;

pub use persistence::{builtin_catalog, load_catalog, parse_catalog, save_catalog};
pub use store::{Catalog, FUZZY_MATCH_THRESHOLD};
