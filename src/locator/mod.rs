mod date;
mod resolver;
mod selection;

pub use date::guess_date_folder;
pub use resolver::Locator;
pub use selection::{nearest_index, parse_rating, select_candidate, select_rating};
