mod facts;
mod view;

pub use facts::{fact_rows, header_lines, photos, FactRow, FactValue, PersonLink, Photo, SearchLink};
pub use view::Feature;
