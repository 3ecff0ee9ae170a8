pub mod feature;
pub mod loading;
pub mod preview;
pub mod search;
pub mod searchable;

pub use feature::Feature;
pub use loading::Loading;
pub use preview::Preview;
pub use search::Search;
pub use searchable::Searchable;
