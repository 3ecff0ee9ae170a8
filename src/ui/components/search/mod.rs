mod form;

pub use form::Search;
