pub mod client;
pub mod models;

pub use client::{CollectionApi, CollectionError, HarvardClient, SharedCollectionApi};
pub use models::{
    ArtObject, FilterChoice, FilterOption, ObjectImage, PageInfo, Person, SearchCriteria,
    SearchResults,
};
