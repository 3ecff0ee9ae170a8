use serde::{Deserialize, Serialize};
use std::fmt;

/// One century or classification choice offered by the search form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterOption {
    pub name: String,
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub objectcount: Option<u64>,
}

/// A dropdown selection. `Any` means the filter is not applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FilterChoice {
    #[default]
    Any,
    Named(String),
}

impl FilterChoice {
    pub const ANY: &'static str = "any";

    /// Build a choice from a raw `<select>` value
    pub fn from_form_value(value: &str) -> Self {
        if value.is_empty() || value == Self::ANY {
            FilterChoice::Any
        } else {
            FilterChoice::Named(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FilterChoice::Any => Self::ANY,
            FilterChoice::Named(name) => name,
        }
    }
}

impl fmt::Display for FilterChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the search form submits in one query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub query_string: String,
    pub century: FilterChoice,
    pub classification: FilterChoice,
}

impl SearchCriteria {
    /// Query parameters for the object endpoint, in the order the API documents them
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("classification", self.classification.to_string()),
            ("century", self.century.to_string()),
            ("keyword", self.query_string.clone()),
        ]
    }
}

/// A person credited on an object
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Person {
    #[serde(default)]
    pub personid: Option<u64>,
    #[serde(default)]
    pub displayname: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ObjectImage {
    #[serde(default)]
    pub imageid: Option<u64>,
    #[serde(default)]
    pub baseimageurl: Option<String>,
    #[serde(default)]
    pub alttext: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A collection object. The API omits or nulls any field it has no data for.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ArtObject {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub dated: Option<String>,
    pub description: Option<String>,
    pub culture: Option<String>,
    pub style: Option<String>,
    pub technique: Option<String>,
    pub medium: Option<String>,
    pub dimensions: Option<String>,
    pub department: Option<String>,
    pub division: Option<String>,
    pub contact: Option<String>,
    pub creditline: Option<String>,
    pub primaryimageurl: Option<String>,
    pub people: Option<Vec<Person>>,
    pub images: Option<Vec<ObjectImage>>,
}

/// Pagination block returned alongside every record listing
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageInfo {
    pub totalrecordsperquery: u64,
    pub totalrecords: u64,
    pub pages: u64,
    pub page: u64,
    pub next: Option<String>,
    pub prev: Option<String>,
}

/// One page of object search results
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResults {
    #[serde(default)]
    pub info: PageInfo,
    #[serde(default)]
    pub records: Vec<ArtObject>,
}

impl SearchResults {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
