use crate::collection::ArtObject;

/// Term used when re-searching by a credited person
pub const PERSON_SEARCH_TERM: &str = "person.displayname";

/// A value that re-runs a search when clicked
#[derive(Debug, Clone, PartialEq)]
pub struct SearchLink {
    pub term: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PersonLink {
    pub personid: Option<u64>,
    /// Render key; one person may be credited twice under different roles
    pub key: String,
    pub link: SearchLink,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FactValue {
    Text(String),
    Link(SearchLink),
    People(Vec<PersonLink>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FactRow {
    pub label: &'static str,
    pub value: FactValue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    pub url: String,
    pub alt: String,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn text(value: &Option<String>) -> Option<FactValue> {
    present(value).map(|v| FactValue::Text(v.to_string()))
}

fn link(term: &str, value: Option<&str>) -> Option<FactValue> {
    value.map(|v| {
        FactValue::Link(SearchLink {
            term: term.to_string(),
            value: v.to_string(),
        })
    })
}

fn people(object: &ArtObject) -> Option<FactValue> {
    let links: Vec<PersonLink> = object
        .people
        .iter()
        .flatten()
        .filter_map(|person| present(&person.displayname).map(|name| (person.personid, name)))
        .enumerate()
        .map(|(index, (personid, name))| PersonLink {
            personid,
            key: match personid {
                Some(id) => format!("{}-{}", id, index),
                None => format!("unknown-{}", index),
            },
            link: SearchLink {
                term: PERSON_SEARCH_TERM.to_string(),
                value: name.to_string(),
            },
        })
        .collect();

    if links.is_empty() {
        None
    } else {
        Some(FactValue::People(links))
    }
}

/// Title and date for the panel header, each omitted when blank
pub fn header_lines(object: &ArtObject) -> (Option<String>, Option<String>) {
    (
        present(&object.title).map(str::to_string),
        present(&object.dated).map(str::to_string),
    )
}

/// The ordered fact rows for `object`. Fields that are missing or blank
/// produce no row at all.
pub fn fact_rows(object: &ArtObject) -> Vec<FactRow> {
    let medium = present(&object.medium).map(str::to_lowercase);

    let candidates: [(&'static str, Option<FactValue>); 11] = [
        ("DESCRIPTION", text(&object.description)),
        ("CULTURE", link("culture", present(&object.culture))),
        ("STYLE", text(&object.style)),
        ("TECHNIQUE", link("technique", present(&object.technique))),
        ("MEDIUM", link("medium", medium.as_deref())),
        ("DIMENSIONS", text(&object.dimensions)),
        ("PEOPLE", people(object)),
        ("DEPARTMENT", text(&object.department)),
        ("DIVISION", text(&object.division)),
        ("CONTACT", text(&object.contact)),
        ("CREDIT", text(&object.creditline)),
    ];

    candidates
        .into_iter()
        .filter_map(|(label, value)| value.map(|value| FactRow { label, value }))
        .collect()
}

/// Images to show for `object`: the primary image first, then any
/// additional image URLs, without duplicates.
pub fn photos(object: &ArtObject) -> Vec<Photo> {
    let fallback_alt = present(&object.description)
        .or_else(|| present(&object.title))
        .unwrap_or("")
        .to_string();

    let mut photos: Vec<Photo> = Vec::new();

    if let Some(url) = present(&object.primaryimageurl) {
        photos.push(Photo {
            url: url.to_string(),
            alt: fallback_alt.clone(),
        });
    }

    for image in object.images.iter().flatten() {
        let Some(url) = present(&image.baseimageurl) else {
            continue;
        };
        if photos.iter().any(|p| p.url == url) {
            continue;
        }
        let alt = present(&image.alttext)
            .or_else(|| present(&image.description))
            .map(str::to_string)
            .unwrap_or_else(|| fallback_alt.clone());
        photos.push(Photo {
            url: url.to_string(),
            alt,
        });
    }

    photos
}
