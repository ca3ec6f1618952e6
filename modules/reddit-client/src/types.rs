use serde::Deserialize;

/// Reddit listing envelope: `{"data": {"children": [{"data": {"title": ...}}]}}`.
/// Fields outside the title path are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct Listing {
    pub data: ListingData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListingData {
    pub children: Vec<Child>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Child {
    pub data: Post,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Post {
    pub title: String,
}
