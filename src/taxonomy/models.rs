use serde::Deserialize;

// categories.json
//  └── [category]
//       ├── slug
//       └── subCategories (optional)
//            └── [subcategory]
//                 ├── slug
//                 └── name
//
// listings.json
//  └── [listing]
//       ├── category
//       └── subcategory (optional)
//
// Any other fields in either file are ignored.

#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub slug: String,
    #[serde(rename = "subCategories", default)]
    pub sub_categories: Vec<Subcategory>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Subcategory {
    pub slug: String,
    // Only read when a placeholder has to be built for this subcategory
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExistingListing {
    pub category: String,
    /// Absent means `""`. An explicit `null` is `None` and covers nothing.
    #[serde(default = "empty_subcategory")]
    pub subcategory: Option<String>,
}

fn empty_subcategory() -> Option<String> {
    Some(String::new())
}
