use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One entry of the comic lane listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComicItem {
    pub id: i64,
    pub href: String,
    pub display_date: String,
    pub title: String,
    pub picture: Picture,
    #[serde(default)]
    pub paid_type: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub section_theme: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub info_row_content: Map<String, Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Picture {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub width: i32,
    #[serde(default)]
    pub height: i32,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub square_url: String,
    #[serde(default)]
    pub photographer: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
