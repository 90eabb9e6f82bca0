//! Downloadable resources: guides, datasets, videos.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{default_true, nullable, set, Id, Insertable, Merge};
use crate::i18n::Language;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: Id,
    pub title_en: String,
    pub title_ar: String,
    pub description_en: String,
    pub description_ar: String,
    pub category: String,
    /// PDF, XLSX, PPT, Video, CSV, ...
    pub file_type: String,
    pub file_url: String,
    /// Display string such as "4.2 MB" or "6 Episodes".
    pub file_size: Option<String>,
    pub is_published: bool,
}

impl Resource {
    pub fn title(&self, lang: Language) -> &str {
        lang.pick(&self.title_en, &self.title_ar)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertResource {
    pub title_en: String,
    pub title_ar: String,
    pub description_en: String,
    pub description_ar: String,
    pub category: String,
    pub file_type: String,
    pub file_url: String,
    #[serde(default)]
    pub file_size: Option<String>,
    #[serde(default = "default_true")]
    pub is_published: bool,
}

impl Insertable for InsertResource {
    type Record = Resource;

    fn with_id(self, id: Id) -> Resource {
        Resource {
            id,
            title_en: self.title_en,
            title_ar: self.title_ar,
            description_en: self.description_en,
            description_ar: self.description_ar,
            category: self.category,
            file_type: self.file_type,
            file_url: self.file_url,
            file_size: self.file_size,
            is_published: self.is_published,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePatch {
    pub title_en: Option<String>,
    pub title_ar: Option<String>,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    pub category: Option<String>,
    pub file_type: Option<String>,
    pub file_url: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub file_size: Option<Option<String>>,
    pub is_published: Option<bool>,
}

impl Merge for Resource {
    type Patch = ResourcePatch;

    fn merge(&mut self, patch: ResourcePatch) {
        set(&mut self.title_en, patch.title_en);
        set(&mut self.title_ar, patch.title_ar);
        set(&mut self.description_en, patch.description_en);
        set(&mut self.description_ar, patch.description_ar);
        set(&mut self.category, patch.category);
        set(&mut self.file_type, patch.file_type);
        set(&mut self.file_url, patch.file_url);
        set(&mut self.file_size, patch.file_size);
        set(&mut self.is_published, patch.is_published);
    }
}
