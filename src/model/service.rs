use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{default_true, nullable, set, Id, Insertable, Merge};
use crate::i18n::Language;

/// A ministry service offered to the public (licensing, diagnosis, subsidies, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: Id,
    pub title_en: String,
    pub title_ar: String,
    pub description_en: String,
    pub description_ar: String,
    pub category: String,
    /// Icon class hint for the front end, e.g. "fa-seedling".
    pub icon: Option<String>,
    pub is_published: bool,
}

impl Service {
    pub fn title(&self, lang: Language) -> &str {
        lang.pick(&self.title_en, &self.title_ar)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertService {
    pub title_en: String,
    pub title_ar: String,
    pub description_en: String,
    pub description_ar: String,
    pub category: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default = "default_true")]
    pub is_published: bool,
}

impl Insertable for InsertService {
    type Record = Service;

    fn with_id(self, id: Id) -> Service {
        Service {
            id,
            title_en: self.title_en,
            title_ar: self.title_ar,
            description_en: self.description_en,
            description_ar: self.description_ar,
            category: self.category,
            icon: self.icon,
            is_published: self.is_published,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePatch {
    pub title_en: Option<String>,
    pub title_ar: Option<String>,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub icon: Option<Option<String>>,
    pub is_published: Option<bool>,
}

impl Merge for Service {
    type Patch = ServicePatch;

    fn merge(&mut self, patch: ServicePatch) {
        set(&mut self.title_en, patch.title_en);
        set(&mut self.title_ar, patch.title_ar);
        set(&mut self.description_en, patch.description_en);
        set(&mut self.description_ar, patch.description_ar);
        set(&mut self.category, patch.category);
        set(&mut self.icon, patch.icon);
        set(&mut self.is_published, patch.is_published);
    }
}
