//! Ministry offices and departments.
//!
//! `services_en` and `services_ar` stay parallel arrays on the wire; index `i` in one names the
//! same service as index `i` in the other. Nothing enforces equal length, so readers should go
//! through [`Directory::service_pairs`].

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{default_true, nullable, set, Id, Insertable, Merge};
use crate::i18n::Language;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Directory {
    pub id: Id,
    pub name_en: String,
    pub name_ar: String,
    /// Central, North, South, ...
    pub region: String,
    pub address_en: String,
    pub address_ar: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub hours_en: Option<String>,
    pub hours_ar: Option<String>,
    pub services_en: Option<Vec<String>>,
    pub services_ar: Option<Vec<String>>,
    pub is_published: bool,
}

impl Directory {
    pub fn name(&self, lang: Language) -> &str {
        lang.pick(&self.name_en, &self.name_ar)
    }

    /// `(en, ar)` service pairs, truncated to the shorter list.
    pub fn service_pairs(&self) -> Vec<(&str, &str)> {
        let en = self.services_en.as_deref().unwrap_or_default();
        let ar = self.services_ar.as_deref().unwrap_or_default();
        en.iter()
            .zip(ar)
            .map(|(e, a)| (e.as_str(), a.as_str()))
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertDirectory {
    pub name_en: String,
    pub name_ar: String,
    pub region: String,
    pub address_en: String,
    pub address_ar: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub hours_en: Option<String>,
    #[serde(default)]
    pub hours_ar: Option<String>,
    #[serde(default)]
    pub services_en: Option<Vec<String>>,
    #[serde(default)]
    pub services_ar: Option<Vec<String>>,
    #[serde(default = "default_true")]
    pub is_published: bool,
}

impl Insertable for InsertDirectory {
    type Record = Directory;

    fn with_id(self, id: Id) -> Directory {
        Directory {
            id,
            name_en: self.name_en,
            name_ar: self.name_ar,
            region: self.region,
            address_en: self.address_en,
            address_ar: self.address_ar,
            phone: self.phone,
            email: self.email,
            hours_en: self.hours_en,
            hours_ar: self.hours_ar,
            services_en: self.services_en,
            services_ar: self.services_ar,
            is_published: self.is_published,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryPatch {
    pub name_en: Option<String>,
    pub name_ar: Option<String>,
    pub region: Option<String>,
    pub address_en: Option<String>,
    pub address_ar: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub hours_en: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub hours_ar: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub services_en: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "nullable")]
    pub services_ar: Option<Option<Vec<String>>>,
    pub is_published: Option<bool>,
}

impl Merge for Directory {
    type Patch = DirectoryPatch;

    fn merge(&mut self, patch: DirectoryPatch) {
        set(&mut self.name_en, patch.name_en);
        set(&mut self.name_ar, patch.name_ar);
        set(&mut self.region, patch.region);
        set(&mut self.address_en, patch.address_en);
        set(&mut self.address_ar, patch.address_ar);
        set(&mut self.phone, patch.phone);
        set(&mut self.email, patch.email);
        set(&mut self.hours_en, patch.hours_en);
        set(&mut self.hours_ar, patch.hours_ar);
        set(&mut self.services_en, patch.services_en);
        set(&mut self.services_ar, patch.services_ar);
        set(&mut self.is_published, patch.is_published);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn office(services_en: Vec<&str>, services_ar: Vec<&str>) -> Directory {
        serde_json::from_value::<InsertDirectory>(json!({
            "nameEn": "Hebron Directorate",
            "nameAr": "مديرية الخليل",
            "region": "South",
            "addressEn": "Main St",
            "addressAr": "الشارع الرئيسي",
            "servicesEn": services_en,
            "servicesAr": services_ar
        }))
        .unwrap()
        .with_id(7)
    }

    #[test]
    fn pairs_stop_at_shorter_list() {
        let dir = office(vec!["Licensing", "Extension"], vec!["الترخيص"]);
        assert_eq!(dir.service_pairs(), vec![("Licensing", "الترخيص")]);
    }

    #[test]
    fn optional_contact_fields_default_to_none() {
        let dir = office(vec![], vec![]);
        assert_eq!(dir.phone, None);
        assert_eq!(dir.hours_ar, None);
        assert!(dir.service_pairs().is_empty());
        assert_eq!(dir.name(Language::Ar), "مديرية الخليل");
    }

    #[test]
    fn patch_replaces_service_lists_wholesale() {
        let mut dir = office(vec!["Licensing"], vec!["الترخيص"]);
        dir.merge(
            serde_json::from_value(json!({ "servicesEn": ["A", "B"], "servicesAr": ["أ", "ب"] }))
                .unwrap(),
        );
        assert_eq!(dir.service_pairs(), vec![("A", "أ"), ("B", "ب")]);
        assert_eq!(dir.region, "South");
    }
}
