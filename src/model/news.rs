//! News items and announcements.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{default_true, nullable, set, timestamp, Id, Insertable, Merge};
use crate::i18n::Language;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct News {
    pub id: Id,
    pub title_en: String,
    pub title_ar: String,
    pub content_en: String,
    pub content_ar: String,
    pub image_url: Option<String>,
    /// Free text; the site uses "Press Release", "Event" and "Announcement".
    pub category: String,
    #[serde(with = "timestamp")]
    pub publish_date: DateTime<Utc>,
    pub is_published: bool,
}

impl News {
    pub fn title(&self, lang: Language) -> &str {
        lang.pick(&self.title_en, &self.title_ar)
    }

    pub fn content(&self, lang: Language) -> &str {
        lang.pick(&self.content_en, &self.content_ar)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertNews {
    pub title_en: String,
    pub title_ar: String,
    pub content_en: String,
    pub content_ar: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub category: String,
    #[serde(with = "timestamp")]
    pub publish_date: DateTime<Utc>,
    #[serde(default = "default_true")]
    pub is_published: bool,
}

impl Insertable for InsertNews {
    type Record = News;

    fn with_id(self, id: Id) -> News {
        News {
            id,
            title_en: self.title_en,
            title_ar: self.title_ar,
            content_en: self.content_en,
            content_ar: self.content_ar,
            image_url: self.image_url,
            category: self.category,
            publish_date: self.publish_date,
            is_published: self.is_published,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsPatch {
    pub title_en: Option<String>,
    pub title_ar: Option<String>,
    pub content_en: Option<String>,
    pub content_ar: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub image_url: Option<Option<String>>,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "timestamp::deserialize_opt")]
    pub publish_date: Option<DateTime<Utc>>,
    pub is_published: Option<bool>,
}

impl Merge for News {
    type Patch = NewsPatch;

    fn merge(&mut self, patch: NewsPatch) {
        set(&mut self.title_en, patch.title_en);
        set(&mut self.title_ar, patch.title_ar);
        set(&mut self.content_en, patch.content_en);
        set(&mut self.content_ar, patch.content_ar);
        set(&mut self.image_url, patch.image_url);
        set(&mut self.category, patch.category);
        set(&mut self.publish_date, patch.publish_date);
        set(&mut self.is_published, patch.is_published);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn insert() -> InsertNews {
        serde_json::from_value(json!({
            "titleEn": "Harvest season opens",
            "titleAr": "افتتاح موسم الحصاد",
            "contentEn": "Body",
            "contentAr": "نص",
            "imageUrl": "https://example.org/a.jpg",
            "category": "Event",
            "publishDate": "2025-11-15"
        }))
        .unwrap()
    }

    #[test]
    fn insert_defaults_published() {
        assert!(insert().is_published);
    }

    #[test]
    fn missing_bilingual_half_is_rejected() {
        let res = serde_json::from_value::<InsertNews>(json!({
            "titleEn": "Only English",
            "contentEn": "Body",
            "contentAr": "نص",
            "category": "Event",
            "publishDate": "2025-11-15"
        }));
        assert!(res.is_err());
    }

    #[test]
    fn null_clears_image_but_absence_keeps_it() {
        let mut news = insert().with_id(1);

        news.merge(serde_json::from_value(json!({ "category": "Announcement" })).unwrap());
        assert_eq!(news.image_url.as_deref(), Some("https://example.org/a.jpg"));
        assert_eq!(news.category, "Announcement");

        news.merge(serde_json::from_value(json!({ "imageUrl": null })).unwrap());
        assert_eq!(news.image_url, None);
        assert_eq!(news.title_en, "Harvest season opens");
    }

    #[test]
    fn publish_date_serializes_with_milliseconds() {
        let news = insert().with_id(1);
        let body = serde_json::to_value(&news).unwrap();
        assert_eq!(body["publishDate"], "2025-11-15T00:00:00.000Z");
        let back: News = serde_json::from_value(body).unwrap();
        assert_eq!(back, news);
    }

    #[test]
    fn localized_accessors() {
        let news = insert().with_id(1);
        assert_eq!(news.title(Language::En), "Harvest season opens");
        assert_eq!(news.content(Language::Ar), "نص");
    }
}
