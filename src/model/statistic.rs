use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{default_true, set, Id, Insertable, Merge};
use crate::i18n::Language;

/// Headline figure shown on the home page. `value` is display text ("63%", "$450M"), not a number.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Statistic {
    pub id: Id,
    pub label_en: String,
    pub label_ar: String,
    pub value: String,
    pub order: i32,
    pub is_published: bool,
}

impl Statistic {
    pub fn label(&self, lang: Language) -> &str {
        lang.pick(&self.label_en, &self.label_ar)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertStatistic {
    pub label_en: String,
    pub label_ar: String,
    pub value: String,
    pub order: i32,
    #[serde(default = "default_true")]
    pub is_published: bool,
}

impl Insertable for InsertStatistic {
    type Record = Statistic;

    fn with_id(self, id: Id) -> Statistic {
        Statistic {
            id,
            label_en: self.label_en,
            label_ar: self.label_ar,
            value: self.value,
            order: self.order,
            is_published: self.is_published,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticPatch {
    pub label_en: Option<String>,
    pub label_ar: Option<String>,
    pub value: Option<String>,
    pub order: Option<i32>,
    pub is_published: Option<bool>,
}

impl Merge for Statistic {
    type Patch = StatisticPatch;

    fn merge(&mut self, patch: StatisticPatch) {
        set(&mut self.label_en, patch.label_en);
        set(&mut self.label_ar, patch.label_ar);
        set(&mut self.value, patch.value);
        set(&mut self.order, patch.order);
        set(&mut self.is_published, patch.is_published);
    }
}
