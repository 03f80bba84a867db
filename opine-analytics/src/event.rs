//! Pixel event model.
//!
//! Events serialize to the flat JSON objects the event collector expects:
//! a class/type pair, the common envelope (client, locale, uid, timestamp,
//! source, SDK version) and per-event fields, with caller-supplied
//! `additional` entries merged last.

use chrono::Utc;
use serde_json::{Map, Value, json};
use uuid::Uuid;

use crate::config::AnalyticsConfig;

/// Reported source of every pixel event.
const EVENT_SOURCE: &str = "native-mobile-sdk";

/// Keys of conversion/transaction `additional` entries that are known not
/// to carry personally identifying information. Anything else is treated
/// as PII.
const NON_PII_KEYS: &[&str] = &[
    "affiliation",
    "city",
    "country",
    "currency",
    "items",
    "label",
    "locale",
    "orderId",
    "shipping",
    "state",
    "tax",
    "total",
    "type",
    "value",
];

/// Platform feature area an event is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductArea {
    /// Ratings and reviews.
    Reviews,
    /// Questions and answers.
    Questions,
    /// Author profiles.
    Profiles,
    /// Product recommendations.
    Recommendations,
}

impl ProductArea {
    /// Wire token for the feature area.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Reviews => "RatingsAndReviews",
            Self::Questions => "AskAndAnswer",
            Self::Profiles => "Profiles",
            Self::Recommendations => "Recommendations",
        }
    }
}

/// Kind of user-generated content an impression refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// A product review.
    Review,
    /// A consumer question.
    Question,
    /// An answer to a question.
    Answer,
    /// A comment on a review.
    Comment,
}

impl ContentKind {
    /// Wire token for the content kind.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Review => "Review",
            Self::Question => "Question",
            Self::Answer => "Answer",
            Self::Comment => "Comment",
        }
    }
}

/// Extra key/value entries merged into an event payload.
pub type Additional = Map<String, Value>;

/// An analytics pixel event.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalyticsEvent {
    /// A page of UGC was shown.
    PageView {
        /// Feature area.
        area: ProductArea,
        /// Product the page belongs to.
        product_id: String,
        /// Brand of the product, when known.
        brand: Option<String>,
        /// Category of the product, when known.
        category_id: Option<String>,
        /// Root category of the product, when known.
        root_category_id: Option<String>,
        /// Extra payload entries.
        additional: Additional,
    },
    /// A single piece of UGC was rendered.
    Impression {
        /// Feature area.
        area: ProductArea,
        /// Identifier of the rendered content.
        content_id: String,
        /// Kind of the rendered content.
        content_kind: ContentKind,
        /// Product the content belongs to.
        product_id: String,
        /// Brand of the product, when known.
        brand: Option<String>,
        /// Category of the product, when known.
        category_id: Option<String>,
        /// Extra payload entries.
        additional: Additional,
    },
    /// An SDK feature was used.
    Feature {
        /// Feature area.
        area: ProductArea,
        /// Name of the used feature.
        name: String,
        /// Product the interaction refers to.
        product_id: String,
        /// Brand of the product, when known.
        brand: Option<String>,
        /// Extra payload entries.
        additional: Additional,
    },
    /// A tracked conversion.
    Conversion {
        /// Conversion type label.
        kind: String,
        /// Conversion value.
        value: String,
        /// Optional label.
        label: Option<String>,
        /// Extra payload entries; non-whitelisted keys count as PII.
        additional: Additional,
    },
    /// A completed transaction.
    Transaction {
        /// Order identifier.
        order_id: String,
        /// Order total.
        total: f64,
        /// Currency code.
        currency: String,
        /// Extra payload entries; non-whitelisted keys count as PII.
        additional: Additional,
    },
}

impl AnalyticsEvent {
    /// Event class reported as `cl`.
    pub fn class(&self) -> &'static str {
        match self {
            Self::PageView { .. } => "PageView",
            Self::Impression { .. } => "Impression",
            Self::Feature { .. } => "Feature",
            Self::Conversion { .. } => "Conversion",
            Self::Transaction { .. } => "Transaction",
        }
    }

    /// Whether the event's `additional` entries carry personally
    /// identifying information.
    ///
    /// Only conversions and transactions accept free-form commerce
    /// parameters; everything outside the known non-PII keys is treated as
    /// identifying.
    pub fn has_pii(&self) -> bool {
        match self {
            Self::Conversion { additional, .. } | Self::Transaction { additional, .. } => {
                additional.keys().any(|key| !NON_PII_KEYS.contains(&key.as_str()))
            }
            _ => false,
        }
    }

    /// A copy of the event with all PII entries removed.
    pub fn anonymized(&self) -> Self {
        let mut event = self.clone();
        if let Self::Conversion { additional, .. } | Self::Transaction { additional, .. } =
            &mut event
        {
            additional.retain(|key, _| NON_PII_KEYS.contains(&key.as_str()));
        }
        event
    }

    /// Serialize the event into the flat payload posted to the collector.
    pub fn payload(&self, config: &AnalyticsConfig) -> Value {
        let mut body = match self {
            Self::PageView {
                area,
                product_id,
                brand,
                category_id,
                root_category_id,
                additional,
            } => {
                let mut map = base(self.class(), "Product");
                map.insert("area".into(), json!(area.key()));
                map.insert("productId".into(), json!(product_id));
                insert_opt(&mut map, "brand", brand);
                insert_opt(&mut map, "categoryId", category_id);
                insert_opt(&mut map, "rootCategoryId", root_category_id);
                merge(&mut map, additional);
                map
            }
            Self::Impression {
                area,
                content_id,
                content_kind,
                product_id,
                brand,
                category_id,
                additional,
            } => {
                let mut map = base(self.class(), "UGC");
                map.insert("area".into(), json!(area.key()));
                map.insert("contentId".into(), json!(content_id));
                map.insert("contentType".into(), json!(content_kind.key()));
                map.insert("productId".into(), json!(product_id));
                insert_opt(&mut map, "brand", brand);
                insert_opt(&mut map, "categoryId", category_id);
                merge(&mut map, additional);
                map
            }
            Self::Feature {
                area,
                name,
                product_id,
                brand,
                additional,
            } => {
                let mut map = base(self.class(), "Used");
                map.insert("area".into(), json!(area.key()));
                map.insert("name".into(), json!(name));
                map.insert("productId".into(), json!(product_id));
                insert_opt(&mut map, "brand", brand);
                merge(&mut map, additional);
                map
            }
            Self::Conversion {
                kind,
                value,
                label,
                additional,
            } => {
                let mut map = base(self.class(), kind);
                map.insert("value".into(), json!(value));
                insert_opt(&mut map, "label", label);
                merge(&mut map, additional);
                map
            }
            Self::Transaction {
                order_id,
                total,
                currency,
                additional,
            } => {
                let mut map = base(self.class(), "Transaction");
                map.insert("orderId".into(), json!(order_id));
                map.insert("total".into(), json!(total));
                map.insert("currency".into(), json!(currency));
                merge(&mut map, additional);
                map
            }
        };

        body.insert("client".into(), json!(config.client_id));
        if let Some(locale) = &config.locale {
            body.insert("locale".into(), json!(locale));
        }
        body.insert("uid".into(), json!(Uuid::new_v4().to_string()));
        body.insert("t".into(), json!(Utc::now().timestamp_millis()));
        body.insert("source".into(), json!(EVENT_SOURCE));
        body.insert("sdkVersion".into(), json!(env!("CARGO_PKG_VERSION")));
        Value::Object(body)
    }
}

fn base(class: &str, kind: &str) -> Additional {
    let mut map = Additional::new();
    map.insert("cl".into(), json!(class));
    map.insert("type".into(), json!(kind));
    map
}

fn insert_opt(map: &mut Additional, key: &str, value: &Option<String>) {
    if let Some(value) = value {
        map.insert(key.into(), json!(value));
    }
}

fn merge(map: &mut Additional, additional: &Additional) {
    for (key, value) in additional {
        map.insert(key.clone(), value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalyticsEnvironment;
    use pretty_assertions::assert_eq;

    fn config() -> AnalyticsConfig {
        AnalyticsConfig::new("apitestcustomer", AnalyticsEnvironment::Staging).locale("en_US")
    }

    #[test]
    fn test_impression_payload() {
        let event = AnalyticsEvent::Impression {
            area: ProductArea::Reviews,
            content_id: "16292".into(),
            content_kind: ContentKind::Review,
            product_id: "test1".into(),
            brand: Some("opine".into()),
            category_id: None,
            additional: Additional::new(),
        };

        let payload = event.payload(&config());
        assert_eq!(payload["cl"], "Impression");
        assert_eq!(payload["type"], "UGC");
        assert_eq!(payload["area"], "RatingsAndReviews");
        assert_eq!(payload["contentId"], "16292");
        assert_eq!(payload["contentType"], "Review");
        assert_eq!(payload["productId"], "test1");
        assert_eq!(payload["brand"], "opine");
        assert_eq!(payload["client"], "apitestcustomer");
        assert_eq!(payload["locale"], "en_US");
        assert_eq!(payload["source"], "native-mobile-sdk");
        assert!(payload.get("categoryId").is_none());
    }

    #[test]
    fn test_additional_entries_merge_into_payload() {
        let mut additional = Additional::new();
        additional.insert("page".into(), json!("author-1"));
        additional.insert("interaction".into(), json!(false));

        let event = AnalyticsEvent::Feature {
            area: ProductArea::Profiles,
            name: "Profile".into(),
            product_id: "none".into(),
            brand: None,
            additional,
        };

        let payload = event.payload(&config());
        assert_eq!(payload["name"], "Profile");
        assert_eq!(payload["page"], "author-1");
        assert_eq!(payload["interaction"], false);
    }

    #[test]
    fn test_pii_detection() {
        let mut additional = Additional::new();
        additional.insert("orderId".into(), json!("o-1"));
        additional.insert("total".into(), json!(10.0));

        let clean = AnalyticsEvent::Conversion {
            kind: "Purchase".into(),
            value: "10".into(),
            label: None,
            additional: additional.clone(),
        };
        assert!(!clean.has_pii());

        additional.insert("email".into(), json!("user@example.com"));
        let tainted = AnalyticsEvent::Conversion {
            kind: "Purchase".into(),
            value: "10".into(),
            label: None,
            additional,
        };
        assert!(tainted.has_pii());

        let anonymized = tainted.anonymized();
        assert!(!anonymized.has_pii());
        let payload = anonymized.payload(&config());
        assert!(payload.get("email").is_none());
        assert_eq!(payload["orderId"], "o-1");
    }

    #[test]
    fn test_page_view_is_never_pii() {
        let event = AnalyticsEvent::PageView {
            area: ProductArea::Questions,
            product_id: "test1".into(),
            brand: None,
            category_id: Some("cat-9".into()),
            root_category_id: None,
            additional: Additional::new(),
        };
        assert!(!event.has_pii());
        let payload = event.payload(&config());
        assert_eq!(payload["area"], "AskAndAnswer");
        assert_eq!(payload["categoryId"], "cat-9");
    }
}
