use serde::{Deserialize, Serialize};

/// One image in the pointer trail, optionally captioned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TrailItemSource")]
pub struct TrailItem {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl TrailItem {
    pub fn new(url: impl Into<String>, label: Option<String>) -> Self {
        Self {
            url: url.into(),
            label,
        }
    }
}

/// Items may be given as a bare URL or as `{ "url", "label" }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum TrailItemSource {
    Url(String),
    Item {
        url: String,
        #[serde(default)]
        label: Option<String>,
    },
}

impl From<TrailItemSource> for TrailItem {
    fn from(source: TrailItemSource) -> Self {
        match source {
            TrailItemSource::Url(url) => TrailItem { url, label: None },
            TrailItemSource::Item { url, label } => TrailItem { url, label },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_strings_and_objects() {
        let items: Vec<TrailItem> =
            serde_json::from_str(r#"["/a.jpg", {"url": "/b.jpg", "label": "B"}, {"url": "/c.jpg"}]"#)
                .unwrap();
        assert_eq!(
            items,
            vec![
                TrailItem::new("/a.jpg", None),
                TrailItem::new("/b.jpg", Some("B".into())),
                TrailItem::new("/c.jpg", None),
            ]
        );
    }

    #[test]
    fn omits_missing_label() {
        let json = serde_json::to_string(&TrailItem::new("/a.jpg", None)).unwrap();
        assert_eq!(json, r#"{"url":"/a.jpg"}"#);
    }
}
