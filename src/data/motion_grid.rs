use serde::{Deserialize, Serialize};

use super::trail_item::TrailItem;
use crate::error::AppError;

const MOTION_GRID_JSON: &str = include_str!("../../assets/motion-grid-items.json");

/// A category and its cover image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotionGridItem {
    pub text: String,
    pub image: String,
}

pub fn motion_grid_items() -> Result<Vec<MotionGridItem>, AppError> {
    parse_items(MOTION_GRID_JSON)
}

fn parse_items(raw: &str) -> Result<Vec<MotionGridItem>, AppError> {
    Ok(serde_json::from_str(raw)?)
}

/// Gallery entries for the image trail. Falls back to an empty pool when the
/// bundled list is unreadable.
pub fn gallery_items() -> Vec<TrailItem> {
    match motion_grid_items() {
        Ok(items) => items
            .into_iter()
            .map(|item| TrailItem::new(item.image, Some(item.text)))
            .collect(),
        Err(e) => {
            log::error!("Failed to load gallery items: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_items_load() {
        let items = motion_grid_items().unwrap();
        assert_eq!(items.len(), 10);
        assert_eq!(items[0].text, "Programming");
        assert!(items.iter().all(|i| i.image.starts_with("https://images.unsplash.com/")));
    }

    #[test]
    fn gallery_uses_text_as_label() {
        let gallery = gallery_items();
        assert_eq!(gallery.len(), 10);
        assert_eq!(gallery[1].label.as_deref(), Some("Design"));
    }

    #[test]
    fn malformed_list_is_an_error() {
        assert!(matches!(parse_items("[{\"text\": 1}]"), Err(AppError::Items(_))));
    }
}
