//! JSON snapshot of the page, printed by the host when its input ends.

use std::collections::BTreeMap;

use folio::Runtime;
use folio::validation::Validatable;
use serde::Serialize;

use crate::PageHandles;
use crate::contact::{FieldId, SUCCESS_ID};
use crate::navigation::{NAV_MENU_ID, NAVBAR_ID};
use crate::reveal::VISIBLE_CLASS;
use crate::typing::HERO_TITLE_CLASS;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSummary {
    pub elapsed_ms: u128,
    pub scroll_y: f64,
    pub navbar_scrolled: bool,
    pub menu_open: bool,
    pub hero_title: String,
    pub revealed: Vec<String>,
    pub submission: String,
    pub banner: Option<String>,
    pub fields: BTreeMap<String, String>,
    pub errors: BTreeMap<String, String>,
    pub trail_frames: u64,
}

impl PageSummary {
    pub fn capture(runtime: &Runtime, handles: &PageHandles) -> Self {
        let document = runtime.document();
        let has_class =
            |id: &str, class: &str| document.get(id).is_some_and(|el| el.has_class(class));

        let hero_title = document
            .by_class(HERO_TITLE_CLASS)
            .first()
            .and_then(|id| document.get(id))
            .map(|el| el.text.clone())
            .unwrap_or_default();

        let banner = document
            .get(SUCCESS_ID)
            .filter(|el| el.style_value("display") == Some("block"))
            .map(|el| el.text.clone());

        let mut fields = BTreeMap::new();
        let mut errors = BTreeMap::new();
        for field in FieldId::ALL {
            let input = field.input();
            fields.insert(field.as_str().to_string(), input.value(document));
            if let Some(error) = input.error(document) {
                errors.insert(field.as_str().to_string(), error);
            }
        }

        Self {
            elapsed_ms: runtime.now().as_millis(),
            scroll_y: document.scroll_y(),
            navbar_scrolled: has_class(NAVBAR_ID, "scrolled"),
            menu_open: has_class(NAV_MENU_ID, "active"),
            hero_title,
            revealed: document.by_class(VISIBLE_CLASS),
            submission: format!("{:?}", handles.contact.get()),
            banner,
            fields,
            errors,
            trail_frames: handles.trail_frames.get(),
        }
    }
}
