//! The deck document handed over by the deck editor.
//!
//! Only what pagination needs is modelled strictly. Style definitions and
//! other editor state in the same JSON are ignored here; rendering card
//! artwork is the job of the collaborator that produced `renderedCards`.

use crate::error::PipelineError;
use deckpress_types::{CardSide, PaperSize, Size, StyleId};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// What kind of content a deck column holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Image,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: FieldKind,
}

/// A reference to an image file used by a card field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    #[serde(rename = "image")]
    pub path: String,
}

/// A single value in a card's data bag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Image(ImageRef),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageRef> {
        match self {
            FieldValue::Image(r) => Some(r),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Image(r) => f.write_str(&r.path),
        }
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum FieldValueDef {
            Number(f64),
            Text(String),
            Flag(bool),
            Image(ImageRef),
            Empty(()),
        }

        Ok(match FieldValueDef::deserialize(deserializer)? {
            FieldValueDef::Number(n) => FieldValue::Number(n),
            FieldValueDef::Text(s) => FieldValue::Text(s),
            FieldValueDef::Flag(b) => FieldValue::Text(b.to_string()),
            FieldValueDef::Image(r) => FieldValue::Image(r),
            FieldValueDef::Empty(()) => FieldValue::Text(String::new()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub data: BTreeMap<String, FieldValue>,
    /// How many copies to print. Anything below one prints once.
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub front_style_id: String,
    #[serde(default)]
    pub back_style_id: String,
}

impl Card {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: BTreeMap::new(),
            count: 1,
            front_style_id: String::new(),
            back_style_id: String::new(),
        }
    }

    pub fn with_count(mut self, count: i64) -> Self {
        self.count = count;
        self
    }

    pub fn with_styles(mut self, front: impl Into<String>, back: impl Into<String>) -> Self {
        self.front_style_id = front.into();
        self.back_style_id = back.into();
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        self.data.insert(name.into(), value);
        self
    }

    pub fn copies(&self) -> usize {
        self.count.max(1) as usize
    }

    /// The style drawn on `side`, with empty ids resolved to the default style.
    pub fn style(&self, side: CardSide) -> StyleId {
        match side {
            CardSide::Front => StyleId::resolve(&self.front_style_id, side),
            CardSide::Back => StyleId::resolve(&self.back_style_id, side),
        }
    }
}

/// A card face pre-rendered by the layout renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedCardImage {
    pub style_id: String,
    pub side: CardSide,
    /// Base64 PNG, optionally wrapped in a `data:image/png;base64,` URL.
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Card width in millimetres.
    pub width: f64,
    /// Card height in millimetres.
    pub height: f64,
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
    #[serde(default)]
    pub paper_size: PaperSize,
    #[serde(default)]
    pub draw_cut_guides: bool,
    #[serde(default)]
    pub rendered_cards: Vec<RenderedCardImage>,
}

impl Deck {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            width,
            height,
            cards: Vec::new(),
            fields: Vec::new(),
            paper_size: PaperSize::default(),
            draw_cut_guides: false,
            rendered_cards: Vec::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        let mut deck: Deck = serde_json::from_str(json)?;
        deck.normalize_fields();
        Ok(deck)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("Failed to read deck from '{}': {}", path.display(), e),
            )
        })?;
        Self::from_json(&json)
    }

    pub fn card_size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Number of cards after expanding repeat counts.
    pub fn total_copies(&self) -> usize {
        self.cards.iter().map(Card::copies).sum()
    }

    /// Turns text values of image-typed fields into image references.
    pub fn normalize_fields(&mut self) {
        let image_fields: Vec<&str> = self
            .fields
            .iter()
            .filter(|f| f.kind == FieldKind::Image)
            .map(|f| f.name.as_str())
            .collect();
        if image_fields.is_empty() {
            return;
        }

        for card in &mut self.cards {
            for name in &image_fields {
                if let Some(value) = card.data.get_mut(*name)
                    && let FieldValue::Text(path) = value
                    && !path.is_empty()
                {
                    *value = FieldValue::Image(ImageRef {
                        path: std::mem::take(path),
                    });
                }
            }
        }
    }
}
