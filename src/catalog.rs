use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

const CATALOG_FILE: &str = "catalog.json";
const EMBED_BASE: &str = "https://www.youtube.com/embed";

static GLOBAL_CATALOG: LazyLock<Catalog> = LazyLock::new(|| match Catalog::embedded() {
    Ok(catalog) => catalog,
    Err(e) => {
        log::error!("showcase will be empty: {e}");
        Catalog::default()
    }
});

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoEntry {
    pub id: String,
    pub title: String,
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog file `{0}` is not embedded")]
    Missing(&'static str),
    #[error("couldn't parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Everything one showcase card needs to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoCardModel {
    pub key: String,
    pub embed_src: String,
    pub title: String,
}

/// Showcased videos, in display order. Fixed at build time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<VideoEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<VideoEntry>) -> Self {
        Self { entries }
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries = serde_json::from_str::<Vec<VideoEntry>>(json)?;
        Ok(Self { entries })
    }

    fn embedded() -> Result<Self, CatalogError> {
        let file = Content::get(CATALOG_FILE).ok_or(CatalogError::Missing(CATALOG_FILE))?;
        let entries = serde_json::from_slice::<Vec<VideoEntry>>(&file.data)?;
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[VideoEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cards(&self) -> Vec<VideoCardModel> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, v)| VideoCardModel {
                key: card_key(&v.id, i),
                embed_src: embed_address(&v.id),
                title: v.title.clone(),
            })
            .collect()
    }
}

/// The catalog baked into the bundle. Empty if the file was missing or bad.
pub fn catalog() -> &'static Catalog {
    &GLOBAL_CATALOG
}

/// Player URL for a video id. The id is not validated; a bad one just gives
/// a broken player.
pub fn embed_address(id: &str) -> String {
    format!("{EMBED_BASE}/{id}")
}

/// Position is part of the key so repeated ids still render as separate cards.
pub fn card_key(id: &str, index: usize) -> String {
    format!("{id}-{index}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn entry(id: &str, title: &str) -> VideoEntry {
        VideoEntry {
            id: id.to_string(),
            title: title.to_string(),
        }
    }

    #[test]
    fn test_embedded_catalog() {
        let embedded = Catalog::embedded().expect("embedded catalog should parse");
        let ids = embedded
            .entries()
            .iter()
            .map(|v| v.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            ids,
            vec!["xNd09a37CaI", "MyjGcAiahD8", "1hoJvUbRst0", "FwsRagXM63Q"]
        );
        assert_eq!(embedded.entries()[1].title, "random but funny");
        assert_eq!(catalog(), &embedded);
    }

    #[test]
    fn test_two_entry_scenario() {
        let catalog = Catalog::new(vec![entry("abc123", "A"), entry("def456", "B")]);
        let cards = catalog.cards();
        assert_eq!(cards.len(), 2);
        assert!(cards[0].embed_src.ends_with("/abc123"));
        assert!(cards[1].embed_src.ends_with("/def456"));
        assert_eq!(cards[0].title, "A");
        assert_eq!(cards[1].title, "B");
    }

    #[test]
    fn test_one_card_per_entry_with_distinct_keys() {
        let catalog = Catalog::new(vec![
            entry("dup", "First"),
            entry("other", "Second"),
            entry("dup", "Third"),
        ]);
        let cards = catalog.cards();
        assert_eq!(cards.len(), catalog.len());
        let keys = cards.iter().map(|c| c.key.as_str()).collect::<HashSet<_>>();
        assert_eq!(keys.len(), 3);
        assert_eq!(cards[0].key, "dup-0");
        assert_eq!(cards[2].key, "dup-2");
        for (card, v) in cards.iter().zip(catalog.entries()) {
            assert!(card.embed_src.contains(&v.id));
        }
    }

    #[test]
    fn test_embed_address_is_verbatim() {
        assert_eq!(
            embed_address("xNd09a37CaI"),
            "https://www.youtube.com/embed/xNd09a37CaI"
        );
        // no validation or escaping
        assert_eq!(
            embed_address("not a/real id"),
            "https://www.youtube.com/embed/not a/real id"
        );
    }

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(r#"[{"id":"abc123","title":"A"}]"#)
            .expect("should parse valid catalog");
        assert_eq!(catalog.entries(), &[entry("abc123", "A")]);

        let empty = Catalog::from_json("[]").expect("should parse empty catalog");
        assert!(empty.is_empty());
        assert!(empty.cards().is_empty());
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        let err = Catalog::from_json(r#"[{"id":"abc123"}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
        let err = Catalog::from_json("not json").unwrap_err();
        assert!(err.to_string().starts_with("couldn't parse catalog"));
    }
}
