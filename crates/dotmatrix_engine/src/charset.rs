use std::collections::{btree_map, BTreeMap};

use crate::{EngineError, Glyph, GlyphSize, Result};

/// U+FFFD, drawn in place of characters missing from a set
pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// Mapping from character to glyph, iterated in key order.
///
/// The glyph dimensions are stored explicitly. They are unknown while the
/// set is empty, get fixed by the first inserted glyph and are inferred from
/// the first key when a set is built from loaded content.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharacterSet {
    glyphs: BTreeMap<char, Glyph>,
    size: Option<GlyphSize>,
}

impl CharacterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from already parsed glyphs without checking their shape.
    pub fn from_glyphs(glyphs: BTreeMap<char, Glyph>) -> Self {
        let size = glyphs.values().next().map(Glyph::size);
        Self { glyphs, size }
    }

    /// Parses the persisted JSON form (`{"A": ["010", ...], ...}`).
    ///
    /// Keys must be single characters and rows may only contain `'0'`/`'1'`.
    /// Row and glyph lengths are not checked, see [`CharacterSet::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(json)?;
        let mut glyphs = BTreeMap::new();
        for (key, rows) in raw {
            let mut chars = key.chars();
            let ch = match (chars.next(), chars.next()) {
                (Some(ch), None) => ch,
                _ => return Err(EngineError::InvalidKey { key }),
            };
            glyphs.insert(ch, Glyph::from_bitstrings(&rows)?);
        }
        Ok(Self::from_glyphs(glyphs))
    }

    /// Compact JSON with keys in sorted order. Identical sets produce identical output.
    pub fn to_json(&self) -> Result<String> {
        let raw: BTreeMap<String, Vec<String>> = self.glyphs.iter().map(|(ch, glyph)| (ch.to_string(), glyph.to_bitstrings())).collect();
        Ok(serde_json::to_string(&raw)?)
    }

    /// Glyph dimensions, `None` while the set is empty.
    pub fn size(&self) -> Option<GlyphSize> {
        self.size
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.glyphs.contains_key(&ch)
    }

    pub fn get(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch)
    }

    /// Looks up `ch`, falling back to [`REPLACEMENT_CHARACTER`].
    /// Returns the key that was actually found.
    pub fn resolve(&self, ch: char) -> Option<(char, &Glyph)> {
        self.glyphs
            .get_key_value(&ch)
            .or_else(|| self.glyphs.get_key_value(&REPLACEMENT_CHARACTER))
            .map(|(key, glyph)| (*key, glyph))
    }

    pub fn iter(&self) -> btree_map::Iter<'_, char, Glyph> {
        self.glyphs.iter()
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.glyphs.keys().copied()
    }

    /// Adds or replaces the glyph for `ch` and returns the previous one.
    ///
    /// The first glyph of an empty set fixes the dimensions, later glyphs
    /// have to match them.
    pub fn insert(&mut self, ch: char, glyph: Glyph) -> Result<Option<Glyph>> {
        let actual = glyph.size();
        let expected = self.size.unwrap_or(actual);
        if !glyph.is_rectangular() || actual != expected {
            return Err(EngineError::DimensionMismatch { expected, actual });
        }
        self.size = Some(expected);
        Ok(self.glyphs.insert(ch, glyph))
    }

    /// Removing the last glyph makes the dimensions unknown again.
    pub fn remove(&mut self, ch: char) -> Option<Glyph> {
        let removed = self.glyphs.remove(&ch);
        if self.glyphs.is_empty() {
            self.size = None;
        }
        removed
    }

    pub fn clear(&mut self) {
        self.glyphs.clear();
        self.size = None;
    }

    /// Checks that every glyph is rectangular and has the set's dimensions.
    pub fn validate(&self) -> Result<()> {
        let Some(expected) = self.size else {
            return Ok(());
        };
        for glyph in self.glyphs.values() {
            if !glyph.is_rectangular() || glyph.size() != expected {
                return Err(EngineError::DimensionMismatch { expected, actual: glyph.size() });
            }
        }
        Ok(())
    }

    /// Checks every glyph against externally configured dimensions.
    /// An empty set is compatible with any size.
    pub fn validate_size(&self, expected: GlyphSize) -> Result<()> {
        for glyph in self.glyphs.values() {
            if !glyph.is_rectangular() || glyph.size() != expected {
                return Err(EngineError::DimensionConflict { expected, actual: glyph.size() });
            }
        }
        Ok(())
    }

    /// `key:value` lines sorted by key, the value being the JSON list of row strings.
    pub fn content_listing(&self) -> String {
        self.glyphs
            .iter()
            .map(|(ch, glyph)| {
                let rows = glyph.to_bitstrings().iter().map(|row| format!("\"{row}\"")).collect::<Vec<_>>().join(",");
                format!("{ch}:[{rows}]")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<'a> IntoIterator for &'a CharacterSet {
    type Item = (&'a char, &'a Glyph);
    type IntoIter = btree_map::Iter<'a, char, Glyph>;

    fn into_iter(self) -> Self::IntoIter {
        self.glyphs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(rows: &[&str]) -> Glyph {
        Glyph::from_bitstrings(rows).unwrap()
    }

    #[test]
    fn test_first_insert_fixes_size() {
        let mut charset = CharacterSet::new();
        assert_eq!(charset.size(), None);
        charset.insert('A', glyph(&["010", "111"])).unwrap();
        assert_eq!(charset.size(), Some(GlyphSize::new(2, 3)));

        let err = charset.insert('B', glyph(&["01", "11"])).unwrap_err();
        assert!(matches!(err, EngineError::DimensionMismatch { .. }));
        assert!(!charset.contains('B'));
    }

    #[test]
    fn test_remove_last_glyph_resets_size() {
        let mut charset = CharacterSet::new();
        charset.insert('A', glyph(&["1"])).unwrap();
        assert!(charset.remove('A').is_some());
        assert_eq!(charset.size(), None);
        charset.insert('B', glyph(&["11", "00"])).unwrap();
        assert_eq!(charset.size(), Some(GlyphSize::new(2, 2)));
    }

    #[test]
    fn test_keys_iterate_sorted() {
        let mut charset = CharacterSet::new();
        for ch in ['c', 'A', 'b', 'B'] {
            charset.insert(ch, glyph(&["1"])).unwrap();
        }
        assert_eq!(charset.chars().collect::<String>(), "ABbc");
    }

    #[test]
    fn test_resolve_falls_back_to_replacement() {
        let mut charset = CharacterSet::new();
        charset.insert('A', glyph(&["1"])).unwrap();
        assert!(charset.resolve('Z').is_none());

        charset.insert(REPLACEMENT_CHARACTER, glyph(&["0"])).unwrap();
        assert_eq!(charset.resolve('Z').map(|(ch, _)| ch), Some(REPLACEMENT_CHARACTER));
        assert_eq!(charset.resolve('A').map(|(ch, _)| ch), Some('A'));
    }

    #[test]
    fn test_from_json_rejects_multi_char_key() {
        assert!(matches!(CharacterSet::from_json(r#"{"AB": ["1"]}"#), Err(EngineError::InvalidKey { .. })));
    }

    #[test]
    fn test_validate_detects_ragged_entry() {
        let charset = CharacterSet::from_json(r#"{"A": ["01", "10"], "B": ["01", "1"]}"#).unwrap();
        assert!(matches!(charset.validate(), Err(EngineError::DimensionMismatch { .. })));
        assert!(matches!(charset.validate_size(GlyphSize::new(2, 2)), Err(EngineError::DimensionConflict { .. })));
    }

    #[test]
    fn test_content_listing() {
        let charset = CharacterSet::from_json(r#"{"B": ["10"], "A": ["01"]}"#).unwrap();
        assert_eq!(charset.content_listing(), "A:[\"01\"]\nB:[\"10\"]");
    }
}
