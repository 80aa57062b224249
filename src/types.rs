//! Core data structures for segmented domain labels.

use serde::Serialize;

/// Classification of a label fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenKind {
    /// Label separator. Reserved: separators are implied by level grouping
    /// and never emitted.
    Dot,
    /// A run of `-` or `_` characters.
    Dash,
    /// A run of ASCII digits.
    Number,
    /// A run of letters, split into dictionary words.
    Latin,
    /// Any other run of characters.
    Symbol,
}

/// One classified fragment ("stub") of a label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    /// The label substring this token was derived from
    pub text: String,
    /// 1-based label level, counted from the rightmost label
    pub level: usize,
    /// Fragment classification
    pub kind: TokenKind,
    /// Ordered pieces; a single run for non-letter kinds, words for `Latin`
    pub parts: Vec<String>,
}

impl Token {
    /// Create a token whose only part is its own text.
    pub fn run(text: &str, level: usize, kind: TokenKind) -> Self {
        Self {
            text: text.to_string(),
            level,
            kind,
            parts: vec![text.to_string()],
        }
    }

    /// Create a letter token from a word segmentation of `text`.
    pub fn latin(text: &str, level: usize, words: Vec<String>) -> Self {
        Self {
            text: text.to_string(),
            level,
            kind: TokenKind::Latin,
            parts: words,
        }
    }

    /// Rating of this token's parts. See [`rating`].
    pub fn rating(&self) -> f64 {
        rating(&self.parts)
    }

    /// Concatenate all parts.
    pub fn joined(&self) -> String {
        self.parts.concat()
    }
}

/// Rate a word sequence: each part contributes `1 / len`, empty parts
/// contribute 2. Fewer, longer words rate lower.
///
/// Only meaningful for comparing segmentations of the same letter run.
pub fn rating<S: AsRef<str>>(parts: &[S]) -> f64 {
    parts
        .iter()
        .map(|part| match part.as_ref().len() {
            0 => 2.0,
            len => 1.0 / len as f64,
        })
        .sum()
}

/// Token lists per label level, finalized once a domain has been parsed.
///
/// Level `n` is stored at index `n - 1`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LevelMap {
    levels: Vec<Vec<Token>>,
}

impl LevelMap {
    pub(crate) fn new(levels: Vec<Vec<Token>>) -> Self {
        Self { levels }
    }

    /// Tokens for a 1-based level.
    pub fn get(&self, level: usize) -> Option<&[Token]> {
        level
            .checked_sub(1)
            .and_then(|index| self.levels.get(index))
            .map(Vec::as_slice)
    }

    /// Number of levels.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Whether there are no levels.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Iterate `(level, tokens)` pairs from level 1 upwards.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Token])> {
        self.levels
            .iter()
            .enumerate()
            .map(|(index, tokens)| (index + 1, tokens.as_slice()))
    }

    /// Join every part of every token at `level`, in label order.
    pub fn reconstruct(&self, level: usize) -> Option<String> {
        self.get(level)
            .map(|tokens| tokens.iter().map(Token::joined).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_prefers_longer_words() {
        assert_eq!(rating(&["shits"]), 0.2);
        assert_eq!(rating(&["shit", "s"]), 1.25);
        assert!(rating(&["shits"]) < rating(&["shit", "s"]));
    }

    #[test]
    fn test_rating_empty_part() {
        assert_eq!(rating(&[""]), 2.0);
        assert_eq!(rating::<&str>(&[]), 0.0);
    }

    #[test]
    fn test_token_constructors() {
        let number = Token::run("42", 2, TokenKind::Number);
        assert_eq!(number.parts, vec!["42".to_string()]);
        assert_eq!(number.joined(), "42");

        let word = Token::latin("mail", 3, vec!["ma".to_string(), "il".to_string()]);
        assert_eq!(word.kind, TokenKind::Latin);
        assert_eq!(word.joined(), "mail");
        assert_eq!(word.rating(), 1.0);
    }

    #[test]
    fn test_level_map_access() {
        let map = LevelMap::new(vec![
            vec![Token::latin("com", 1, vec!["com".to_string()])],
            vec![
                Token::latin("mp", 2, vec!["m".to_string(), "p".to_string()]),
                Token::run("3", 2, TokenKind::Number),
            ],
        ]);

        assert_eq!(map.len(), 2);
        assert!(!map.is_empty());
        assert!(map.get(0).is_none());
        assert!(map.get(3).is_none());
        assert_eq!(map.get(2).unwrap().len(), 2);
        assert_eq!(map.reconstruct(2).unwrap(), "mp3");

        let levels: Vec<usize> = map.iter().map(|(level, _)| level).collect();
        assert_eq!(levels, vec![1, 2]);
    }

    #[test]
    fn test_token_kind_serialization() {
        let json = serde_json::to_string(&TokenKind::Latin).unwrap();
        assert_eq!(json, "\"LATIN\"");
    }
}
