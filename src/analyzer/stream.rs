//! # Token Stream
//!
//! An immutable, shared view over the suffix of a token buffer. Consuming a
//! token never mutates the stream; [`TokenStream::tail`] hands back a new view
//! that shares the same buffer and starts one token further along.

use std::fmt;
use std::rc::Rc;

/// Immutable suffix view over a shared token buffer.
///
/// Cloning is O(1): only the reference count and the offset are copied.
pub struct TokenStream<T> {
    tokens: Rc<[T]>,
    position: usize,
}

impl<T> TokenStream<T> {
    pub fn new(tokens: impl Into<Rc<[T]>>) -> Self {
        Self {
            tokens: tokens.into(),
            position: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Number of tokens left in the view.
    pub fn len(&self) -> usize {
        self.tokens.len().saturating_sub(self.position)
    }

    pub fn head(&self) -> Option<&T> {
        self.tokens.get(self.position)
    }

    /// The stream without its first token, or `None` when already empty.
    pub fn tail(&self) -> Option<Self> {
        if self.is_empty() {
            None
        } else {
            Some(Self {
                tokens: Rc::clone(&self.tokens),
                position: self.position + 1,
            })
        }
    }

    /// Offset of the first remaining token in the underlying buffer.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> &[T] {
        self.tokens.get(self.position..).unwrap_or(&[])
    }
}

impl TokenStream<char> {
    /// Collects the remaining characters back into a `String`.
    pub fn as_string(&self) -> String {
        self.remaining().iter().collect()
    }
}

impl<T> Clone for TokenStream<T> {
    fn clone(&self) -> Self {
        Self {
            tokens: Rc::clone(&self.tokens),
            position: self.position,
        }
    }
}

// Two views are equal when their remaining tokens are equal, regardless of
// which buffer or offset they come from.
impl<T: PartialEq> PartialEq for TokenStream<T> {
    fn eq(&self, other: &Self) -> bool {
        self.remaining() == other.remaining()
    }
}

impl<T: fmt::Debug> fmt::Debug for TokenStream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenStream")
            .field("position", &self.position)
            .field("remaining", &self.remaining())
            .finish()
    }
}

impl From<&str> for TokenStream<char> {
    fn from(text: &str) -> Self {
        Self::new(text.chars().collect::<Vec<_>>())
    }
}

impl From<String> for TokenStream<char> {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

impl<T> From<Vec<T>> for TokenStream<T> {
    fn from(tokens: Vec<T>) -> Self {
        Self::new(tokens)
    }
}

impl<T: Clone> From<&[T]> for TokenStream<T> {
    fn from(tokens: &[T]) -> Self {
        Self::new(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_and_tail() {
        let stream = TokenStream::from("ab");
        assert_eq!(stream.head(), Some(&'a'));
        assert_eq!(stream.len(), 2);

        let rest = stream.tail().unwrap();
        assert_eq!(rest.head(), Some(&'b'));
        assert_eq!(rest.position(), 1);

        let empty = rest.tail().unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.head(), None);
        assert!(empty.tail().is_none());
    }

    #[test]
    fn test_tail_leaves_original_untouched() {
        let stream = TokenStream::from(vec![1, 2, 3]);
        let _ = stream.tail();
        assert_eq!(stream.remaining(), &[1, 2, 3]);
        assert_eq!(stream.position(), 0);
    }

    #[test]
    fn test_equality_compares_remaining_tokens() {
        let long = TokenStream::from("xcd").tail().unwrap();
        let short = TokenStream::from("cd");
        assert_eq!(long, short);
        assert_eq!(long.as_string(), "cd");
        assert_ne!(long.position(), short.position());
    }

    #[test]
    fn test_empty_stream() {
        let stream: TokenStream<char> = TokenStream::from("");
        assert!(stream.is_empty());
        assert_eq!(stream.len(), 0);
        assert_eq!(stream.remaining(), &[] as &[char]);
    }
}
