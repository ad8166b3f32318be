//! Offset/length windows over a collection's insertion order.
//!
//! Ranging is permissive: out-of-range values shrink the page instead of
//! failing.
//!
//! | Input | Effect |
//! |-------|--------|
//! | no `offset` | start at 0 |
//! | negative `offset` | same as 0 |
//! | `offset >= len` | empty page |
//! | no `length` | everything from `offset` to the end |
//! | `length` past the end | the remaining items only |
//! | `length <= 0` | empty page |

use std::ops::Range;

use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Window {
    #[serde(default)]
    pub offset: Option<i64>,
    #[serde(default)]
    pub length: Option<i64>,
}

impl Window {
    /// The whole collection.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn new(offset: Option<i64>, length: Option<i64>) -> Self {
        Self { offset, length }
    }

    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn length(mut self, length: i64) -> Self {
        self.length = Some(length);
        self
    }

    /// Index range this window selects out of `total` items.
    pub fn bounds(&self, total: usize) -> Range<usize> {
        let start = clamp_to_usize(self.offset.unwrap_or(0)).min(total);
        let end = match self.length {
            None => total,
            Some(length) => start.saturating_add(clamp_to_usize(length)).min(total),
        };
        start..end
    }

    /// Copies the selected items out of an ordered sequence.
    pub fn apply<'a, T, I>(&self, items: I) -> Vec<T>
    where
        T: Clone + 'a,
        I: ExactSizeIterator<Item = &'a T>,
    {
        let range = self.bounds(items.len());
        items
            .skip(range.start)
            .take(range.end - range.start)
            .cloned()
            .collect()
    }
}

fn clamp_to_usize(value: i64) -> usize {
    usize::try_from(value.max(0)).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<u32> {
        vec![10, 20, 30]
    }

    fn page(window: Window) -> Vec<u32> {
        window.apply(items().iter())
    }

    #[test]
    fn test_default_is_everything() {
        assert_eq!(page(Window::all()), vec![10, 20, 30]);
    }

    #[test]
    fn test_offset() {
        assert_eq!(page(Window::all().offset(1)), vec![20, 30]);
        assert_eq!(page(Window::all().offset(2)), vec![30]);
    }

    #[test]
    fn test_negative_offset_is_zero() {
        assert_eq!(page(Window::all().offset(-1)), page(Window::all()));
        assert_eq!(page(Window::all().offset(i64::MIN)), vec![10, 20, 30]);
    }

    #[test]
    fn test_offset_past_end_is_empty() {
        assert!(page(Window::all().offset(3)).is_empty());
        assert!(page(Window::all().offset(4)).is_empty());
        assert!(page(Window::all().offset(i64::MAX)).is_empty());
    }

    #[test]
    fn test_length() {
        assert_eq!(page(Window::all().length(2)), vec![10, 20]);
        assert_eq!(page(Window::new(Some(1), Some(1))), vec![20]);
    }

    #[test]
    fn test_length_past_end_is_truncated() {
        assert_eq!(page(Window::new(Some(1), Some(10))), vec![20, 30]);
        assert_eq!(page(Window::all().length(i64::MAX)), vec![10, 20, 30]);
    }

    #[test]
    fn test_non_positive_length_is_empty() {
        assert!(page(Window::all().length(0)).is_empty());
        assert!(page(Window::all().length(-3)).is_empty());
    }

    #[test]
    fn test_bounds_on_empty() {
        assert_eq!(Window::all().bounds(0), 0..0);
        assert_eq!(Window::new(Some(5), Some(5)).bounds(0), 0..0);
    }

    #[test]
    fn test_matches_slice_formula() {
        let full = items();
        for o in -2i64..5 {
            for l in 0i64..5 {
                let start = (o.max(0) as usize).min(full.len());
                let end = (start + l as usize).min(full.len());
                assert_eq!(
                    page(Window::new(Some(o), Some(l))),
                    full[start..end].to_vec(),
                    "offset={o} length={l}"
                );
            }
        }
    }
}
