use std::collections::VecDeque;
use std::fmt;

/// Frontier discipline, fixed for the duration of a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchMode {
    /// Breadth-first: push to the back, pop from the front.
    #[default]
    Queue,
    /// Depth-first: push to the front, pop from the front.
    Stack,
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Queue => f.write_str("queue"),
            Self::Stack => f.write_str("stack"),
        }
    }
}

/// Pending cells awaiting expansion.
///
/// Items are always taken from the front; [`SearchMode`] decides which end
/// new items join.
#[derive(Debug, Clone)]
pub struct Frontier<T> {
    mode: SearchMode,
    items: VecDeque<T>,
}

impl<T> Frontier<T> {
    /// Create an empty frontier.
    pub fn new(mode: SearchMode) -> Self {
        Self {
            mode,
            items: VecDeque::new(),
        }
    }

    #[inline]
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Change the discipline. Clears any pending items.
    pub fn set_mode(&mut self, mode: SearchMode) {
        self.mode = mode;
        self.items.clear();
    }

    #[inline]
    pub fn push(&mut self, item: T) {
        match self.mode {
            SearchMode::Queue => self.items.push_back(item),
            SearchMode::Stack => self.items.push_front(item),
        }
    }

    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
