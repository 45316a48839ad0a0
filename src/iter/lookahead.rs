//! The one-slot state machine shared by the buffering cursors.
//!
//! ```text
//!              advance (element accepted)
//!   Pending ───────────────────────────────► Buffered(value)
//!      │  ▲                                        │
//!      │  └──────────── next() takes value ────────┘
//!      │
//!      │ advance (source exhausted or rule says stop)
//!      ▼
//!   Exhausted   (terminal)
//! ```

/// The state of a cursor's single lookahead slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookahead<T> {
    /// Nothing is buffered and the source has not been asked yet.
    Pending,
    /// The next element to yield.
    Buffered(T),
    /// The cursor will never yield again.
    Exhausted,
}

impl<T> Default for Lookahead<T> {
    fn default() -> Self {
        Self::Pending
    }
}

impl<T> Lookahead<T> {
    /// Returns `true` if the slot must be refilled before it can be inspected.
    #[inline]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns `true` if an element is waiting to be yielded.
    #[inline]
    pub const fn is_buffered(&self) -> bool {
        matches!(self, Self::Buffered(_))
    }

    /// Returns `true` once the cursor has finished.
    #[inline]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }

    /// Builds the slot from the result of pulling one element.
    #[inline]
    pub fn from_pulled(pulled: Option<T>) -> Self {
        pulled.map_or(Self::Exhausted, Self::Buffered)
    }

    /// Takes the buffered element, leaving the slot `Pending`.
    ///
    /// `Exhausted` stays `Exhausted`; taking from a `Pending` slot yields
    /// nothing and leaves it `Pending`.
    #[inline]
    pub fn take_buffered(&mut self) -> Option<T> {
        match std::mem::take(self) {
            Self::Buffered(value) => Some(value),
            Self::Exhausted => {
                *self = Self::Exhausted;
                None
            }
            Self::Pending => None,
        }
    }
}

/// A cursor driven by a single `advance` transition.
///
/// Implementors only describe how to refill the slot; `poll_next` and
/// `poll_has_next` give them `Iterator::next` and `Cursor::has_next`.
pub(crate) trait Advance {
    type Element;

    fn slot(&mut self) -> &mut Lookahead<Self::Element>;

    /// Moves the slot out of `Pending`.
    fn advance(&mut self);

    fn poll_has_next(&mut self) -> bool {
        if self.slot().is_pending() {
            self.advance();
        }
        self.slot().is_buffered()
    }

    fn poll_next(&mut self) -> Option<Self::Element> {
        if self.slot().is_pending() {
            self.advance();
        }
        self.slot().take_buffered()
    }
}
