//! `drop_while`: skip the longest prefix satisfying a predicate.

use super::bounded::PassThrough;
use super::lookahead::Lookahead;

/// Discards elements from the front of `source` while `predicate` holds,
/// then yields the first element for which it failed followed by the rest.
///
/// The discarding happens when the cursor is created; the predicate is not
/// kept afterwards.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::iter::drop_while;
///
/// let rest: Vec<i32> = drop_while(vec![1, 3, 2], |value| *value < 3).collect();
/// assert_eq!(rest, vec![3, 2]);
/// ```
pub fn drop_while<I, P>(source: I, mut predicate: P) -> PassThrough<I::IntoIter>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let mut source = source.into_iter();
    let mut slot = Lookahead::Exhausted;
    for element in source.by_ref() {
        if !predicate(&element) {
            slot = Lookahead::Buffered(element);
            break;
        }
    }
    PassThrough::new(source, slot)
}
