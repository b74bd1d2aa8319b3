//! Snapshot streams and distinct-value suppression
//!
//! Every reactive value in Summit travels as a [`StateStream<T>`]: a boxed,
//! `Send` `futures::Stream`. Streams are lazy, so nothing upstream runs until
//! a consumer polls, and dropping a stream releases the whole chain behind it.

use futures::stream::{BoxStream, Stream, StreamExt};
use std::pin::Pin;
use std::task::{Context, Poll};

/// A boxed stream of snapshots (or values derived from them).
pub type StateStream<T> = BoxStream<'static, T>;

/// Equality used to decide whether a derived value changed.
pub type EqFn<T> = fn(&T, &T) -> bool;

fn structural_eq<T: PartialEq>(a: &T, b: &T) -> bool {
    a == b
}

/// Stream adapter that suppresses consecutive equal items.
///
/// The first item is always forwarded. After that an item is forwarded only
/// if `eq(previous, item)` is false. The previous item is kept per adapter,
/// so two subscriptions to the same selector never share a cursor.
pub struct DistinctUntilChanged<St: Stream> {
    inner: St,
    last: Option<St::Item>,
    eq: EqFn<St::Item>,
}

// `last` is never pinned; only `inner` is polled through a pin.
impl<St: Stream + Unpin> Unpin for DistinctUntilChanged<St> {}

impl<St> DistinctUntilChanged<St>
where
    St: Stream + Unpin,
    St::Item: Clone,
{
    /// Wrap `inner`, comparing items with `eq`.
    pub fn with_eq(inner: St, eq: EqFn<St::Item>) -> Self {
        Self {
            inner,
            last: None,
            eq,
        }
    }
}

impl<St> DistinctUntilChanged<St>
where
    St: Stream + Unpin,
    St::Item: Clone + PartialEq,
{
    /// Wrap `inner`, comparing items structurally.
    pub fn new(inner: St) -> Self {
        Self::with_eq(inner, structural_eq::<St::Item>)
    }
}

impl<St> Stream for DistinctUntilChanged<St>
where
    St: Stream + Unpin,
    St::Item: Clone,
{
    type Item = St::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        loop {
            match Pin::new(&mut this.inner).poll_next(cx) {
                Poll::Ready(Some(item)) => {
                    let unchanged = this
                        .last
                        .as_ref()
                        .is_some_and(|prev| (this.eq)(prev, &item));
                    if unchanged {
                        continue;
                    }
                    this.last = Some(item.clone());
                    return Poll::Ready(Some(item));
                }
                Poll::Ready(None) => {
                    this.last = None;
                    return Poll::Ready(None);
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.inner.size_hint();
        (0, upper)
    }
}

/// Extension methods for projecting snapshot streams.
pub trait SelectExt: Stream + Sized {
    /// Suppress consecutive structurally-equal items.
    fn distinct_until_changed(self) -> DistinctUntilChanged<Self>
    where
        Self: Unpin,
        Self::Item: Clone + PartialEq,
    {
        DistinctUntilChanged::new(self)
    }

    /// Project each item through `f` and emit only on change.
    ///
    /// The projection runs lazily, once per upstream item, when the returned
    /// stream is polled.
    fn select<T, F>(self, f: F) -> StateStream<T>
    where
        Self: Send + 'static,
        T: Clone + PartialEq + Send + 'static,
        F: FnMut(Self::Item) -> T + Send + 'static,
    {
        DistinctUntilChanged::new(self.map(f).boxed()).boxed()
    }
}

impl<St: Stream + Sized> SelectExt for St {}
