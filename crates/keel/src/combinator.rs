//! Function combinators.

/// Wrap `value` into a unary function that ignores its argument and always
/// yields `value`.
///
/// The returned closure is pure and has no failure modes; closures produced
/// by separate calls are independent of each other.
///
/// ```
/// let five = keel::constant(5);
/// assert_eq!(five("ignored"), 5);
/// assert_eq!(five("also ignored"), 5);
/// ```
///
/// The closure clones the captured value on each call. When the caller needs
/// every invocation to yield the *same* value by identity, capture an
/// `Rc`/`Arc`: cloning a shared pointer preserves identity of the pointee.
///
/// ```
/// use std::sync::Arc;
///
/// let shared = Arc::new(vec![1, 2, 3]);
/// let f = keel::constant(Arc::clone(&shared));
/// assert!(Arc::ptr_eq(&f(()), &shared));
/// ```
pub fn constant<A, T: Clone>(value: T) -> impl Fn(A) -> T + Clone {
    move |_| value.clone()
}
