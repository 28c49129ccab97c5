//! Behavior semantics for `RingBuffer`.

/// Tagging trait for providing behaviors to `RingBuffer`.
pub trait Behavior {}

/// Behavior for `RingBuffer` that specifies wrapping write semantics.
///
/// ### Pushing to back:
///
/// Pushing elements to the **back** of a buffer that **has already reached its capacity**
/// causes it to **overwrite** existing elements from the **front**.
///
/// ### Pushing to front:
///
/// Pushing elements to the **front** of a buffer that **has already reached its capacity**
/// causes it to **overwrite** existing elements from the **back**.
///
/// ### Inserting:
///
/// Inserting into a full buffer **exits early, without performing any mutation**.
pub struct Wrapping;
impl Behavior for Wrapping {}

/// Behavior for `RingBuffer` that specifies growing write semantics.
///
/// Any write into a buffer that **has already reached its capacity** first
/// **doubles** the capacity, keeping every existing element in order.
pub struct Growing;
impl Behavior for Growing {}
