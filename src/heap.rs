/// Anything that can be stored in a heap. Lower orders have higher priority.
///
/// `order` must be a pure function of the element for as long as it sits in
/// a heap; changing it in place breaks the heap ordering silently.
pub trait Orderable {
    fn order(&self) -> i64;
}

pub trait PriorityQueue<T: Orderable> {
    fn peek(&self) -> Option<&T>;
    /// Returns the element evicted to stay within capacity, if any.
    fn push(&mut self, element: T) -> Option<T>;
    fn pop(&mut self) -> Option<T>;
    fn size(&self) -> usize;
}
