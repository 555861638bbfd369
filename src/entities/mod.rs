pub mod dish;
pub mod order;

/// A stored record addressable by its collection-unique id.
pub trait Entity: Clone + Send + Sync {
    fn id(&self) -> &str;
}
