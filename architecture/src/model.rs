use uuid::Uuid;

/// Aggregate root marker.
///
/// Repositories only deal in aggregate roots; child entities travel inside them.
pub trait AggregateRoot {
    /// Stable identity of the aggregate.
    fn id(&self) -> Uuid;
}

/// Implements [`AggregateRoot`] for structs carrying a `pub id: Uuid` field.
/// ```ignore
/// aggregate_root!(Order, Rab);
/// ```
#[macro_export]
macro_rules! aggregate_root {
    ($($ty:ty),* $(,)?) => {
        $(impl $crate::model::AggregateRoot for $ty {
            fn id(&self) -> $crate::__private::Uuid {
                self.id
            }
        })*
    };
}
