use std::sync::Arc;

/// Strict identity comparison used for change detection.
///
/// Primitive values (numbers, `bool`, `char`, strings, `()`) are the same when
/// they are equal. Shared composites held in an [`Arc`] are the same only when
/// both point at the same allocation: two `Arc`s with equal contents are still
/// different values. There is deliberately no impl for owned collections such
/// as `Vec` or `HashMap`, since no deep comparison is ever performed.
///
/// A `set` whose candidate is the same as the current value is a no-op:
/// nothing is persisted and no listener runs.
pub trait Same {
    fn same(&self, other: &Self) -> bool;
}

/// Implements [`Same`] by `==` for primitive-like types.
///
/// ```rust
/// use keepsake_signals::same_by_value;
///
/// #[derive(Clone, Copy, PartialEq)]
/// enum Theme { Light, Dark }
/// same_by_value!(Theme);
/// ```
#[macro_export]
macro_rules! same_by_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Same for $ty {
                fn same(&self, other: &Self) -> bool { self == other }
            }
        )*
    };
}

same_by_value!(bool, char, (), String, &'static str);
same_by_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<T: Same> Same for Option<T> {
    fn same(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.same(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: ?Sized> Same for Arc<T> {
    fn same(&self, other: &Self) -> bool { Arc::ptr_eq(self, other) }
}
