/// Post-monomorphization check on a ring's slot count.
///
/// Referencing [`AssertCapacity::VALID`] from a constructor turns an invalid
/// `N` into a compile error at the point the buffer type is instantiated.
pub(crate) struct AssertCapacity<const N: usize>;

impl<const N: usize> AssertCapacity<N> {
    pub(crate) const VALID: () = assert!(N > 2, "\nRing buffer size must be greater than 2");
}
