mod assert;

pub(crate) use assert::AssertCapacity;
