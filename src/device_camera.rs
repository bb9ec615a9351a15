pub mod impl_fake;
#[cfg(test)]
pub mod impl_manual;
pub mod impl_unavailable;
pub mod interface;
