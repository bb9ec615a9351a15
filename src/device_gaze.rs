pub mod impl_fixed;
pub mod interface;
