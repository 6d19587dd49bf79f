mod cmac;
mod ctr;
mod dbl;
mod s2v;
mod util;

pub use cmac::Cmac;
pub use ctr::{counter_block, ctr_core_parallel, ctr_core_serial, ctr_encrypt};
pub use dbl::dbl;
pub use s2v::s2v;
#[cfg(test)]
pub(crate) use util::test_util;
