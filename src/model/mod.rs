mod atcoder;
mod codeforces;
mod common;
mod platform;
mod profile;
mod spoj;

pub use atcoder::*;
pub use codeforces::*;
pub use common::*;
pub use platform::*;
pub use profile::*;
pub use spoj::*;
