//! Output side: the table encoding and the prelude that undoes it.
pub mod codec;
pub mod prelude;
