mod utils;

mod bits;
mod f80;
mod log;
