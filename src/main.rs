//! # BLB
//!
//! Command-line interpreter for BLB scripts.

fn main() {
    std::process::exit(blb::term::main());
}
