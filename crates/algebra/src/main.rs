//! Prints the sample expressions under every algebra.

fn main() {
    print!("{}", objalg_algebra::report());
}
