use polytag::datatype::{N0, N1, N2, N3, N4, N8, N9, N16, N27, N81};
use polytag::dispatch::True;
use polytag::typeclass::{equal, power};

fn main() {
    let _: N1 = power(N2, N0);
    let _: N16 = power(N2, N4);
    let _: N81 = power(N3, N4);
    let _: True = equal(&power(N3, N3), &N27);
    let _: True = equal(&power(N2, N3), &N8);
    let _: True = equal(&power(N3, N2), &N9);
    assert_eq!(power(2u64, N8), 256);
    assert_eq!(power(-2i8, N3), -8);
}
