use polytag::datatype::{N1, N2};
use polytag::dispatch::True;
use polytag::typeclass::equal;
use polytag::{Struct, Tag, Tagged};

fn main() {
    #[derive(Struct)]
    struct Local<T>
    where
        T: Copy,
    {
        value: T,
    }

    #[derive(Struct)]
    struct Unit;

    #[derive(Tag, Tagged)]
    struct Marker;

    let _: True = equal(&Local { value: N1 }, &Local { value: N1 });
    let _: True = equal(&Unit, &Unit);
    assert!(!equal(&Local { value: 1u8 }, &Local { value: 2u8 }));
    let _ = (Marker, N2);
}
