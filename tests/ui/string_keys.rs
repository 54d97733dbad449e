use polytag::dispatch::{False, True};
use polytag::typeclass::{equal, less};
use polytag::{map, set, string};

fn main() {
    let fields = set!(string!("id"), string!("name"));
    let _: True = fields.contains(&string!("name"));
    let _: False = fields.contains(&string!("email"));
    let _: True = less(&string!("id"), &string!("name"));

    let row = map! { string!("id") => 7u32, string!("name") => "ada" };
    assert_eq!(*row.at_key(&string!("name")), "ada");
    assert!(equal(&string!("id"), &"id"));
}
