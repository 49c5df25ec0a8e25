#![allow(dead_code, non_snake_case)]

use localizable::localizable;

#[localizable(bundle = crate::NOPE)]
mod Account {
    struct Strings;
}

struct Profile;

#[localizable]
impl Profile {
    fn new() -> Self {
        Profile
    }
}

fn main() {}
