#![allow(non_snake_case, non_camel_case_types)]

use localizable::localizable;

#[localizable]
mod Beta {
    enum Strings {
        /// Always available.
        banner,
        #[cfg(any())]
        preview(NotDefinedAnywhere),
        #[cfg(all())]
        invite(String),
    }
}

fn main() {
    assert_eq!(*Beta::banner, "Beta.banner");
    assert_eq!(Beta::invite("Ada".to_string()), "Beta.invite Ada");
}
