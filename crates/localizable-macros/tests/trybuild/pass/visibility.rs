#![allow(non_snake_case, non_camel_case_types)]

mod screens {
    use localizable::localizable;

    #[localizable]
    pub mod Home {
        enum Strings {
            headline,
        }
    }

    #[localizable]
    pub(crate) mod Settings {
        enum Strings {
            r#type,
            toggle(bool),
        }
    }
}

fn main() {
    assert_eq!(*screens::Home::headline, "Home.headline");
    assert_eq!(*screens::Settings::r#type, "Settings.type");
    assert_eq!(screens::Settings::toggle(true), "Settings.toggle true");
}
