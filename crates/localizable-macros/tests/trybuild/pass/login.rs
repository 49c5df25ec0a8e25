#![allow(non_snake_case, non_camel_case_types)]

use localizable::localizable;

#[localizable]
mod Login {
    enum Strings {
        welcome,
        title(String),
        message { msg1: String, msg2: i32 },
    }
}

fn main() {
    let welcome: &String = &Login::welcome;
    let title: String = Login::title("Ada".to_string());
    let message: String = Login::message("Ada".to_string(), 3);

    assert_eq!(welcome, "Login.welcome");
    assert_eq!(title, "Login.title Ada");
    assert_eq!(message, "Login.message Ada 3");
}
