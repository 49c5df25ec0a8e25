#![allow(non_snake_case, non_camel_case_types)]

use std::sync::LazyLock;

use localizable::{Bundle, localizable};

static FRENCH: LazyLock<Bundle> = LazyLock::new(|| {
    Bundle::new()
        .with("Cart.empty", "Votre panier est vide")
        .with("Cart.items", "{0} articles")
});

#[localizable(bundle = crate::FRENCH)]
pub mod Cart {
    enum Keys {
        empty,
        items(u32),
    }
}

fn main() {
    assert_eq!(*Cart::empty, "Votre panier est vide");
    assert_eq!(Cart::items(3), "3 articles");
}
