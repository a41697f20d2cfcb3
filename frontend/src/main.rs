//! Entry point for the WASM application

pub fn main() {
    picdrop::mount();
}
