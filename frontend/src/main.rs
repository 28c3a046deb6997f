//! Entry point for the WASM application

pub fn main() {
    reviewhi_frontend::start();
}
