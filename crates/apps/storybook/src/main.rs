//! Binary entrypoint for the browser-hosted story catalog.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    storybook::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "The story catalog runs in the browser. Build `storybook` for wasm32 with the `csr` feature."
    );
}
