//! Image URL helpers.
//!
//! Catalog records store bare image filenames; the server exposes the asset
//! directory under `/images`. Keeping the join in one place means the mount
//! point can move without touching page markup.

#[cfg(test)]
#[path = "assets_test.rs"]
mod assets_test;

/// Mount point the server serves wedding imagery from.
pub const IMAGE_BASE: &str = "/images";

/// URL for a catalog image filename.
pub fn image_url(name: &str) -> String {
    join_base(IMAGE_BASE, name)
}

/// Join a base path and a file name without doubling slashes.
pub fn join_base(base: &str, name: &str) -> String {
    let base = base.trim_end_matches('/');
    let name = name.trim_start_matches('/');
    if name.is_empty() {
        return base.to_owned();
    }
    format!("{base}/{name}")
}
