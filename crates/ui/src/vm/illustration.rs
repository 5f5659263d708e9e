use dioxus::prelude::*;
use quiz_core::model::Illustration;

const EAR: Asset = asset!("/assets/ear.svg");

fn bundled(path: &str) -> Option<Asset> {
    match path {
        "/assets/ear.svg" => Some(EAR),
        _ => None,
    }
}

/// The `src` an `<img>` needs for a question illustration.
///
/// Bundled pictures go through the asset pipeline. Unknown asset paths are
/// passed through as-is.
#[must_use]
pub fn illustration_src(illustration: &Illustration) -> String {
    match illustration {
        Illustration::Remote(url) => url.to_string(),
        Illustration::Asset(path) => {
            bundled(path).map_or_else(|| path.clone(), |asset| asset.to_string())
        }
    }
}
