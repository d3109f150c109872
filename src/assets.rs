use std::borrow::Cow;

use gpui::{AssetSource, Result, SharedString};
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;

/// Path of the app logo inside the asset source.
pub const LOGO: &str = "logo/logo.svg";

#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "logo/**/*.svg"]
#[include = "logo/**/*.png"]
pub struct EmbeddedAssets;

/// App assets layered over gpui-component's icon set.
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }

        if let Some(file) = EmbeddedAssets::get(path) {
            return Ok(Some(file.data));
        }

        let component_assets = ComponentAssets;
        component_assets.load(path)
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let component_assets = ComponentAssets;
        let mut entries = component_assets.list(path)?;

        for entry in EmbeddedAssets::iter().filter(|p| p.starts_with(path)) {
            entries.push(entry.into());
        }

        entries.sort();
        entries.dedup();
        Ok(entries)
    }
}
