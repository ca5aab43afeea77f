//! Page Configuration
//!
//! Endpoints and flags handed to the client by the server template as
//! `<body data-*>` attributes. Read once at boot.

use log::debug;

const DEFAULT_MODIFY_ITEM_URL_BASE: &str = "/modify_item/0";
const DEFAULT_REQUEST_TRANSFER_URL_BASE: &str = "/request_transfer/";
const DEFAULT_EXPORT_URL: &str = "/export_xlsx";
const DEFAULT_ADD_ITEM_URL: &str = "/add_item";
const DEFAULT_UPLOAD_URL: &str = "/upload_photos";
const DEFAULT_DELETE_PHOTO_URL_BASE: &str = "/delete_photos/";
const DEFAULT_UPLOADS_BASE: &str = "/static/uploads/colli/";

#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub is_authenticated: bool,
    /// Form action template; its trailing `0` is replaced by the item id
    pub modify_item_url_base: String,
    pub request_transfer_url_base: String,
    pub export_url: String,
    pub add_item_url: String,
    pub upload_url: String,
    pub delete_photo_url_base: String,
    /// Prefix for picture `src`, joined with the encoded file path
    pub uploads_base: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            is_authenticated: false,
            modify_item_url_base: DEFAULT_MODIFY_ITEM_URL_BASE.to_string(),
            request_transfer_url_base: DEFAULT_REQUEST_TRANSFER_URL_BASE.to_string(),
            export_url: DEFAULT_EXPORT_URL.to_string(),
            add_item_url: DEFAULT_ADD_ITEM_URL.to_string(),
            upload_url: DEFAULT_UPLOAD_URL.to_string(),
            delete_photo_url_base: DEFAULT_DELETE_PHOTO_URL_BASE.to_string(),
            uploads_base: DEFAULT_UPLOADS_BASE.to_string(),
        }
    }
}

impl PageConfig {
    /// Build from an attribute lookup (`name` without the `data-` prefix).
    /// Missing or blank values fall back to defaults.
    pub fn from_attributes(attr: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let pick = |name: &str, fallback: String| {
            attr(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(fallback)
        };

        Self {
            is_authenticated: attr("is-authenticated").as_deref() == Some("true"),
            modify_item_url_base: pick("modify-item-url-base", defaults.modify_item_url_base),
            request_transfer_url_base: pick("request-transfer-url-base", defaults.request_transfer_url_base),
            export_url: pick("export-url", defaults.export_url),
            add_item_url: pick("add-item-url", defaults.add_item_url),
            upload_url: pick("upload-url", defaults.upload_url),
            delete_photo_url_base: pick("delete-photo-url-base", defaults.delete_photo_url_base),
            uploads_base: pick("uploads-base", defaults.uploads_base),
        }
    }

    /// Read the configuration from the document body
    pub fn from_body() -> Self {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        let Some(body) = body else {
            return Self::default();
        };
        let config = Self::from_attributes(|name| body.get_attribute(&format!("data-{name}")));
        debug!("[BOOT] Page config: {:?}", config);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_missing_attributes_use_defaults() {
        let config = PageConfig::from_attributes(lookup(&[]));
        assert_eq!(config, PageConfig::default());
        assert!(!config.is_authenticated);
    }

    #[test]
    fn test_authenticated_only_for_literal_true() {
        assert!(PageConfig::from_attributes(lookup(&[("is-authenticated", "true")])).is_authenticated);
        assert!(!PageConfig::from_attributes(lookup(&[("is-authenticated", "True")])).is_authenticated);
        assert!(!PageConfig::from_attributes(lookup(&[("is-authenticated", "false")])).is_authenticated);
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = PageConfig::from_attributes(lookup(&[
            ("export-url", "  "),
            ("modify-item-url-base", "/items/0/edit0"),
        ]));
        assert_eq!(config.export_url, "/export_xlsx");
        assert_eq!(config.modify_item_url_base, "/items/0/edit0");
    }
}
