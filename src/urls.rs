//! URL and filename helpers

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Same reserved set as JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// `src` of a stored picture; the whole relative path is one encoded component
pub fn picture_src(uploads_base: &str, file_path: &str) -> String {
    format!("{}{}", uploads_base, encode_uri_component(file_path))
}

/// Form action for editing `id`, built from a template ending in `0`
pub fn modify_item_url(base: &str, id: u32) -> String {
    if let Some(prefix) = base.strip_suffix('0') {
        format!("{prefix}{id}")
    } else if base.ends_with('/') {
        format!("{base}{id}")
    } else {
        format!("{base}/{id}")
    }
}

pub fn request_transfer_url(base: &str, id: u32) -> String {
    format!("{base}{id}")
}

pub fn delete_photo_url(base: &str, photo_id: u32) -> String {
    if base.ends_with('/') {
        format!("{base}{photo_id}")
    } else {
        format!("{base}/{photo_id}")
    }
}

/// Download name for the spreadsheet export, stamped `dd-mm-yyyy`
pub fn export_filename(day: u32, month: u32, year: i32) -> String {
    format!("resoconto_colli_{day:02}-{month:02}-{year}.xlsx")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_matches_encode_uri_component() {
        assert_eq!(encode_uri_component("C-100/foto 1.jpg"), "C-100%2Ffoto%201.jpg");
        assert_eq!(encode_uri_component("a_b.c~d*e'(f)!"), "a_b.c~d*e'(f)!");
        assert_eq!(encode_uri_component("città&x=1"), "citt%C3%A0%26x%3D1");
    }

    #[test]
    fn test_picture_src() {
        assert_eq!(
            picture_src("/static/uploads/colli/", "C-1/img.png"),
            "/static/uploads/colli/C-1%2Fimg.png"
        );
    }

    #[test]
    fn test_modify_item_url_replaces_trailing_zero() {
        assert_eq!(modify_item_url("/modify_item/0", 42), "/modify_item/42");
        assert_eq!(modify_item_url("/app/modify_item/0", 7), "/app/modify_item/7");
        assert_eq!(modify_item_url("/modify_item/", 7), "/modify_item/7");
        assert_eq!(modify_item_url("/modify_item", 7), "/modify_item/7");
    }

    #[test]
    fn test_request_and_photo_urls() {
        assert_eq!(request_transfer_url("/request_transfer/", 3), "/request_transfer/3");
        assert_eq!(delete_photo_url("/delete_photos/", 9), "/delete_photos/9");
        assert_eq!(delete_photo_url("/delete_photos", 9), "/delete_photos/9");
    }

    #[test]
    fn test_export_filename_is_zero_padded() {
        assert_eq!(export_filename(5, 3, 2026), "resoconto_colli_05-03-2026.xlsx");
        assert_eq!(export_filename(15, 10, 2026), "resoconto_colli_15-10-2026.xlsx");
    }
}
