//! Path handling for drive-relative locations.
//!
//! Users pass paths with the drive ID prepended (`/drive-123/path/to/folder`).
//! The API host accepts them as is, the filesystem host wants them relative to
//! the drive root.

/// Path of a new folder under `parent`.
pub fn join_folder_path(parent: &str, folder_name: &str) -> String {
    format!("{}/{}", parent, folder_name)
}

/// Strip a leading `/{drive_id}/` from a listing path. Anything else is returned unchanged.
pub fn strip_drive_prefix<'a>(path: &'a str, drive_id: &str) -> &'a str {
    let prefix = format!("/{}/", drive_id);
    path.strip_prefix(prefix.as_str()).unwrap_or(path)
}

/// Folder part of an upload target relative to the drive root: `""` or `/a/b`.
///
/// Leading slashes and empty segments are dropped, and a first segment equal
/// to `drive_id` is removed once.
pub fn normalize_folder_path(path: &str, drive_id: &str) -> String {
    let mut segments = path.split('/').filter(|s| !s.is_empty()).peekable();

    if segments.peek() == Some(&drive_id) {
        segments.next();
    }

    segments.fold(String::new(), |mut acc, segment| {
        acc.push('/');
        acc.push_str(segment);
        acc
    })
}

/// Absolute destination of an uploaded file, never prefixed with the drive ID.
pub fn normalize_upload_path(path: &str, drive_id: &str, file_name: &str) -> String {
    format!("{}/{}", normalize_folder_path(path, drive_id), file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_folder_path() {
        assert_eq!(join_folder_path("/driveA/2024", "Reports"), "/driveA/2024/Reports");
        assert_eq!(join_folder_path("", "Reports"), "/Reports");
    }

    #[test]
    fn test_strip_drive_prefix() {
        assert_eq!(strip_drive_prefix("/driveA/docs/q1", "driveA"), "docs/q1");
        assert_eq!(strip_drive_prefix("/driveB/docs", "driveA"), "/driveB/docs");
        assert_eq!(strip_drive_prefix("docs", "driveA"), "docs");
        // Only the exact prefix with trailing slash is stripped
        assert_eq!(strip_drive_prefix("/driveA", "driveA"), "/driveA");
    }

    #[test]
    fn test_upload_path_strips_drive_segment() {
        assert_eq!(
            normalize_upload_path("/driveA/folder", "driveA", "x.pdf"),
            "/folder/x.pdf"
        );
    }

    #[test]
    fn test_upload_path_without_drive_segment() {
        assert_eq!(
            normalize_upload_path("folder/sub", "driveA", "x.pdf"),
            "/folder/sub/x.pdf"
        );
        assert_eq!(
            normalize_upload_path("///folder", "driveA", "x.pdf"),
            "/folder/x.pdf"
        );
    }

    #[test]
    fn test_upload_path_at_drive_root() {
        assert_eq!(normalize_upload_path("", "driveA", "x.pdf"), "/x.pdf");
        assert_eq!(normalize_upload_path("/", "driveA", "x.pdf"), "/x.pdf");
        assert_eq!(normalize_upload_path("/driveA", "driveA", "x.pdf"), "/x.pdf");
        assert_eq!(normalize_upload_path("/driveA/", "driveA", "x.pdf"), "/x.pdf");
    }

    #[test]
    fn test_drive_segment_removed_once() {
        assert_eq!(
            normalize_upload_path("/driveA/driveA/a", "driveA", "x.pdf"),
            "/driveA/a/x.pdf"
        );
        // Only a leading segment counts
        assert_eq!(
            normalize_upload_path("/a/driveA", "driveA", "x.pdf"),
            "/a/driveA/x.pdf"
        );
    }

    #[test]
    fn test_folder_normalization_is_idempotent() {
        for path in ["/driveA/folder", "folder/sub/", "//a//b", "", "/driveA", "/x/driveA"] {
            let once = normalize_folder_path(path, "driveA");
            let twice = normalize_folder_path(&once, "driveA");
            assert_eq!(once, twice, "not idempotent for {:?}", path);
        }
    }

    #[test]
    fn test_trailing_slash_does_not_double_separator() {
        assert_eq!(
            normalize_upload_path("/driveA/folder/", "driveA", "x.pdf"),
            "/folder/x.pdf"
        );
    }
}
