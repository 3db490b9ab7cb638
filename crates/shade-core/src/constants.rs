//! Fixed values of the Shade wire protocol.

/// Main API host.
pub const DEFAULT_API_BASE_URL: &str = "https://api.shade.inc";

/// Filesystem host, used for directory listing and multipart upload.
pub const DEFAULT_FS_BASE_URL: &str = "https://fs.shade.inc";

/// Size of every multipart upload part except the last (5 MiB).
pub const MULTIPART_PART_SIZE: u64 = 5 * 1024 * 1024;

/// Default `limit` for asset search.
pub const DEFAULT_SEARCH_LIMIT: u32 = 50;

pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 60;

/// Binary property read by the upload operation when none is configured.
pub const DEFAULT_BINARY_PROPERTY: &str = "data";
