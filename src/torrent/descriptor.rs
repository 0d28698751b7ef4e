use bytes::Bytes;

/// A parsed torrent file.
///
/// Flattened, validated projection of one metainfo document: tracker URLs,
/// the files the torrent describes, and the piece metadata needed to fetch
/// them. It owns all of its data and holds no reference to the decoded
/// bencode tree it was built from.
///
/// A successful load always describes at least one file. The remaining
/// fields are optional in the format and stay `None` when absent.
///
/// # Examples
///
/// ```
/// use tordec::torrent::Torrent;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let torrent = Torrent::from_bytes(
///     b"d4:infod4:name8:file.txt6:lengthi1024e12:piece lengthi16384e\
///       6:pieces20:aaaaaaaaaaaaaaaaaaaaee",
/// )?;
///
/// assert!(torrent.is_single_file());
/// assert_eq!(torrent.files[0].path, "file.txt");
/// assert_eq!(torrent.total_length(), 1024);
/// assert_eq!(torrent.piece_count(), Some(1));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Torrent {
    /// Tracker URLs from `announce` and `announce-list`, in document order.
    pub trackers: Vec<String>,
    /// The files the torrent describes, in document order. Never empty.
    pub files: Vec<TorrentFile>,
    /// Concatenated piece digests, stored verbatim and never interpreted.
    pub pieces: Option<Bytes>,
    /// Number of bytes per piece.
    pub piece_length: Option<u64>,
    /// Optional comment about the torrent.
    pub comment: Option<String>,
    /// Name/version of the program that created the torrent.
    pub created_by: Option<String>,
    /// Unix timestamp when the torrent was created.
    pub creation_date: Option<i64>,
}

/// A file within a torrent.
///
/// For single-file torrents, there is one file carrying the torrent name.
/// For multi-file torrents, each entry comes from the `files` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TorrentFile {
    /// Name of the file.
    pub path: String,
    /// Size of the file in bytes, always strictly positive.
    pub length: u64,
}

impl Torrent {
    /// Returns the total size of all files combined.
    ///
    /// Each length is bounded by `i64::MAX`, but nothing bounds their sum;
    /// saturates at `u64::MAX` instead of wrapping.
    pub fn total_length(&self) -> u64 {
        self.files
            .iter()
            .fold(0u64, |total, file| total.saturating_add(file.length))
    }

    /// Returns `true` if the torrent describes exactly one file.
    pub fn is_single_file(&self) -> bool {
        self.files.len() == 1
    }

    /// Returns the number of pieces, or `None` if the torrent carries no
    /// piece digests.
    ///
    /// The digest blob is stored verbatim; in a well-formed v1 torrent it is
    /// a concatenation of 20-byte SHA-1 digests, so the count is its length
    /// divided by 20.
    pub fn piece_count(&self) -> Option<usize> {
        self.pieces.as_ref().map(|pieces| pieces.len() / 20)
    }
}
