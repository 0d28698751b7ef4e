use thiserror::Error;

use crate::bencode::BencodeError;

/// Errors that can occur when loading a torrent file.
///
/// Each stage of a load surfaces its own category: reading the file
/// ([`Io`](TorrentError::Io)), decoding the bencode
/// ([`Bencode`](TorrentError::Bencode)), and validating the document
/// against the metainfo schema (the remaining variants).
#[derive(Debug, Error)]
pub enum TorrentError {
    /// The torrent file contains invalid bencode.
    #[error("bencode error: {0}")]
    Bencode(#[from] BencodeError),

    /// A required field is missing from the torrent file.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// A field has an invalid value or type.
    #[error("invalid field: {0}")]
    InvalidField(&'static str),

    /// The torrent describes no files at all.
    #[error("torrent describes no files")]
    NoFiles,

    /// An I/O error occurred while reading the torrent file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
