use std::fs;
use std::path::Path;

use bytes::Bytes;
use tracing::debug;

use super::descriptor::{Torrent, TorrentFile};
use super::error::TorrentError;
use crate::bencode::{decode, Value};

/// Intermediate result of walking the `info` dictionary.
struct InfoParts {
    files: Vec<TorrentFile>,
    pieces: Option<Bytes>,
    piece_length: Option<u64>,
}

impl Torrent {
    /// Loads a torrent from a file on disk.
    ///
    /// Reads the entire file into memory, then parses it with
    /// [`from_bytes`](Torrent::from_bytes).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the data is not valid
    /// bencode, or the document does not satisfy the metainfo schema.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tordec::torrent::Torrent;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let torrent = Torrent::from_file("example.torrent")?;
    /// for file in &torrent.files {
    ///     println!("{} ({} bytes)", file.path, file.length);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TorrentError> {
        let data = fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Parses a torrent from raw bencoded bytes.
    ///
    /// The decoded tree is an implementation detail here and is dropped
    /// before this returns; use [`from_value`](Torrent::from_value) to load
    /// from a tree decoded elsewhere.
    ///
    /// # Errors
    ///
    /// Returns an error if the data is not valid bencode or the document
    /// does not satisfy the metainfo schema.
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
    /// assert_eq!(torrent.files[0].path, "file.txt");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_bytes(data: &[u8]) -> Result<Self, TorrentError> {
        let value = decode(data)?;
        Self::from_value(&value)
    }

    /// Builds a torrent from an already decoded bencode tree.
    ///
    /// The root must be a dictionary. Unknown keys are ignored; known keys
    /// are validated strictly, and for keys that set a single field the
    /// first occurrence wins while later duplicates are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not satisfy the metainfo
    /// schema: a known key with a wrong-typed or out-of-range value, a
    /// missing required field, or an `info` dictionary that describes no
    /// files.
    pub fn from_value(value: &Value) -> Result<Self, TorrentError> {
        let dict = value.as_dict().ok_or(TorrentError::InvalidField("root"))?;

        let mut trackers = Vec::new();
        let mut comment = None;
        let mut created_by = None;
        let mut creation_date = None;
        let mut info = None;

        for (key, value) in dict {
            match key.as_ref() {
                b"announce" => {
                    trackers.push(expect_str(value, "announce")?.to_string());
                }
                b"announce-list" => load_announce_list(value, &mut trackers)?,
                b"comment" if comment.is_none() => {
                    comment = Some(expect_str(value, "comment")?.to_string());
                }
                b"created by" if created_by.is_none() => {
                    created_by = Some(expect_str(value, "created by")?.to_string());
                }
                b"creation date" if creation_date.is_none() => {
                    creation_date = Some(expect_integer(value, "creation date")?);
                }
                b"info" if info.is_none() => {
                    info = Some(load_info(value)?);
                }
                _ => {}
            }
        }

        let info = info.ok_or(TorrentError::MissingField("info"))?;

        Ok(Torrent {
            trackers,
            files: info.files,
            pieces: info.pieces,
            piece_length: info.piece_length,
            comment,
            created_by,
            creation_date,
        })
    }
}

/// Flattens `announce-list` tiers into the tracker list in document order.
fn load_announce_list(value: &Value, trackers: &mut Vec<String>) -> Result<(), TorrentError> {
    let tiers = value
        .as_list()
        .ok_or(TorrentError::InvalidField("announce-list"))?;

    for tier in tiers {
        let urls = tier
            .as_list()
            .ok_or(TorrentError::InvalidField("announce-list"))?;

        for url in urls {
            trackers.push(expect_str(url, "announce-list")?.to_string());
        }
    }

    Ok(())
}

fn load_info(value: &Value) -> Result<InfoParts, TorrentError> {
    let dict = value.as_dict().ok_or(TorrentError::InvalidField("info"))?;

    let mut pieces = None;
    let mut piece_length = None;
    let mut name: Option<String> = None;
    let mut length = None;
    let mut files = None;

    for (key, value) in dict {
        match key.as_ref() {
            b"pieces" if pieces.is_none() => {
                pieces = Some(expect_bytes(value, "pieces")?.clone());
            }
            b"piece length" if piece_length.is_none() => {
                piece_length = Some(expect_positive(value, "piece length")?);
            }
            b"name" if name.is_none() => {
                name = Some(expect_str(value, "name")?.to_string());
            }
            b"length" if length.is_none() => {
                length = Some(expect_positive(value, "length")?);
            }
            b"files" if files.is_none() => {
                files = Some(load_files(value)?);
            }
            _ => {}
        }
    }

    // A `files` list puts the torrent in multi-file mode and suppresses the
    // single-file name/length fallback even when those keys are present.
    let files = match files {
        Some(files) => files,
        None => match (name, length) {
            (Some(path), Some(length)) => vec![TorrentFile { path, length }],
            (None, None) => Vec::new(),
            (Some(_), None) => return Err(TorrentError::MissingField("length")),
            (None, Some(_)) => return Err(TorrentError::MissingField("name")),
        },
    };

    if files.is_empty() {
        debug!("info dictionary describes no files");
        return Err(TorrentError::NoFiles);
    }

    Ok(InfoParts {
        files,
        pieces,
        piece_length,
    })
}

fn load_files(value: &Value) -> Result<Vec<TorrentFile>, TorrentError> {
    let list = value.as_list().ok_or(TorrentError::InvalidField("files"))?;

    let mut files = Vec::new();

    for entry in list {
        let dict = entry.as_dict().ok_or(TorrentError::InvalidField("files"))?;

        let mut path = None;
        let mut length = None;

        for (key, value) in dict {
            match key.as_ref() {
                b"path" if path.is_none() => {
                    path = Some(load_path(value)?);
                }
                b"length" if length.is_none() => {
                    length = Some(expect_positive(value, "file length")?);
                }
                _ => {}
            }
        }

        let path = path.ok_or(TorrentError::MissingField("file path"))?;
        let length = length.ok_or(TorrentError::MissingField("file length"))?;

        files.push(TorrentFile { path, length });
    }

    Ok(files)
}

/// Extracts the file name from a `path` list: the first component names the
/// file.
fn load_path(value: &Value) -> Result<String, TorrentError> {
    let components = value
        .as_list()
        .ok_or(TorrentError::InvalidField("file path"))?;

    let first = match components.first() {
        Some(first) => first,
        None => {
            debug!("file entry has an empty path list");
            return Err(TorrentError::InvalidField("file path"));
        }
    };

    Ok(expect_str(first, "file path")?.to_string())
}

fn expect_str<'a>(value: &'a Value, field: &'static str) -> Result<&'a str, TorrentError> {
    value.as_str().ok_or(TorrentError::InvalidField(field))
}

fn expect_integer(value: &Value, field: &'static str) -> Result<i64, TorrentError> {
    value.as_integer().ok_or(TorrentError::InvalidField(field))
}

fn expect_bytes<'a>(value: &'a Value, field: &'static str) -> Result<&'a Bytes, TorrentError> {
    value.as_bytes().ok_or(TorrentError::InvalidField(field))
}

/// Validates an integer field that the schema requires to be strictly
/// positive, such as file and piece lengths.
fn expect_positive(value: &Value, field: &'static str) -> Result<u64, TorrentError> {
    let n = expect_integer(value, field)?;

    if n <= 0 {
        debug!("rejecting non-positive {}: {}", field, n);
        return Err(TorrentError::InvalidField(field));
    }

    Ok(n as u64)
}
