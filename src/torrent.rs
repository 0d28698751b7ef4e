//! Torrent metainfo loading ([BEP-3], [BEP-12]).
//!
//! This module turns a bencoded `.torrent` document into a [`Torrent`]
//! descriptor: a flattened, validated view of the metadata a client needs
//! before it talks to anything.
//!
//! # Overview
//!
//! A torrent file (`.torrent`) contains metadata about files to be shared:
//! - File names and sizes
//! - Piece size and concatenated piece digests
//! - Tracker URLs for peer discovery
//!
//! Loading is schema validation, nothing more: no network access, no
//! checking of file content against the piece digests.
//!
//! # Examples
//!
//! ## Loading a torrent file
//!
//! ```no_run
//! use tordec::torrent::Torrent;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let torrent = Torrent::from_file("example.torrent")?;
//!
//! println!("Total size: {} bytes", torrent.total_length());
//! for file in &torrent.files {
//!     println!("  {} ({} bytes)", file.path, file.length);
//! }
//! for tracker in &torrent.trackers {
//!     println!("Tracker: {}", tracker);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Loading from bytes already in memory
//!
//! ```
//! use tordec::torrent::Torrent;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let torrent = Torrent::from_bytes(
//!     b"d4:infod4:name8:file.txt6:lengthi1024e12:piece lengthi16384e\
//!       6:pieces20:aaaaaaaaaaaaaaaaaaaaee",
//! )?;
//!
//! assert!(torrent.is_single_file());
//! assert_eq!(torrent.piece_length, Some(16384));
//! # Ok(())
//! # }
//! ```
//!
//! # Document structure
//!
//! The keys the loader reads:
//!
//! - **announce** - Primary tracker URL
//! - **announce-list** - Additional tracker tiers (BEP-12), flattened into
//!   [`Torrent::trackers`] after `announce`, in document order
//! - **comment** - Optional comment
//! - **created by** - Client that created the torrent
//! - **creation date** - Unix timestamp when created
//! - **info** - Core torrent metadata
//!   - `name` - File name (single-file torrents)
//!   - `length` - Total size in bytes (single-file torrents)
//!   - `files` - List of `{path, length}` entries (multi-file torrents);
//!     its presence suppresses the single-file `name`/`length` fallback
//!   - `piece length` - Size of each piece in bytes
//!   - `pieces` - Concatenated piece digests, kept verbatim
//!
//! Unknown keys are ignored. Known keys are validated strictly: a value of
//! the wrong type, a malformed text field, or a non-positive length fails
//! the load with [`TorrentError`]. For keys that set a single field the
//! first occurrence wins; later duplicates are ignored. A load that would
//! describe no files at all fails with [`TorrentError::NoFiles`].
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html
//! [BEP-12]: http://bittorrent.org/beps/bep_0012.html

mod descriptor;
mod error;
mod loader;

pub use descriptor::{Torrent, TorrentFile};
pub use error::TorrentError;
