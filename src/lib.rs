//! tordec - A bencode and torrent metainfo decoder
//!
//! This library decodes bencoded data following BEP-3 (BitTorrent
//! Enhancement Proposal 3) and loads `.torrent` documents into validated
//! descriptors. It stops there: no networking, no peer protocol, no
//! verification of file content against piece digests.
//!
//! # Modules
//!
//! - [`bencode`] - BEP-3 bencode decoding and a debug pretty-printer
//! - [`torrent`] - BEP-3/12 torrent metainfo loading and validation

pub mod bencode;
pub mod torrent;

pub use bencode::{decode, dump, BencodeError, Dump, Value};
pub use torrent::{Torrent, TorrentError, TorrentFile};
