//! Binary module format for handing Tern IR to a backend.
//!
//! Layout (little endian):
//! - 0-3: magic `b"TERN"`
//! - 4-5: format version
//! - 6-7: reserved, zero
//! - 8-11: CRC32 of the payload
//! - 12..: postcard-encoded root `Node`

use crate::node::Node;

pub const MAGIC: [u8; 4] = *b"TERN";
pub const VERSION: u16 = 1;
pub const HEADER_SIZE: usize = 12;

#[derive(Debug, thiserror::Error)]
pub enum ModuleError {
    #[error("invalid magic: expected TERN")]
    InvalidMagic,
    #[error("unsupported version: {0} (expected {VERSION})")]
    UnsupportedVersion(u16),
    #[error("file too small: {0} bytes (minimum {HEADER_SIZE})")]
    FileTooSmall(usize),
    #[error("checksum mismatch: header says {header:#010x}, payload hashes to {actual:#010x}")]
    ChecksumMismatch { header: u32, actual: u32 },
    #[error("payload encoding error: {0}")]
    Payload(#[from] postcard::Error),
    #[error("json encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A converted program ready for a backend.
#[derive(Clone, Debug, PartialEq)]
pub struct Module {
    root: Node,
}

impl Module {
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ModuleError> {
        let payload = postcard::to_allocvec(&self.root)?;

        let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());
        out.extend_from_slice(&MAGIC);
        out.extend_from_slice(&VERSION.to_le_bytes());
        out.extend_from_slice(&[0, 0]);
        out.extend_from_slice(&crc32fast::hash(&payload).to_le_bytes());
        out.extend_from_slice(&payload);
        Ok(out)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ModuleError> {
        if bytes.len() < HEADER_SIZE {
            return Err(ModuleError::FileTooSmall(bytes.len()));
        }
        if bytes[0..4] != MAGIC {
            return Err(ModuleError::InvalidMagic);
        }

        let version = u16::from_le_bytes([bytes[4], bytes[5]]);
        if version != VERSION {
            return Err(ModuleError::UnsupportedVersion(version));
        }

        let header = u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]);
        let payload = &bytes[HEADER_SIZE..];
        let actual = crc32fast::hash(payload);
        if header != actual {
            return Err(ModuleError::ChecksumMismatch { header, actual });
        }

        let root = postcard::from_bytes(payload)?;
        Ok(Self { root })
    }

    pub fn to_json(&self) -> Result<String, ModuleError> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }
}
