//! Package parts: a named blob with a content type and outgoing relationships.
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::rel::Relationships;

/// A single part of an OPC package.
#[derive(Debug, Clone)]
pub struct Part {
    partname: PackURI,
    content_type: String,
    blob: Vec<u8>,
    rels: Relationships,
}

impl Part {
    /// Create a part with no relationships.
    pub fn new(partname: PackURI, content_type: impl Into<String>, blob: Vec<u8>) -> Self {
        Self {
            partname,
            content_type: content_type.into(),
            blob,
            rels: Relationships::new(),
        }
    }

    /// Part name within the package.
    pub fn partname(&self) -> &PackURI {
        &self.partname
    }

    /// Content type of this part.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Raw part contents.
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    /// Replace the part contents.
    pub fn set_blob(&mut self, blob: Vec<u8>) {
        self.blob = blob;
    }

    /// Relationships whose source is this part.
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Relate this part to `target_ref` and return the relationship ID.
    pub fn relate_to(&mut self, target_ref: &str, reltype: &str) -> String {
        self.rels.get_or_add(reltype, target_ref)
    }
}
