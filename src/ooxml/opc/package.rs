//! In-memory OPC package model.
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::rel::Relationships;

/// A collection of parts plus package-level relationships.
///
/// Parts keep their insertion order so the serialized archive is stable
/// from run to run.
#[derive(Debug, Default)]
pub struct OpcPackage {
    parts: Vec<Part>,
    rels: Relationships,
}

impl OpcPackage {
    /// Create an empty package.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a part, replacing any existing part with the same partname.
    pub fn add_part(&mut self, part: Part) {
        if let Some(existing) = self
            .parts
            .iter_mut()
            .find(|p| p.partname() == part.partname())
        {
            *existing = part;
        } else {
            self.parts.push(part);
        }
    }

    /// Iterate over all parts.
    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    /// Package-level relationships (`/_rels/.rels`).
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Relate the package to a top-level part and return the relationship ID.
    pub fn relate_to(&mut self, target_ref: &str, reltype: &str) -> String {
        self.rels.get_or_add(reltype, target_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::content_type as ct;

    #[test]
    fn add_part_replaces_same_partname() {
        let mut pkg = OpcPackage::new();
        let uri = PackURI::new("/xl/styles.xml").unwrap();

        pkg.add_part(Part::new(uri.clone(), ct::SML_STYLES, b"old".to_vec()));
        pkg.add_part(Part::new(uri.clone(), ct::SML_STYLES, b"new".to_vec()));

        let parts: Vec<&Part> = pkg.iter_parts().collect();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].partname(), &uri);
        assert_eq!(parts[0].blob(), b"new");
    }
}
