//! Numbered object table with reserve-then-fill semantics.
//!
//! Pages must name the page tree and the page tree must list every page, so
//! numbers are handed out first and bodies are filled in later. The table
//! refuses to serialize while any slot is still pending.

use crate::error::{Error, Result};

/// 1-based PDF object number.
pub type ObjectId = u32;

/// PDF header: version line plus a comment of high-bit bytes marking the
/// file as binary.
pub const PDF_HEADER: &[u8] = b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n";

/// Free-list head entry of the cross-reference table.
const XREF_FREE_HEAD: &[u8] = b"0000000000 65535 f \n";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot {
    Pending,
    Filled(Vec<u8>),
}

/// Bytes of a serialized table along with the offsets that were recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializedPdf {
    /// Complete file content
    pub bytes: Vec<u8>,

    /// Byte offset of each `N 0 obj` token, index 0 holding object 1
    pub offsets: Vec<usize>,

    /// Byte offset of the `xref` keyword
    pub xref_offset: usize,
}

/// Object bodies indexed by object number.
#[derive(Debug, Clone, Default)]
pub struct ObjectTable {
    slots: Vec<Slot>,
}

impl ObjectTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next object number with no body yet.
    pub fn reserve(&mut self) -> ObjectId {
        self.slots.push(Slot::Pending);
        self.slots.len() as ObjectId
    }

    /// Append an object with its final body.
    pub fn add(&mut self, body: impl Into<Vec<u8>>) -> ObjectId {
        self.slots.push(Slot::Filled(body.into()));
        self.slots.len() as ObjectId
    }

    /// Set the body of an existing object.
    pub fn fill(&mut self, id: ObjectId, body: impl Into<Vec<u8>>) -> Result<()> {
        let slot = id
            .checked_sub(1)
            .and_then(|index| self.slots.get_mut(index as usize))
            .ok_or(Error::UnknownObject(id))?;
        *slot = Slot::Filled(body.into());
        Ok(())
    }

    /// Number of objects, pending ones included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the table has no objects.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether `id` is reserved but not filled.
    pub fn is_pending(&self, id: ObjectId) -> bool {
        id.checked_sub(1)
            .and_then(|index| self.slots.get(index as usize))
            .is_some_and(|slot| *slot == Slot::Pending)
    }

    /// Serialize header, objects, cross-reference table and trailer.
    ///
    /// Fails with [`Error::UninitializedObject`] if any object is pending.
    pub fn serialize(&self, root: ObjectId) -> Result<SerializedPdf> {
        let mut out = Vec::new();
        out.extend_from_slice(PDF_HEADER);

        let mut offsets = Vec::with_capacity(self.slots.len());
        for (index, slot) in self.slots.iter().enumerate() {
            let id = index as ObjectId + 1;
            let body = match slot {
                Slot::Filled(body) => body,
                Slot::Pending => return Err(Error::UninitializedObject(id)),
            };
            offsets.push(out.len());
            out.extend_from_slice(format!("{} 0 obj\n", id).as_bytes());
            out.extend_from_slice(body);
            out.extend_from_slice(b"\nendobj\n");
        }

        let size = self.slots.len() + 1;
        let xref_offset = out.len();
        out.extend_from_slice(format!("xref\n0 {}\n", size).as_bytes());
        out.extend_from_slice(XREF_FREE_HEAD);
        for offset in &offsets {
            out.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
        }

        out.extend_from_slice(format!("trailer << /Size {} /Root {} 0 R >>\n", size, root).as_bytes());
        out.extend_from_slice(format!("startxref\n{}\n%%EOF", xref_offset).as_bytes());

        Ok(SerializedPdf {
            bytes: out,
            offsets,
            xref_offset,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbering_is_sequential() {
        let mut table = ObjectTable::new();
        assert_eq!(table.reserve(), 1);
        assert_eq!(table.add("<< >>"), 2);
        assert_eq!(table.reserve(), 3);
        assert_eq!(table.len(), 3);
        assert!(table.is_pending(1));
        assert!(!table.is_pending(2));
        assert!(!table.is_pending(0));
    }

    #[test]
    fn test_pending_object_fails() {
        let mut table = ObjectTable::new();
        table.add("<< /A 1 >>");
        table.reserve();
        let err = table.serialize(1).unwrap_err();
        assert!(matches!(err, Error::UninitializedObject(2)));
    }

    #[test]
    fn test_fill_unknown_object() {
        let mut table = ObjectTable::new();
        table.reserve();
        assert!(matches!(table.fill(0, "x"), Err(Error::UnknownObject(0))));
        assert!(matches!(table.fill(2, "x"), Err(Error::UnknownObject(2))));
        assert!(table.fill(1, "x").is_ok());
        assert!(!table.is_pending(1));
    }

    #[test]
    fn test_serialized_layout() {
        let mut table = ObjectTable::new();
        let root = table.reserve();
        table.add("<< /B 2 >>");
        table.fill(root, "<< /A 1 >>").unwrap();

        let pdf = table.serialize(root).unwrap();
        let expected_head = b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n1 0 obj\n<< /A 1 >>\nendobj\n";
        assert!(pdf.bytes.starts_with(expected_head));
        assert_eq!(pdf.offsets[0], PDF_HEADER.len());

        for (index, offset) in pdf.offsets.iter().enumerate() {
            let token = format!("{} 0 obj", index + 1);
            assert!(pdf.bytes[*offset..].starts_with(token.as_bytes()));
        }
        assert!(pdf.bytes[pdf.xref_offset..].starts_with(b"xref\n0 3\n0000000000 65535 f \n"));

        let tail = format!(
            "trailer << /Size 3 /Root 1 0 R >>\nstartxref\n{}\n%%EOF",
            pdf.xref_offset
        );
        assert!(pdf.bytes.ends_with(tail.as_bytes()));
    }

    #[test]
    fn test_xref_lines_are_twenty_bytes() {
        let mut table = ObjectTable::new();
        table.add("<< >>");
        table.add("<< >>");
        let pdf = table.serialize(1).unwrap();
        let text = String::from_utf8_lossy(&pdf.bytes[pdf.xref_offset..]).into_owned();
        let entries: Vec<&str> = text.split_inclusive('\n').skip(2).take(3).collect();
        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|e| e.len() == 20));
        assert_eq!(entries[1], format!("{:010} 00000 n \n", pdf.offsets[0]));
    }
}
