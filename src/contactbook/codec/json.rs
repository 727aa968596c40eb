use crate::error::Result;
use crate::model::Record;

pub fn encode(records: &[Record]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(records)?)
}

/// A top-level `null` decodes to an empty list.
pub fn decode(bytes: &[u8]) -> Result<Vec<Record>> {
    let records: Option<Vec<Record>> = serde_json::from_slice(strip_bom(bytes))?;
    Ok(records.unwrap_or_default())
}

fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(super::text::BOM).unwrap_or(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BookError;

    #[test]
    fn output_is_indented_array() {
        let bytes = encode(&[Record::new(1, "Ada", "Lovelace", "5551112222")]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("[\n"));
        assert!(text.contains("\n    \"firstName\": \"Ada\""));
    }

    #[test]
    fn keys_follow_field_order() {
        let bytes = encode(&[Record::new(1, "A", "B", "C")]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let order = [
            "\"id\"",
            "\"firstName\"",
            "\"lastName\"",
            "\"phoneNumber\"",
            "\"birthDate\"",
            "\"email\"",
            "\"address\"",
            "\"notes\"",
        ];
        let positions: Vec<usize> = order.iter().map(|k| text.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn null_decodes_to_empty() {
        assert!(decode(b"null").unwrap().is_empty());
        assert!(decode(b"  null\n").unwrap().is_empty());
    }

    #[test]
    fn empty_array_decodes_to_empty() {
        assert!(decode(b"[]").unwrap().is_empty());
    }

    #[test]
    fn garbage_is_a_serialization_error() {
        let err = decode(b"{not json").unwrap_err();
        assert!(matches!(err, BookError::Serialization(_)));
    }

    #[test]
    fn tolerates_leading_bom() {
        let mut bytes = b"\xEF\xBB\xBF".to_vec();
        bytes.extend_from_slice(br#"[{"id":1,"firstName":"A","lastName":"B","phoneNumber":"1"}]"#);
        let records = decode(&bytes).unwrap();
        assert_eq!(records.len(), 1);
    }
}
