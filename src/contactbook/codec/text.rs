use crate::error::{BookError, Result};
use crate::model::Record;

pub(crate) const BOM: &[u8] = b"\xEF\xBB\xBF";
const FIELD_COUNT: usize = 8;
const SEPARATOR: char = '\t';

/// One record per line, fields in a fixed order, BOM first.
///
/// Tabs and line breaks inside a field would split the record, so they are
/// flattened to spaces.
pub fn encode(records: &[Record]) -> Vec<u8> {
    let mut out = String::new();
    for r in records {
        let fields = [
            r.id.to_string(),
            flatten(&r.first_name),
            flatten(&r.last_name),
            flatten(&r.phone_number),
            flatten(&r.birth_date),
            flatten(&r.email),
            flatten(&r.address),
            flatten(&r.notes),
        ];
        out.push_str(&fields.join("\t"));
        out.push('\n');
    }

    let mut bytes = Vec::with_capacity(BOM.len() + out.len());
    bytes.extend_from_slice(BOM);
    bytes.extend_from_slice(out.as_bytes());
    bytes
}

/// Lines with fewer than eight fields are skipped. Anything past the eighth
/// field is ignored. An id that is not an integer fails the whole decode.
pub fn decode(bytes: &[u8]) -> Result<Vec<Record>> {
    let body = bytes.strip_prefix(BOM).unwrap_or(bytes);
    let text = std::str::from_utf8(body).map_err(|e| BookError::Parse {
        line: line_of_offset(body, e.valid_up_to()),
        reason: format!("invalid UTF-8: {}", e),
    })?;

    let mut records = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let parts: Vec<&str> = line.split(SEPARATOR).collect();
        if parts.len() < FIELD_COUNT {
            continue;
        }

        let id = parts[0].trim().parse::<i32>().map_err(|e| BookError::Parse {
            line: idx + 1,
            reason: format!("id '{}' is not an integer ({})", parts[0], e),
        })?;

        records.push(Record {
            id,
            first_name: parts[1].to_string(),
            last_name: parts[2].to_string(),
            phone_number: parts[3].to_string(),
            birth_date: parts[4].to_string(),
            email: parts[5].to_string(),
            address: parts[6].to_string(),
            notes: parts[7].to_string(),
        });
    }
    Ok(records)
}

fn flatten(value: &str) -> String {
    value.replace(['\t', '\r', '\n'], " ")
}

fn line_of_offset(bytes: &[u8], offset: usize) -> usize {
    bytes[..offset].iter().filter(|b| **b == b'\n').count() + 1
}
