use std::io::{BufRead, BufReader, Read};

use csv::{ReaderBuilder, StringRecord, Trim};

use super::name::NameRecord;

/// Records read from a name file together with the number of data lines that
/// were dropped for not holding exactly two fields.
#[derive(Debug, Default)]
pub struct NamePairs {
    pub records: Vec<NameRecord>,
    pub skipped: usize,
}

/// Read `first,last` pairs from comma delimited text. The first line is a
/// header and is never inspected, even when blank. Quotes carry no meaning and
/// trailing empty fields are ignored, so `A,B,` is a pair while `A,` is not.
/// Malformed lines are skipped and counted. An I/O failure part way through
/// stops the read and keeps what was read so far.
pub fn read_name_pairs<R: Read>(reader: R, source: &str) -> NamePairs {
    let mut pairs = NamePairs::default();

    // The csv reader ignores blank lines, so the header is consumed here to
    // make sure it is always the literal first line.
    let mut reader = BufReader::new(reader);
    if let Err(e) = reader.read_until(b'\n', &mut Vec::new()) {
        tracing::error!("error reading {}: {}", source, e);
        return pairs;
    }

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::None)
        .from_reader(reader);

    for result in rdr.records() {
        match result {
            Ok(record) => match name_from_record(&record) {
                Some(name) => pairs.records.push(name),
                None => {
                    tracing::debug!(
                        fields = record.len(),
                        "skipping malformed line in {}",
                        source
                    );
                    pairs.skipped += 1;
                }
            },
            Err(e) if e.is_io_error() => {
                tracing::error!("error reading {}: {}", source, e);
                break;
            }
            Err(e) => {
                tracing::debug!("skipping unreadable line in {}: {}", source, e);
                pairs.skipped += 1;
            }
        }
    }

    pairs
}

fn name_from_record(record: &StringRecord) -> Option<NameRecord> {
    let mut fields: Vec<&str> = record.iter().collect();
    while fields.last() == Some(&"") {
        fields.pop();
    }

    match fields.as_slice() {
        [first, last] => Some(NameRecord::new(*first, *last)),
        _ => None,
    }
}
