//! CSV matrix pivot: working group -> keywords becomes keyword -> working groups.
//!
//! The input has one column per working group. The header row holds the
//! group names, every following row holds at most one keyword per column:
//!
//! ```text
//! WG1,WG2,WG3               kw1 -> [WG1, WG2]
//! kw1,kw2,kw3        ->     kw2 -> [WG2, WG3]
//! ,kw1,kw2                  kw3 -> [WG3]
//! ```
//!
//! A `*` in a cell marks a high-level keyword. In overview mode only marked
//! cells count; in detail mode every non-empty cell counts. Markers never
//! appear in the resulting keyword.

use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::{PivotError, PivotResult};
use crate::models::{KeywordMap, PageOptions};

/// Marks a keyword for the overview page.
pub const OVERVIEW_MARKER: char = '*';

/// Pivot the CSV file at `path`.
///
/// The file is read through a buffered reader and closed when this returns,
/// on success or error.
pub fn pivot_file<P: AsRef<Path>>(path: P, options: &PageOptions) -> PivotResult<KeywordMap> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| PivotError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), page = options.page_name(), "Reading keyword matrix");

    pivot_reader(BufReader::new(file), options)
}

/// Pivot CSV text held in memory.
///
/// # Example
/// ```
/// use ietf_keywords::{pivot_str, PageOptions};
///
/// let csv = "tls,quic\nTLS,TLS\n";
/// let keywords = pivot_str(csv, &PageOptions::detail()).unwrap();
/// assert_eq!(keywords["TLS"], vec!["tls", "quic"]);
/// ```
pub fn pivot_str(csv: &str, options: &PageOptions) -> PivotResult<KeywordMap> {
    pivot_reader(csv.as_bytes(), options)
}

/// Parse CSV from any reader and pivot it.
///
/// Rows may have any number of fields. The whole input is read and checked
/// before pivoting so a syntax error never yields a partial mapping.
pub fn pivot_reader<R: Read>(mut reader: R, options: &PageOptions) -> PivotResult<KeywordMap> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input).map_err(PivotError::Read)?;
    check_quotes(&input)?;

    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input.as_slice());

    let records = csv_reader
        .records()
        .collect::<Result<Vec<StringRecord>, csv::Error>>()?;
    debug!("Parsed {} CSV records", records.len());

    Ok(pivot_records(&records, options))
}

/// Reject quoting the csv reader would silently accept.
///
/// A quoted field must start at the beginning of the field, close before
/// the input ends, and be followed by a delimiter or line break. A `"`
/// inside an unquoted field is an error. `""` inside quotes is an escaped
/// quote.
fn check_quotes(input: &[u8]) -> PivotResult<()> {
    let mut line: u64 = 1;
    let mut quote_line: u64 = 1;
    let mut field_start = true;
    let mut in_quotes = false;
    let mut bytes = input.iter().copied().peekable();

    while let Some(b) = bytes.next() {
        if in_quotes {
            match b {
                b'"' if bytes.peek() == Some(&b'"') => {
                    bytes.next();
                }
                b'"' => {
                    in_quotes = false;
                    match bytes.peek() {
                        None | Some(b',') | Some(b'\n') | Some(b'\r') => {}
                        Some(_) => {
                            return Err(PivotError::Malformed {
                                line,
                                message: "extraneous or missing \" in quoted field".to_string(),
                            });
                        }
                    }
                }
                b'\n' => line += 1,
                _ => {}
            }
            continue;
        }

        match b {
            b'"' if field_start => {
                in_quotes = true;
                quote_line = line;
                field_start = false;
            }
            b'"' => {
                return Err(PivotError::Malformed {
                    line,
                    message: "bare \" in non-quoted field".to_string(),
                });
            }
            b',' | b'\r' => field_start = true,
            b'\n' => {
                line += 1;
                field_start = true;
            }
            _ => field_start = false,
        }
    }

    if in_quotes {
        return Err(PivotError::Malformed {
            line: quote_line,
            message: "quoted field is never closed".to_string(),
        });
    }
    Ok(())
}

/// Pivot already-parsed records. The first record is the header row.
pub fn pivot_records(records: &[StringRecord], options: &PageOptions) -> KeywordMap {
    let mut keywords = KeywordMap::new();

    let Some((header, rows)) = records.split_first() else {
        debug!("CSV input is empty, no keywords");
        return keywords;
    };

    for (row_idx, row) in rows.iter().enumerate() {
        let line = row
            .position()
            .map(|p| p.line())
            .unwrap_or(row_idx as u64 + 2);

        for (column, cell) in row.iter().enumerate() {
            // Many columns are empty
            if cell.is_empty() {
                continue;
            }
            if options.overview && !cell.contains(OVERVIEW_MARKER) {
                continue;
            }

            let Some(keyword) = normalize_keyword(cell) else {
                warn!(line, column, "Cell {:?} is empty after normalization, skipping", cell);
                continue;
            };
            let Some(group) = header.get(column) else {
                warn!(line, column, "Keyword {:?} is outside the header row, skipping", keyword);
                continue;
            };

            if options.overview {
                info!("{} is an overview keyword", keyword);
            }
            keywords.entry(keyword).or_default().push(group.to_string());
        }
    }

    debug!("Pivoted {} keywords", keywords.len());
    keywords
}

/// Normalize a raw cell into a keyword.
///
/// Every `*` is removed and surrounding whitespace trimmed. Text starting
/// with a lowercase letter is title-cased; anything else (acronyms such as
/// `TLS`, digits, symbols) is kept verbatim. Returns `None` when nothing is
/// left.
pub fn normalize_keyword(cell: &str) -> Option<String> {
    let stripped: String = cell.chars().filter(|&c| c != OVERVIEW_MARKER).collect();
    let keyword = stripped.trim();

    let first = keyword.chars().next()?;
    if first.is_lowercase() {
        Some(title_case(keyword))
    } else {
        Some(keyword.to_string())
    }
}

/// Lowercase `text`, then uppercase the first character of every
/// whitespace-separated word. Whitespace is preserved as is.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;

    for c in text.chars() {
        if c.is_whitespace() {
            out.push(c);
            word_start = true;
        } else if word_start {
            out.extend(c.to_uppercase());
            word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}
