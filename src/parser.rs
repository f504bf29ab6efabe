//! VGI metadata parser
//!
//! VGI files are line oriented. `{name}` lines open a volume block, `[name]`
//! lines open an information block and everything else is a `key = value`
//! entry. Only three keys matter for decoding:
//!
//! - `size`: three integers, the X, Y and Z extents. The latest valid line wins.
//! - `bitsperelement`: the sample width. Anything but 16 aborts the parse.
//! - `name`: the raw data file. Only the first non-empty occurrence is kept,
//!   later `name` entries describe auxiliary files.
//!
//! Keys are case-insensitive. Unknown keys are ignored. Malformed lines are
//! reported as [`ParseWarning`]s and skipped.

use crate::error::{Result, VgiError};
use crate::metadata::VolumeDescriptor;
use crate::types::{ByteOrder, SUPPORTED_BITS_PER_ELEMENT};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

/// Reason a metadata line was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningKind {
    /// Line is neither a block marker nor a single `key = value` pair
    MalformedLine,
    /// `size` value did not hold exactly three tokens
    SizeTokenCount(usize),
    /// Numeric value could not be read as a non-negative integer
    InvalidNumber,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningKind::MalformedLine => f.write_str("expected a single key = value pair"),
            WarningKind::SizeTokenCount(n) => {
                write!(f, "expected three integer values for size, found {}", n)
            }
            WarningKind::InvalidNumber => f.write_str("invalid integer value"),
        }
    }
}

/// Non-fatal problem found while scanning metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    /// 1-based line number
    pub line: usize,
    pub kind: WarningKind,
    /// Trimmed text of the offending line
    pub content: String,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: {}", self.line, self.kind, self.content)
    }
}

/// Fields recovered from a metadata file, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedMetadata {
    pub data_file_name: Option<String>,
    /// `[x, y, z]`
    pub size: Option<[usize; 3]>,
    pub bits_per_element: Option<u32>,
    pub warnings: Vec<ParseWarning>,
}

impl ParsedMetadata {
    /// Validate the collected fields into a loadable descriptor
    ///
    /// A missing `bitsperelement` entry is taken as 16 bits.
    pub fn to_descriptor(&self, byte_order: ByteOrder) -> Result<VolumeDescriptor> {
        let name = self.data_file_name.as_deref().ok_or_else(|| {
            VgiError::InvalidDescriptor("missing raw data file name".to_string())
        })?;
        let size = self
            .size
            .ok_or_else(|| VgiError::InvalidDescriptor("missing volume size".to_string()))?;
        let bits = self
            .bits_per_element
            .unwrap_or(SUPPORTED_BITS_PER_ELEMENT);

        VolumeDescriptor::new(name, size, bits, byte_order)
    }
}

enum Line<'a> {
    Blank,
    VolumeBlock,
    InformationBlock,
    Entry { key: &'a str, value: &'a str },
    Malformed,
}

fn classify(line: &str) -> Line<'_> {
    if line.is_empty() {
        return Line::Blank;
    }
    if line.starts_with('{') && line.ends_with('}') {
        return Line::VolumeBlock;
    }
    if line.starts_with('[') && line.ends_with(']') {
        return Line::InformationBlock;
    }

    let mut parts = line.split('=');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(key), Some(value), None) => Line::Entry {
            key: key.trim(),
            value: value.trim(),
        },
        _ => Line::Malformed,
    }
}

/// Single-pass accumulator over metadata lines
#[derive(Debug, Default)]
pub struct MetadataParser {
    parsed: ParsedMetadata,
    line_number: usize,
}

impl MetadataParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the next line of input
    pub fn feed_line(&mut self, raw: &str) -> Result<()> {
        self.line_number += 1;
        let line = raw.trim();

        let (key, value) = match classify(line) {
            Line::Blank | Line::VolumeBlock | Line::InformationBlock => return Ok(()),
            Line::Malformed => {
                self.warn(WarningKind::MalformedLine, line);
                return Ok(());
            }
            Line::Entry { key, value } => (key, value),
        };

        if key.eq_ignore_ascii_case("size") {
            self.read_size(line, value);
        } else if key.eq_ignore_ascii_case("bitsperelement") {
            self.read_bits_per_element(line, value)?;
        } else if key.eq_ignore_ascii_case("name") {
            if self.parsed.data_file_name.is_none() && !value.is_empty() {
                debug!(line = self.line_number, name = value, "data file name");
                self.parsed.data_file_name = Some(value.to_string());
            }
        }

        Ok(())
    }

    fn read_size(&mut self, line: &str, value: &str) {
        let tokens: Vec<&str> = value.split_whitespace().collect();
        if tokens.len() != 3 {
            self.warn(WarningKind::SizeTokenCount(tokens.len()), line);
            return;
        }

        let parsed: std::result::Result<Vec<usize>, _> =
            tokens.iter().map(|t| t.parse::<usize>()).collect();
        match parsed {
            Ok(dims) => self.parsed.size = Some([dims[0], dims[1], dims[2]]),
            Err(_) => self.warn(WarningKind::InvalidNumber, line),
        }
    }

    fn read_bits_per_element(&mut self, line: &str, value: &str) -> Result<()> {
        let bits = match value.parse::<i64>() {
            Ok(bits) => bits,
            Err(_) => {
                self.warn(WarningKind::InvalidNumber, line);
                return Ok(());
            }
        };

        if bits != i64::from(SUPPORTED_BITS_PER_ELEMENT) {
            return Err(VgiError::UnsupportedFormat {
                line: self.line_number,
                bits,
            });
        }

        self.parsed.bits_per_element = Some(SUPPORTED_BITS_PER_ELEMENT);
        Ok(())
    }

    fn warn(&mut self, kind: WarningKind, line: &str) {
        let warning = ParseWarning {
            line: self.line_number,
            kind,
            content: line.to_string(),
        };
        warn!("Skipping metadata {}", warning);
        self.parsed.warnings.push(warning);
    }

    /// Finish scanning and return what was collected
    pub fn finish(self) -> ParsedMetadata {
        self.parsed
    }
}

/// Parse metadata from any buffered reader
///
/// Lines are decoded lossily: exports carry Latin-1 text (unit names such as
/// `µm`) in blocks that are never interpreted.
pub fn parse_metadata<R: BufRead>(mut reader: R) -> Result<ParsedMetadata> {
    let mut parser = MetadataParser::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        parser.feed_line(&String::from_utf8_lossy(&buf))?;
    }
    Ok(parser.finish())
}

/// Parse metadata held in memory
pub fn parse_metadata_str(text: &str) -> Result<ParsedMetadata> {
    let mut parser = MetadataParser::new();
    for line in text.lines() {
        parser.feed_line(line)?;
    }
    Ok(parser.finish())
}

/// Parse a metadata file from disk
pub fn parse_metadata_file(path: &Path) -> Result<ParsedMetadata> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => VgiError::MissingFile(path.to_path_buf()),
        _ => VgiError::Io(e),
    })?;
    parse_metadata(BufReader::new(file))
}
