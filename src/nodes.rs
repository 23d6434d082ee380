//! Parse and render nodes listings.
//!
//! A listing is made of one record per line, either `host` or `host:value`,
//! where `value` is an integer scaled by [`SCALE`]. Blank lines are ignored.
use std::{fmt, num::IntErrorKind};

use tracing::debug;

use crate::error::ReseedError;

/// the factor between a base value and the values written in a listing
pub const SCALE: i64 = 1000;

const DELIMITER: char = ':';

/// one non-blank line of a nodes listing
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub host: String,
    pub value: Option<i64>,
}

impl Record {
    /// parse a single line of a listing
    ///
    /// `line_number` is only used to build the error, if any.
    ///
    /// returns `Ok(None)` when the line is blank once trimmed. the host is
    /// everything before the first `:` and is kept as is, everything after it
    /// has to be an integer. integers too large for an `i64` saturate to
    /// `i64::MAX` or `i64::MIN`.
    pub fn parse(line: &str, line_number: usize) -> Result<Option<Self>, ReseedError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (host, value) = match line.split_once(DELIMITER) {
            Some((host, value)) => (host, Some(value)),
            None => (line, None),
        };

        let value = match value {
            Some(v) => match v.trim().parse::<i64>() {
                Ok(v) => Some(v),
                Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(i64::MAX),
                Err(e) if *e.kind() == IntErrorKind::NegOverflow => Some(i64::MIN),
                Err(e) => {
                    return Err(ReseedError::InvalidValue {
                        line: line_number,
                        value: v.to_string(),
                        reason: e.to_string(),
                    })
                }
            },
            None => None,
        };

        Ok(Some(Self {
            host: host.to_string(),
            value,
        }))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.host)?;
        if let Some(value) = self.value {
            write!(f, "{}{}", DELIMITER, value)?;
        }

        Ok(())
    }
}

/// the content of a nodes listing, once read
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Nodes {
    hosts: Vec<String>,
    prior: i64,
}

impl Nodes {
    /// parse a whole listing
    ///
    /// the _prior_ value is the value of the last record that has one, divided
    /// by [`SCALE`], or `0` if no record has a value.
    pub fn parse(contents: &str) -> Result<Self, ReseedError> {
        let mut nodes = Self::default();

        for (i, line) in contents.lines().enumerate() {
            if let Some(record) = Record::parse(line, i + 1)? {
                if let Some(value) = record.value {
                    nodes.prior = value / SCALE;
                }
                nodes.hosts.push(record.host);
            }
        }

        debug!(
            "parsed {} hosts, prior value is {}",
            nodes.hosts.len(),
            nodes.prior
        );

        Ok(nodes)
    }

    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    pub fn prior(&self) -> i64 {
        self.prior
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    /// the records of the listing once renumbered from `base`
    ///
    /// the i-th host gets the value `base * SCALE + i`.
    pub fn rewritten(&self, base: i64) -> impl Iterator<Item = Record> + '_ {
        self.hosts.iter().enumerate().map(move |(i, host)| Record {
            host: host.clone(),
            value: Some(base * SCALE + i as i64),
        })
    }

    /// render the renumbered listing, one `host:value` per line
    pub fn render(&self, base: i64) -> String {
        let mut res = String::new();
        for record in self.rewritten(base) {
            res.push_str(&record.to_string());
            res.push('\n');
        }
        res
    }
}
