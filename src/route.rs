// src/route.rs
//! Route reconstruction from free-text stop/time blocks.
//!
//! Providers render the intermediate stops of a departure as one loosely
//! structured text block: segments separated by a delimiter token, with an
//! optional boundary marker after which the listed stops are estimates
//! rather than confirmed. The marker's position, not just its presence,
//! decides how many leading stops are exact.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One reconstructed stop on a route. The time stays a label; providers
/// mix confirmed times with estimates like "ca. 08:05".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub stop: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Route {
    pub entries: Vec<RouteEntry>,
    /// How many leading entries carry confirmed times.
    pub exact_stops: usize,
}

/// Line offsets inside one split segment.
const STOP_LINE: usize = 0;
const TIME_LINE: usize = 3;
/// A segment needs at least this many lines to contribute an entry;
/// shorter ones are decorative leftovers from the split.
const MIN_SEGMENT_LINES: usize = 4;

pub(crate) struct RouteSplitter {
    split: Regex,
    boundary: Option<Regex>,
}

impl RouteSplitter {
    /// `delimiter` and `boundary` are regex patterns. The split pattern
    /// recognizes both; the boundary alternative comes first so it wins
    /// where the two could match the same text.
    pub fn new(delimiter: &str, boundary: Option<&str>) -> Result<Self, regex::Error> {
        let split_pat = match boundary {
            Some(b) => format!("(?:{b})|(?:{delimiter})"),
            None => format!("(?:{delimiter})"),
        };
        Ok(Self {
            split: Regex::new(&split_pat)?,
            boundary: boundary.map(Regex::new).transpose()?,
        })
    }

    /// Two passes: segment split, then a positional scan counting delimiter
    /// occurrences up to and including the first boundary occurrence.
    pub fn reconstruct(&self, block: &str) -> Route {
        let segments: Vec<&str> = self.split.split(block).collect();

        let exact_stops = match &self.boundary {
            Some(boundary) if boundary.is_match(block) => {
                let mut count = 0;
                for m in self.split.find_iter(block) {
                    count += 1;
                    if boundary.is_match(m.as_str()) {
                        break;
                    }
                }
                count
            }
            // No boundary marker anywhere: everything is confirmed.
            _ => segments.len(),
        };

        let mut entries = Vec::new();
        for segment in &segments {
            let lines: Vec<&str> = segment.trim().lines().collect();
            if lines.len() < MIN_SEGMENT_LINES {
                debug!(segment = segment.trim(), "dropping short route segment");
                continue;
            }
            entries.push(RouteEntry {
                stop: lines[STOP_LINE].trim().to_string(),
                time: lines[TIME_LINE].trim().to_string(),
            });
        }

        Route { entries, exact_stops }
    }
}
