//! `.mbch` / `.mbtc` text format primitives
//!
//! The format is brace-delimited and tab-indented:
//!
//! ```text
//! ClassInfo
//! {
//! 	name	"Knight"
//! 	c_att_skill_0	MB_ATT_SWORD
//! 	c_att_names_0	"Sword"
//! 	c_att_ranks_0	3
//! }
//! ```
//!
//! Nothing here builds a document tree. Each submodule recognizes one slice of
//! the format that the transforms need:
//! - [`block`] - named blocks and brace depth
//! - [`property`] - `key<ws>value` lines
//! - [`triplet`] - `c_att_skill_N` / `c_att_names_N` / `c_att_ranks_N` groups
//! - [`directive`] - `//PBADJUST B:G` comments

pub mod block;
pub mod directive;
pub mod property;
pub mod triplet;

pub use block::{BlockSpan, LineDepth, find_block, insert_before_close, line_depths, matching_close};
pub use directive::PbAdjust;
pub use property::Property;
pub use triplet::{AttributeKind, AttributeLine, BrokenTriplet, Triplet, TripletScan, scan_triplet};

/// Extension of character files.
pub const MBCH_EXTENSION: &str = "mbch";
/// Extension of files that reference character files.
pub const MBTC_EXTENSION: &str = "mbtc";

/// Split content into lines, each keeping its own line ending.
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    content.split_inclusive('\n')
}

/// Split a line into its body and its line ending (`"\n"`, `"\r\n"` or `""`).
pub fn split_ending(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

/// Line body without its line ending.
pub fn line_body(line: &str) -> &str {
    split_ending(line).0
}
