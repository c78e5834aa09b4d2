//! Attribute triplets
//!
//! One attribute slot is written as three consecutive lines sharing an index:
//!
//! ```text
//! c_att_skill_4	MB_ATT_BOW
//! c_att_names_4	"Bow"
//! c_att_ranks_4	2
//! ```

use std::fmt;

const KEY_PREFIX: &str = "c_att_";

/// Which line of a triplet an attribute key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    Skill,
    Names,
    Ranks,
}

impl AttributeKind {
    /// Key fragment between `c_att_` and `_N`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Skill => "skill",
            Self::Names => "names",
            Self::Ranks => "ranks",
        }
    }

    /// Value that marks an unset slot.
    #[must_use]
    pub fn sentinel(self) -> &'static str {
        match self {
            Self::Skill => "MB_ATT_INVALID",
            Self::Names => "\"\"",
            Self::Ranks => "-1",
        }
    }

    const ALL: [Self; 3] = [Self::Skill, Self::Names, Self::Ranks];
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A line holding a `c_att_<kind>_<N>` key, split around the index.
///
/// `lead` is whatever precedes the key (normally indentation) and `rest`
/// is everything after the digits, so a line can be rebuilt with a new
/// index without touching any other character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeLine<'a> {
    pub lead: &'a str,
    pub kind: AttributeKind,
    /// The index digits as written.
    pub index: &'a str,
    pub rest: &'a str,
}

impl<'a> AttributeLine<'a> {
    /// Find the first `c_att_<kind>_<digits>` in a line body.
    pub fn parse(body: &'a str) -> Option<Self> {
        for (at, _) in body.match_indices(KEY_PREFIX) {
            let after_prefix = &body[at + KEY_PREFIX.len()..];
            for kind in AttributeKind::ALL {
                let Some(tail) = after_prefix
                    .strip_prefix(kind.as_str())
                    .and_then(|t| t.strip_prefix('_'))
                else {
                    continue;
                };
                let digits = tail.bytes().take_while(u8::is_ascii_digit).count();
                if digits == 0 {
                    continue;
                }
                return Some(Self {
                    lead: &body[..at],
                    kind,
                    index: &tail[..digits],
                    rest: &tail[digits..],
                });
            }
        }
        None
    }

    /// Rebuild the line body with a different index.
    #[must_use]
    pub fn with_index(&self, index: usize) -> String {
        format!("{}{KEY_PREFIX}{}_{index}{}", self.lead, self.kind, self.rest)
    }

    /// Whether this is a plain property line (`<indent>c_att_..._N<ws>value`)
    /// whose value is the kind's sentinel.
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        let value = self.rest.trim_start();
        self.lead.chars().all(char::is_whitespace)
            && value.len() < self.rest.len()
            && value.trim_end() == self.kind.sentinel()
    }
}

/// Three aligned attribute lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triplet<'a> {
    pub skill: AttributeLine<'a>,
    pub names: AttributeLine<'a>,
    pub ranks: AttributeLine<'a>,
}

impl Triplet<'_> {
    /// Shared index digits.
    #[must_use]
    pub fn index(&self) -> &str {
        self.skill.index
    }

    /// Whether all three lines carry their sentinel value.
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.skill.is_sentinel() && self.names.is_sentinel() && self.ranks.is_sentinel()
    }

    /// The three lines, in file order.
    #[must_use]
    pub fn lines(&self) -> [AttributeLine<'_>; 3] {
        [self.skill, self.names, self.ranks]
    }
}

/// Why a skill line did not start a well-formed triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrokenTriplet {
    /// The file ends before the third line.
    Truncated,
    /// The companion line at this offset (1 or 2) is not the expected kind.
    WrongKind { offset: usize, expected: AttributeKind },
    /// The companion line at this offset uses a different index.
    IndexMismatch { offset: usize },
}

impl fmt::Display for BrokenTriplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated => f.write_str("file ends before the triplet is complete"),
            Self::WrongKind { offset, expected } => {
                write!(f, "line +{offset} is not a c_att_{expected}_ line")
            }
            Self::IndexMismatch { offset } => write!(f, "line +{offset} uses a different index"),
        }
    }
}

/// Outcome of looking for a triplet at one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripletScan<'a> {
    /// The line is not a `c_att_skill_N` line.
    NotHead,
    Complete(Triplet<'a>),
    Broken(BrokenTriplet),
}

/// Check whether `bodies[at]` starts a triplet.
pub fn scan_triplet<'a>(bodies: &[&'a str], at: usize) -> TripletScan<'a> {
    let Some(skill) = bodies
        .get(at)
        .copied()
        .and_then(AttributeLine::parse)
        .filter(|line| line.kind == AttributeKind::Skill)
    else {
        return TripletScan::NotHead;
    };

    let mut companions = [skill; 2];
    for (slot, expected) in [AttributeKind::Names, AttributeKind::Ranks].into_iter().enumerate() {
        let offset = slot + 1;
        let Some(&body) = bodies.get(at + offset) else {
            return TripletScan::Broken(BrokenTriplet::Truncated);
        };
        let Some(line) = AttributeLine::parse(body).filter(|line| line.kind == expected) else {
            return TripletScan::Broken(BrokenTriplet::WrongKind { offset, expected });
        };
        if line.index != skill.index {
            return TripletScan::Broken(BrokenTriplet::IndexMismatch { offset });
        }
        companions[slot] = line;
    }

    TripletScan::Complete(Triplet {
        skill,
        names: companions[0],
        ranks: companions[1],
    })
}
