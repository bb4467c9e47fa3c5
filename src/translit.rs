//! Substitution of visually identical Cyrillic and Latin letters.
//!
//! Only the twelve letter pairs that share a glyph are mapped:
//!
//! ```text
//! а a   в b   е e   к k   м m   н h
//! о o   р p   с c   т t   у y   х x
//! ```
//!
//! This is not a phonetic transliteration. Characters without a
//! counterpart, including `ё`/`Ё`, pass through unchanged. Case is
//! preserved: an uppercase source letter is lowered for the lookup and
//! the substitute is raised back.

use std::ops::RangeInclusive;

/// Distance from an uppercase letter to its lowercase form. The same for
/// the basic Latin and the basic Cyrillic (`А..=Я`) blocks.
const CASE_OFFSET: u32 = 0x20;

/// Lowercase `(cyrillic, latin)` look-alike pairs.
const LOOKALIKES: [(char, char); 12] = [
    ('а', 'a'),
    ('в', 'b'),
    ('е', 'e'),
    ('к', 'k'),
    ('м', 'm'),
    ('н', 'h'),
    ('о', 'o'),
    ('р', 'p'),
    ('с', 'c'),
    ('т', 't'),
    ('у', 'y'),
    ('х', 'x'),
];

#[derive(Debug, Clone, Copy)]
enum Direction {
    CyrToLat,
    LatToCyr,
}

impl Direction {
    fn source_upper(self) -> RangeInclusive<char> {
        match self {
            Self::CyrToLat => 'А'..='Я',
            Self::LatToCyr => 'A'..='Z',
        }
    }

    fn lookup(self, lower: char) -> Option<char> {
        LOOKALIKES.iter().find_map(|&(cyr, lat)| match self {
            Self::CyrToLat if cyr == lower => Some(lat),
            Self::LatToCyr if lat == lower => Some(cyr),
            _ => None,
        })
    }

    fn substitute(self, c: char) -> char {
        let is_upper = self.source_upper().contains(&c);
        let lower = if is_upper { shift(c, CASE_OFFSET as i64) } else { c };
        match self.lookup(lower) {
            Some(sub) if is_upper => shift(sub, -(CASE_OFFSET as i64)),
            Some(sub) => sub,
            None => c,
        }
    }

    fn apply(self, input: &str) -> String {
        input.chars().map(|c| self.substitute(c)).collect()
    }
}

/// Moves `c` by `delta` code points. Only called with letters whose
/// shifted form is a valid scalar value; anything else is returned as is.
#[inline]
fn shift(c: char, delta: i64) -> char {
    u32::try_from(c as i64 + delta)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(c)
}

/// Replaces Cyrillic letters with their visually identical Latin
/// counterparts.
///
/// # Examples
/// ```
/// use stalw::translit::cyr_to_lat;
/// assert_eq!(cyr_to_lat("йцукенг"), "йцykehг");
/// assert_eq!(cyr_to_lat("ЙЦУКЕНГ"), "ЙЦYKEHГ");
/// ```
pub fn cyr_to_lat(input: &str) -> String {
    Direction::CyrToLat.apply(input)
}

/// Replaces Latin letters with their visually identical Cyrillic
/// counterparts.
///
/// # Examples
/// ```
/// use stalw::translit::lat_to_cyr;
/// assert_eq!(lat_to_cyr("qwerty"), "qwеrту");
/// assert_eq!(lat_to_cyr("HOME"), "НОМЕ");
/// ```
pub fn lat_to_cyr(input: &str) -> String {
    Direction::LatToCyr.apply(input)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        // --- round trip holds on the Cyrillic look-alikes ---
        #[test]
        fn round_trip_mapped_subset(s in "[авекмнорстухАВЕКМНОРСТУХ]{0,40}") {
            prop_assert_eq!(lat_to_cyr(&cyr_to_lat(&s)), s);
        }

        // --- output has the same number of characters ---
        #[test]
        fn preserves_char_count(s in "\\PC{0,40}") {
            prop_assert_eq!(cyr_to_lat(&s).chars().count(), s.chars().count());
            prop_assert_eq!(lat_to_cyr(&s).chars().count(), s.chars().count());
        }

        // --- cyr_to_lat leaves no mapped Cyrillic letter behind ---
        #[test]
        fn no_mapped_cyrillic_left(s in "[а-яА-Я ]{0,40}") {
            let out = cyr_to_lat(&s);
            prop_assert!(out.chars().all(|c| !"авекмнорстухАВЕКМНОРСТУХ".contains(c)));
        }
    }
}
