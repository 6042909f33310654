//! The built-in reporter abbreviations.
//!
//! Keys are the spellings found in manuscripts. Values are the Bluebook
//! forms used for normalized citations.

use phf::phf_map;

pub static REPORTERS: phf::Map<&'static str, &'static str> = phf_map! {
    // Supreme Court
    "U.S." => "U.S.",
    "S. Ct." => "S. Ct.",
    "S.Ct." => "S. Ct.",
    "L. Ed." => "L. Ed.",
    "L.Ed." => "L. Ed.",
    "L. Ed. 2d" => "L. Ed. 2d",
    "L.Ed.2d" => "L. Ed. 2d",
    "U.S.L.W." => "U.S.L.W.",

    // Federal courts
    "F." => "F.",
    "F.2d" => "F.2d",
    "F. 2d" => "F.2d",
    "F.3d" => "F.3d",
    "F. 3d" => "F.3d",
    "F.4th" => "F.4th",
    "F. 4th" => "F.4th",
    "F. Supp." => "F. Supp.",
    "F.Supp." => "F. Supp.",
    "F. Supp. 2d" => "F. Supp. 2d",
    "F.Supp.2d" => "F. Supp. 2d",
    "F. Supp. 3d" => "F. Supp. 3d",
    "F.Supp.3d" => "F. Supp. 3d",
    "F. App'x" => "F. App'x",
    "F. App’x" => "F. App'x",
    "Fed. Appx." => "F. App'x",
    "F.R.D." => "F.R.D.",
    "B.R." => "B.R.",
    "Fed. Cl." => "Fed. Cl.",

    // Regional reporters
    "A." => "A.",
    "A.2d" => "A.2d",
    "A.3d" => "A.3d",
    "N.E." => "N.E.",
    "N.E.2d" => "N.E.2d",
    "N.E.3d" => "N.E.3d",
    "N.W." => "N.W.",
    "N.W.2d" => "N.W.2d",
    "P." => "P.",
    "P.2d" => "P.2d",
    "P.3d" => "P.3d",
    "S.E." => "S.E.",
    "S.E.2d" => "S.E.2d",
    "S.W." => "S.W.",
    "S.W.2d" => "S.W.2d",
    "S.W.3d" => "S.W.3d",
    "So." => "So.",
    "So. 2d" => "So. 2d",
    "So.2d" => "So. 2d",
    "So. 3d" => "So. 3d",
    "So.3d" => "So. 3d",

    // State reporters
    "Cal. Rptr." => "Cal. Rptr.",
    "Cal. Rptr. 2d" => "Cal. Rptr. 2d",
    "Cal. Rptr. 3d" => "Cal. Rptr. 3d",
    "N.Y.S." => "N.Y.S.",
    "N.Y.S.2d" => "N.Y.S.2d",
    "N.Y.S.3d" => "N.Y.S.3d",
    "Ill. Dec." => "Ill. Dec.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_normalize() {
        assert_eq!(REPORTERS.get("S.Ct."), Some(&"S. Ct."));
        assert_eq!(REPORTERS.get("F. Supp. 2d"), Some(&"F. Supp. 2d"));
        assert_eq!(REPORTERS.get("Fed. Appx."), Some(&"F. App'x"));
    }

    #[test]
    fn canonical_forms_map_to_themselves() {
        for canonical in REPORTERS.values() {
            assert_eq!(REPORTERS.get(canonical), Some(canonical));
        }
    }
}
