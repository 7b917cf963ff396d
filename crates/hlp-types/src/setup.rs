use std::fmt;

/// Paragraph setup flag word.
///
/// The first 4 bytes of every paragraph sub-stream, read as a
/// little-endian `u32`. Each bit is an independent layout toggle; several
/// can be set at once. Bits not listed below are carried through
/// untouched.
///
/// ```text
/// ┌─────────────┬──────────────────────┬──────────────────────────────┐
/// │ Bit         │ Name                 │ Effect                       │
/// ├─────────────┼──────────────────────┼──────────────────────────────┤
/// │ 0x0002_0000 │ SPACE_BEFORE         │ spacing above the paragraph  │
/// │ 0x0004_0000 │ SPACE_AFTER          │ spacing below the paragraph  │
/// │ 0x0008_0000 │ LINE_SPACING_BEFORE  │ line spacing value present   │
/// │ 0x0010_0000 │ LEFT_MARGIN_INDENT   │ left indent present          │
/// │ 0x0020_0000 │ RIGHT_MARGIN_INDENT  │ right indent present         │
/// │ 0x0040_0000 │ FIRST_LINE_INDENT    │ first-line indent present    │
/// │ 0x0100_0000 │ HAS_BORDER           │ border sub-record follows    │
/// │ 0x0200_0000 │ HAS_TAB_SETTINGS     │ tab stop table present       │
/// │ 0x0400_0000 │ RIGHT_JUSTIFY        │ right aligned                │
/// │ 0x0800_0000 │ CENTER_JUSTIFY       │ centred                      │
/// │ 0x1000_0000 │ NO_WRAP              │ lines are not wrapped        │
/// └─────────────┴──────────────────────┴──────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ParagraphSetup(u32);

impl ParagraphSetup {
    pub const NONE: Self = Self(0);
    pub const SPACE_BEFORE: Self = Self(0x0002_0000);
    pub const SPACE_AFTER: Self = Self(0x0004_0000);
    pub const LINE_SPACING_BEFORE: Self = Self(0x0008_0000);
    pub const LEFT_MARGIN_INDENT: Self = Self(0x0010_0000);
    pub const RIGHT_MARGIN_INDENT: Self = Self(0x0020_0000);
    pub const FIRST_LINE_INDENT: Self = Self(0x0040_0000);
    pub const HAS_BORDER: Self = Self(0x0100_0000);
    pub const HAS_TAB_SETTINGS: Self = Self(0x0200_0000);
    pub const RIGHT_JUSTIFY: Self = Self(0x0400_0000);
    pub const CENTER_JUSTIFY: Self = Self(0x0800_0000);
    pub const NO_WRAP: Self = Self(0x1000_0000);

    const NAMED: [(Self, &'static str); 11] = [
        (Self::SPACE_BEFORE, "space_before"),
        (Self::SPACE_AFTER, "space_after"),
        (Self::LINE_SPACING_BEFORE, "line_spacing_before"),
        (Self::LEFT_MARGIN_INDENT, "left_margin_indent"),
        (Self::RIGHT_MARGIN_INDENT, "right_margin_indent"),
        (Self::FIRST_LINE_INDENT, "first_line_indent"),
        (Self::HAS_BORDER, "has_border"),
        (Self::HAS_TAB_SETTINGS, "has_tab_settings"),
        (Self::RIGHT_JUSTIFY, "right_justify"),
        (Self::CENTER_JUSTIFY, "center_justify"),
        (Self::NO_WRAP, "no_wrap"),
    ];

    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// True when every bit of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Whether a border sub-record follows the flag word.
    #[must_use]
    pub const fn has_border(self) -> bool {
        self.contains(Self::HAS_BORDER)
    }

    #[must_use]
    pub const fn has_tab_settings(self) -> bool {
        self.contains(Self::HAS_TAB_SETTINGS)
    }

    #[must_use]
    pub const fn no_wrap(self) -> bool {
        self.contains(Self::NO_WRAP)
    }

    /// Horizontal alignment. Center wins when both justify bits are set.
    #[must_use]
    pub const fn justification(self) -> Justification {
        if self.contains(Self::CENTER_JUSTIFY) {
            Justification::Center
        } else if self.contains(Self::RIGHT_JUSTIFY) {
            Justification::Right
        } else {
            Justification::Left
        }
    }

    /// Names of the known flags that are set, lowest bit first.
    pub fn iter_names(self) -> impl Iterator<Item = &'static str> {
        Self::NAMED
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, name)| name)
    }
}

impl std::ops::BitOr for ParagraphSetup {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl fmt::Display for ParagraphSetup {
    /// `space_before|has_border`, or `none` when no known flag is set.
    /// Unknown bits are appended as hex.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known = Self::NAMED.iter().fold(0, |acc, (flag, _)| acc | flag.0);
        let unknown = self.0 & !known;

        let mut first = true;
        for name in self.iter_names() {
            if !first {
                f.write_str("|")?;
            }
            f.write_str(name)?;
            first = false;
        }
        if unknown != 0 {
            if !first {
                f.write_str("|")?;
            }
            write!(f, "{unknown:#010x}")?;
            first = false;
        }
        if first {
            f.write_str("none")?;
        }
        Ok(())
    }
}

/// Horizontal paragraph alignment derived from the justify bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Justification {
    #[default]
    Left,
    Right,
    Center,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_are_independent() {
        let setup = ParagraphSetup::SPACE_BEFORE | ParagraphSetup::HAS_BORDER;
        assert!(setup.has_border());
        assert!(setup.contains(ParagraphSetup::SPACE_BEFORE));
        assert!(!setup.contains(ParagraphSetup::SPACE_AFTER));
        assert!(!setup.has_tab_settings());
        assert_eq!(setup.raw(), 0x0102_0000);
    }

    #[test]
    fn justification_from_bits() {
        assert_eq!(ParagraphSetup::NONE.justification(), Justification::Left);
        assert_eq!(
            ParagraphSetup::RIGHT_JUSTIFY.justification(),
            Justification::Right
        );
        assert_eq!(
            ParagraphSetup::CENTER_JUSTIFY.justification(),
            Justification::Center
        );
        assert_eq!(
            (ParagraphSetup::CENTER_JUSTIFY | ParagraphSetup::RIGHT_JUSTIFY).justification(),
            Justification::Center
        );
    }

    #[test]
    fn display_lists_set_flags() {
        let setup = ParagraphSetup::SPACE_AFTER | ParagraphSetup::NO_WRAP;
        assert_eq!(setup.to_string(), "space_after|no_wrap");
        assert_eq!(ParagraphSetup::NONE.to_string(), "none");
    }

    #[test]
    fn display_keeps_unknown_bits() {
        let setup = ParagraphSetup::from_raw(0x0100_0001);
        assert_eq!(setup.to_string(), "has_border|0x00000001");
    }
}
