use std::fmt;

/// Paragraph border flags, the middle byte of the border sub-record.
///
/// Bit layout:
///   bit 0 = boxed (all four sides)
///   bit 1 = top
///   bit 2 = left
///   bit 3 = bottom
///   bit 4 = right
///   bit 5 = thick line
///   bit 6 = double line
///   bit 7 = dotted line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ParagraphBorder(u8);

impl ParagraphBorder {
    pub const NONE: Self = Self(0);
    pub const BOXED: Self = Self(0b0000_0001);
    pub const TOP: Self = Self(0b0000_0010);
    pub const LEFT: Self = Self(0b0000_0100);
    pub const BOTTOM: Self = Self(0b0000_1000);
    pub const RIGHT: Self = Self(0b0001_0000);
    pub const THICK: Self = Self(0b0010_0000);
    pub const DOUBLE: Self = Self(0b0100_0000);
    pub const DOTTED: Self = Self(0b1000_0000);

    const NAMED: [(Self, &'static str); 8] = [
        (Self::BOXED, "boxed"),
        (Self::TOP, "top"),
        (Self::LEFT, "left"),
        (Self::BOTTOM, "bottom"),
        (Self::RIGHT, "right"),
        (Self::THICK, "thick"),
        (Self::DOUBLE, "double"),
        (Self::DOTTED, "dotted"),
    ];

    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn is_boxed(self) -> bool {
        self.contains(Self::BOXED)
    }

    pub fn top(self) -> bool {
        self.is_boxed() || self.contains(Self::TOP)
    }

    pub fn left(self) -> bool {
        self.is_boxed() || self.contains(Self::LEFT)
    }

    pub fn bottom(self) -> bool {
        self.is_boxed() || self.contains(Self::BOTTOM)
    }

    pub fn right(self) -> bool {
        self.is_boxed() || self.contains(Self::RIGHT)
    }

    pub fn is_thick(self) -> bool {
        self.contains(Self::THICK)
    }

    pub fn is_double(self) -> bool {
        self.contains(Self::DOUBLE)
    }

    pub fn is_dotted(self) -> bool {
        self.contains(Self::DOTTED)
    }
}

impl std::ops::BitOr for ParagraphBorder {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Display for ParagraphBorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = Self::NAMED
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name);
        match names.next() {
            None => f.write_str("none"),
            Some(first) => {
                f.write_str(first)?;
                for name in names {
                    write!(f, "|{name}")?;
                }
                Ok(())
            }
        }
    }
}
