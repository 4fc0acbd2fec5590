/// Layout of the printed combinations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputStyle {
    /// One combination per line.
    #[default]
    Lines,
    /// One line per size, combinations separated by `", "`.
    List,
}

impl OutputStyle {
    pub(crate) fn separator(&self) -> &'static [u8] {
        match self {
            OutputStyle::Lines => b"",
            OutputStyle::List => b", ",
        }
    }

    pub(crate) fn terminator(&self) -> &'static [u8] {
        match self {
            OutputStyle::Lines => b"\n",
            OutputStyle::List => b"",
        }
    }

    pub(crate) fn group_end(&self) -> &'static [u8] {
        match self {
            OutputStyle::Lines => b"",
            OutputStyle::List => b"\n",
        }
    }
}
