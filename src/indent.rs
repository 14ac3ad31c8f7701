//! Indentation for the diagnostic dumps.
use std::fmt;

/// Spaces added per nesting level.
const STEP: usize = 2;
/// Deeper nesting than this is flattened.
const MAX: usize = 40;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Indent {
    width: usize,
}

impl Indent {
    pub fn new(width: usize) -> Self {
        Indent { width: width.min(MAX) }
    }

    /// One level deeper.
    pub fn next(self) -> Self {
        Indent::new(self.width + STEP)
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:width$}", "", width = self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_and_caps() {
        let indent = Indent::default();
        assert_eq!(indent.to_string(), "");
        assert_eq!(indent.next().to_string(), "  ");
        assert_eq!(indent.next().next().width(), 4);
        assert_eq!(Indent::new(39).next().width(), 40);
        assert_eq!(Indent::new(100).width(), 40);
    }
}
