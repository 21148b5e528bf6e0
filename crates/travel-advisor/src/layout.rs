pub const ARROW_OPEN: &str = "▲";
pub const ARROW_CLOSED: &str = "▼";
pub const SIDEBAR_OPEN_ICON: &str = "×";
pub const SIDEBAR_CLOSED_ICON: &str = "☰";

/// Terminals narrower than this get the mobile behaviour: picking a history
/// entry closes the sidebar.
pub const NARROW_COLUMNS: u16 = 80;

/// Collapsible result sections with accordion semantics: at most one section
/// is open, and opening one closes the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
    len: usize,
}

impl Accordion {
    /// Rebinds to `len` freshly rendered sections with the first one open.
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.open = (len > 0).then_some(0);
    }

    /// Clicking the open header closes it; clicking any other opens it alone.
    pub fn toggle(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        true
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn arrow(&self, index: usize) -> &'static str {
        if self.is_open(index) {
            ARROW_OPEN
        } else {
            ARROW_CLOSED
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sidebar {
    open: bool,
}

impl Sidebar {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn icon(&self) -> &'static str {
        if self.open {
            SIDEBAR_OPEN_ICON
        } else {
            SIDEBAR_CLOSED_ICON
        }
    }
}

pub fn is_narrow_terminal() -> bool {
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| w < NARROW_COLUMNS)
        .unwrap_or(false)
}
