use crate::file::SelectedFile;

/// Presentational state of the drop target.
///
/// Dragging only toggles the highlight; it never starts an upload. A drop
/// clears the highlight and hands back the first dropped file, if any.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DropZone {
    highlighted: bool,
}

impl DropZone {
    /// Files are being dragged over the zone
    pub fn drag_over(&mut self) {
        self.highlighted = true;
    }

    /// Dragged files left the zone
    pub fn drag_leave(&mut self) {
        self.highlighted = false;
    }

    /// Whether the zone is currently highlighted
    #[must_use]
    pub const fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Files were dropped on the zone; only the first one is kept
    pub fn drop<I>(&mut self, files: I) -> Option<SelectedFile>
    where
        I: IntoIterator<Item = SelectedFile>,
    {
        self.highlighted = false;
        files.into_iter().next()
    }
}
