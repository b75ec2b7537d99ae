use super::Printer;

impl Printer {
    // =========================================================================
    // Output Helpers (delegate to SourceWriter)
    // =========================================================================

    pub(super) fn write(&mut self, text: &str) {
        self.writer.write(text);
    }

    pub(super) fn write_space(&mut self) {
        self.writer.write_space();
    }

    pub(super) fn write_line(&mut self) {
        self.writer.write_line();
    }

    pub(super) fn increase_indent(&mut self) {
        self.writer.increase_indent();
    }

    pub(super) fn decrease_indent(&mut self) {
        self.writer.decrease_indent();
    }

    /// Emit `items` separated by `", "`.
    pub(super) fn emit_comma_separated<T>(
        &mut self,
        items: &[T],
        mut emit: impl FnMut(&mut Self, &T),
    ) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            emit(self, item);
        }
    }

    /// Emit a list that may contain holes (`[a, , b]`). A trailing hole needs
    /// an extra comma, since `[a, ]` has length 1 but `[a, ,]` has length 2,
    /// unless a rest element follows.
    pub(super) fn emit_elements_with_holes<T>(
        &mut self,
        items: &[Option<T>],
        followed_by_rest: bool,
        mut emit: impl FnMut(&mut Self, &T),
    ) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            if let Some(item) = item {
                emit(self, item);
            }
        }
        if !followed_by_rest && matches!(items.last(), Some(None)) {
            self.write(",");
        }
    }
}
