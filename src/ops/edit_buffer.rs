use crate::util::unicode;

/// Single-line text being edited, with a byte cursor that always sits on a
/// grapheme boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    text: String,
    cursor: usize,
}

impl EditBuffer {
    /// Buffer holding `text` with the cursor at the end
    pub fn new(text: &str) -> Self {
        EditBuffer {
            text: text.to_string(),
            cursor: text.len(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Cursor position in terminal cells
    pub fn cursor_col(&self) -> usize {
        unicode::byte_offset_to_display_col(&self.text, self.cursor)
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Replace the contents, cursor at end
    pub fn reset(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.reset("");
    }

    /// Take the text out, leaving the buffer empty
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    pub fn insert_char(&mut self, c: char) {
        let c = if c == '\t' || c == '\n' { ' ' } else { c };
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert pasted text. Line breaks become spaces since titles are single-line.
    pub fn insert_str(&mut self, s: &str) {
        let clean: String = s
            .chars()
            .filter(|&c| c != '\r')
            .map(|c| if c == '\n' || c == '\t' { ' ' } else { c })
            .collect();
        self.text.insert_str(self.cursor, &clean);
        self.cursor += clean.len();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.text, self.cursor) {
            self.text.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.text, self.cursor) {
            self.text.replace_range(self.cursor..next, "");
        }
    }

    /// Delete the word left of the cursor
    pub fn delete_word(&mut self) {
        let start = unicode::word_boundary_left(&self.text, self.cursor);
        self.text.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_puts_cursor_at_end() {
        let buf = EditBuffer::new("milk");
        assert_eq!(buf.cursor(), 4);
        assert_eq!(buf.cursor_col(), 4);
    }

    #[test]
    fn test_insert_and_backspace_graphemes() {
        let mut buf = EditBuffer::new("caf");
        buf.insert_str("e\u{0301}");
        buf.insert_char('🎉');
        assert_eq!(buf.text(), "cafe\u{0301}🎉");
        assert_eq!(buf.cursor_col(), 6);

        buf.backspace();
        assert_eq!(buf.text(), "cafe\u{0301}");
        buf.backspace();
        assert_eq!(buf.text(), "caf");
    }

    #[test]
    fn test_cursor_movement_and_delete() {
        let mut buf = EditBuffer::new("你好");
        buf.move_left();
        assert_eq!(buf.cursor(), 3);
        assert_eq!(buf.cursor_col(), 2);
        buf.move_home();
        buf.delete();
        assert_eq!(buf.text(), "好");
        buf.move_right();
        buf.move_right();
        assert_eq!(buf.cursor(), 3);
        buf.delete();
        assert_eq!(buf.text(), "好");
    }

    #[test]
    fn test_insert_mid_text() {
        let mut buf = EditBuffer::new("Buy milk");
        for _ in 0..4 {
            buf.move_left();
        }
        buf.insert_str("oat ");
        assert_eq!(buf.text(), "Buy oat milk");
        buf.move_end();
        assert_eq!(buf.cursor(), buf.text().len());
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut buf = EditBuffer::default();
        buf.insert_str("one\r\ntwo\tthree");
        assert_eq!(buf.text(), "one two three");
    }

    #[test]
    fn test_delete_word() {
        let mut buf = EditBuffer::new("buy oat milk");
        buf.delete_word();
        assert_eq!(buf.text(), "buy oat ");
        buf.delete_word();
        assert_eq!(buf.text(), "buy ");
    }

    #[test]
    fn test_take_and_blank() {
        let mut buf = EditBuffer::new("  ");
        assert!(buf.is_blank());
        buf.reset("x");
        assert!(!buf.is_blank());
        assert_eq!(buf.take(), "x");
        assert_eq!(buf.text(), "");
        assert_eq!(buf.cursor(), 0);
    }
}
