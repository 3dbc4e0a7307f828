use crate::Span;

/// Handle into the virtual file store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FileId(pub u32);

/// Source text with a precomputed line table.
#[derive(Clone, Debug)]
pub struct SourceText {
    text: String,
    line_starts: Vec<u32>,
}

impl SourceText {
    pub fn new(text: String) -> Self {
        let mut line_starts = Vec::with_capacity(text.len().saturating_div(64).max(32));
        line_starts.push(0u32);
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push((i + 1) as u32);
            }
        }
        Self { text, line_starts }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> u32 {
        self.text.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn slice(&self, span: Span) -> &str {
        &self.text[span.start as usize..span.end as usize]
    }

    /// Zero-based line index of a byte offset.
    pub fn line_of(&self, byte: u32) -> u32 {
        let byte = byte.min(self.text.len() as u32);
        match self.line_starts.binary_search(&byte) {
            Ok(i) => i as u32,
            Err(i) => i.saturating_sub(1) as u32,
        }
    }

    /// Zero-based (line, column); the column counts characters.
    pub fn line_col(&self, byte: u32) -> (u32, u32) {
        let byte = byte.min(self.text.len() as u32);
        let line = self.line_of(byte);
        let line_start = self.line_starts[line as usize] as usize;
        let mut target = byte as usize;
        while target > line_start && !self.text.is_char_boundary(target) {
            target -= 1;
        }
        let col = self.text[line_start..target].chars().count() as u32;
        (line, col)
    }

    /// Byte range of a line, excluding its newline.
    pub fn line_span(&self, line: u32) -> (u32, u32) {
        let start = self.line_starts[line as usize];
        let end = self
            .line_starts
            .get(line as usize + 1)
            .map(|&next| next.saturating_sub(1))
            .unwrap_or(self.text.len() as u32);
        (start, end.max(start))
    }
}

struct SourceEntry {
    path: String,
    text: SourceText,
}

/// Append-only virtual file store. Ids are dense, in allocation order.
///
/// The store owns copies of both path and content; entries live until
/// `clear` or drop.
#[derive(Default)]
pub struct SourceMap {
    files: Vec<SourceEntry>,
}

impl SourceMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, path: impl Into<String>, content: impl Into<String>) -> FileId {
        let id = FileId(self.files.len() as u32);
        self.files.push(SourceEntry {
            path: path.into(),
            text: SourceText::new(content.into()),
        });
        id
    }

    pub fn filepath(&self, id: FileId) -> Option<&str> {
        self.files.get(id.0 as usize).map(|e| e.path.as_str())
    }

    pub fn filecontent(&self, id: FileId) -> Option<&str> {
        self.files.get(id.0 as usize).map(|e| e.text.as_str())
    }

    pub fn source(&self, id: FileId) -> Option<&SourceText> {
        self.files.get(id.0 as usize).map(|e| &e.text)
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }
}
