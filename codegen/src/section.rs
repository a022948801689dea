use crate::templates;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Data,
    Text,
}

/// One output section's accumulated text. Append-only: the header (and,
/// for the text section, the entry label) is written at construction,
/// everything else is added at the end. The buffer grows as needed, so
/// appends never truncate.
#[derive(Debug)]
pub struct Section {
    kind: SectionKind,
    buf: String,
}

impl Section {
    pub fn new(kind: SectionKind) -> Self {
        let mut buf = String::new();
        match kind {
            SectionKind::Data => buf.push_str(templates::SECTION_DATA),
            SectionKind::Text => {
                buf.push_str(templates::SECTION_TEXT);
                buf.push_str(templates::START);
            }
        }
        Section { kind, buf }
    }

    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    pub fn append(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_header() {
        let section = Section::new(SectionKind::Data);
        assert_eq!(section.kind(), SectionKind::Data);
        assert_eq!(section.as_str(), "section .data\n");
    }

    #[test]
    fn text_header_and_entry_label() {
        assert_eq!(
            Section::new(SectionKind::Text).as_str(),
            "section .text\n_start:\n"
        );
    }

    #[test]
    fn appends_preserve_order() {
        let mut section = Section::new(SectionKind::Data);
        section.append("a db 1\n");
        section.append("b db 2\n");
        assert_eq!(section.as_str(), "section .data\na db 1\nb db 2\n");
    }
}
