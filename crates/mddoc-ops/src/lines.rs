use std::io::{self, BufRead};

/// Terminator that ended a physical line in the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
    None,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::None => "",
        }
    }
}

/// One line of a content file, split from its terminator so predicates see bare text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    pub number: usize,
    pub text: String,
    pub ending: LineEnding,
}

impl LineRecord {
    /// Push the line exactly as it appeared on disk.
    pub fn write_raw(&self, out: &mut String) {
        out.push_str(&self.text);
        out.push_str(self.ending.as_str());
    }
}

/// Split `reader` into numbered lines, recording how each one was terminated.
pub fn read_lines<R: BufRead>(reader: &mut R) -> io::Result<Vec<LineRecord>> {
    let mut lines = Vec::new();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = reader.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }

        let mut text = buffer.clone();
        let mut ending = LineEnding::None;

        if text.ends_with('\n') {
            text.pop();
            ending = LineEnding::Lf;

            if text.ends_with('\r') {
                text.pop();
                ending = LineEnding::CrLf;
            }
        }

        lines.push(LineRecord {
            number: lines.len() + 1,
            text,
            ending,
        });
    }

    Ok(lines)
}
