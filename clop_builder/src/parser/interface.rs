use crate::constant::*;
use crate::parser::base::ParseError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[derive(Debug, Clone, Copy)]
pub(crate) struct LeftWidth(pub usize);

#[derive(Debug, Clone, Copy)]
pub(crate) struct GutterWidth(usize);

impl GutterWidth {
    pub(crate) fn new(width: usize) -> Result<Self, ()> {
        // gutter must be at least 1
        if width >= 1 {
            Ok(GutterWidth(width))
        } else {
            Err(())
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct RightWidth(usize);

impl RightWidth {
    pub(crate) fn new(width: usize) -> Result<Self, ()> {
        // right must be at least 2 (so we can hyphenate)
        if width >= 2 {
            Ok(RightWidth(width))
        } else {
            Err(())
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct TotalWidth(pub usize);

/// Renders a left column (padded) and a right column (wrapped), separated by a gutter.
#[derive(Debug)]
pub(crate) struct ColumnRenderer {
    left: LeftWidth,
    gutter: GutterWidth,
    right: RightWidth,
}

impl ColumnRenderer {
    /// Produce a renderer whose right column fills whatever the left column and gutter leave of the total.
    pub(crate) fn guided(left: LeftWidth, gutter: GutterWidth, total_width: TotalWidth) -> Self {
        let non_right = left.0 + gutter.0;

        if non_right + MINIMUM_DESCRIPTION_WIDTH <= total_width.0 {
            let right = total_width.0 - non_right;
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Columns {non_right} fit within the total {total_width:?}.  Selecting right: {right}.");
            }

            Self::new(
                left,
                gutter,
                RightWidth::new(right).expect("internal error - right must be valid"),
            )
        } else {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Columns {non_right} do not fit within the total {total_width:?}.  Selecting right: {MINIMUM_DESCRIPTION_WIDTH}.");
            }

            Self::new(
                left,
                gutter,
                RightWidth::new(MINIMUM_DESCRIPTION_WIDTH)
                    .expect("internal error - minimum right must be valid"),
            )
        }
    }

    pub(crate) fn new(left: LeftWidth, gutter: GutterWidth, right: RightWidth) -> Self {
        Self {
            left,
            gutter,
            right,
        }
    }

    pub(crate) fn render(&self, left: &str, right: &str) -> Vec<String> {
        let left_column_width = self.left.0;
        let gutter = format!("{:width$}", "", width = self.gutter.0);
        let indent = left_column_width + self.gutter.0;

        chunk(right, self.right.0)
            .into_iter()
            .enumerate()
            .map(|(i, part)| {
                if i == 0 {
                    format!("{:left_column_width$}{gutter}{part}", left)
                } else {
                    format!("{:indent$}{part}", "")
                }
            })
            .collect()
    }
}

/// Break the paragraph into lines no wider than `width` characters.
///
/// Each break replaces the last space at or before `width`.
/// A line without any such space is hyphenated.
/// Always produces at least one line, even for an empty paragraph.
fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut remaining = paragraph;

    while remaining.chars().count() > width {
        // The break may fall on the space directly after a full line.
        let bound = char_offset(remaining, width + 1);

        match remaining[..bound].rfind(' ') {
            Some(space) => {
                lines.push(remaining[..space].to_string());
                remaining = &remaining[space + 1..];
            }
            None => {
                let split = char_offset(remaining, width - 1);
                lines.push(format!("{}-", &remaining[..split]));
                remaining = &remaining[split..];
            }
        }
    }

    lines.push(remaining.to_string());
    lines
}

fn char_offset(text: &str, count: usize) -> usize {
    text.char_indices()
        .nth(count)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, error: &ParseError);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: &ParseError) {
        eprintln!("{error}");
    }
}

#[cfg(any(test, feature = "unit_test"))]
pub(crate) mod util {
    use crate::parser::{ParseError, UserInterface};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Captures everything printed, for inspection after the interface has been handed to a parser.
    #[derive(Debug, Default, Clone)]
    pub(crate) struct InMemoryInterface {
        messages: Rc<RefCell<Vec<String>>>,
        errors: Rc<RefCell<Vec<String>>>,
    }

    impl UserInterface for InMemoryInterface {
        fn print(&self, message: String) {
            self.messages.borrow_mut().push(message);
        }

        fn print_error(&self, error: &ParseError) {
            self.errors.borrow_mut().push(error.to_string());
        }
    }

    impl InMemoryInterface {
        /// The printed messages, each newline terminated (as they would appear on the console).
        pub(crate) fn take_messages(&self) -> Option<String> {
            join(self.messages.take())
        }

        /// The printed errors, each newline terminated (as they would appear on the console).
        pub(crate) fn take_errors(&self) -> Option<String> {
            join(self.errors.take())
        }

        #[cfg(test)]
        pub(crate) fn consume_message(&self) -> String {
            assert_eq!(self.take_errors(), None);
            self.take_messages().unwrap()
        }

        #[cfg(test)]
        pub(crate) fn consume_error(&self) -> String {
            assert_eq!(self.take_messages(), None);
            self.take_errors().unwrap()
        }
    }

    fn join(lines: Vec<String>) -> Option<String> {
        if lines.is_empty() {
            None
        } else {
            Some(lines.into_iter().map(|line| format!("{line}\n")).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn renderer(left: usize, right: usize) -> ColumnRenderer {
        ColumnRenderer::new(
            LeftWidth(left),
            GutterWidth::new(4).unwrap(),
            RightWidth::new(right).unwrap(),
        )
    }

    #[test]
    fn widths() {
        assert_matches!(GutterWidth::new(0), Err(()));
        assert_matches!(GutterWidth::new(1), Ok(_));
        assert_matches!(RightWidth::new(1), Err(()));
        assert_matches!(RightWidth::new(2), Ok(_));
    }

    #[test]
    fn column_renderer_simple() {
        let cr = renderer(5, 23);

        assert_eq!(
            cr.render("abc", "something"),
            vec!["abc      something".to_string()]
        );
        assert_eq!(
            cr.render("abc12", "something pieces full"),
            vec!["abc12    something pieces full".to_string()]
        );
        assert_eq!(
            cr.render("abc", "something pieces full more stuff"),
            vec![
                "abc      something pieces full".to_string(),
                "         more stuff".to_string(),
            ]
        );
        assert_eq!(
            cr.render("abc", "something pieces fuller more stuff"),
            vec![
                "abc      something pieces fuller".to_string(),
                "         more stuff".to_string(),
            ]
        );
        assert_eq!(
            cr.render("abc", "something pieces fullest more stuff"),
            vec![
                "abc      something pieces".to_string(),
                "         fullest more stuff".to_string(),
            ]
        );
    }

    #[test]
    fn column_renderer_empty() {
        let cr = renderer(5, 23);
        assert_eq!(cr.render("abc", ""), vec!["abc      ".to_string()]);
        assert_eq!(cr.render("", ""), vec!["         ".to_string()]);
    }

    #[test]
    fn column_renderer_left_overflow() {
        let cr = renderer(2, 23);
        assert_eq!(
            cr.render("abcdef", "something"),
            vec!["abcdef    something".to_string()]
        );
    }

    #[test]
    fn column_renderer_right_overflow() {
        let cr = renderer(5, 23);

        assert_eq!(
            cr.render("abc", "somethingxpiecesxfuller"),
            vec!["abc      somethingxpiecesxfuller".to_string()]
        );
        assert_eq!(
            cr.render("abc", "somethingxpiecesxfullerandthenwecontinueforalongtime"),
            vec![
                "abc      somethingxpiecesxfulle-".to_string(),
                "         randthenwecontinuefora-".to_string(),
                "         longtime".to_string(),
            ]
        );
    }

    #[rstest]
    #[case(LeftWidth(10), 66)]
    #[case(LeftWidth(59), 17)]
    #[case(LeftWidth(60), 17)]
    #[case(LeftWidth(100), 17)]
    fn column_renderer_guided(#[case] left: LeftWidth, #[case] expected: usize) {
        let cr = ColumnRenderer::guided(
            left,
            GutterWidth::new(4).unwrap(),
            TotalWidth(80),
        );
        assert_eq!(cr.right.0, expected);
    }

    #[rstest]
    #[case("", 5, vec![""])]
    #[case("abcde", 5, vec!["abcde"])]
    #[case("ab de", 5, vec!["ab de"])]
    #[case("ab de f", 5, vec!["ab de", "f"])]
    #[case("abc defgh", 5, vec!["abc", "defgh"])]
    #[case("abcdef gh", 5, vec!["abcd-", "ef gh"])]
    #[case("a  b", 2, vec!["a ", "b"])]
    #[case("ab  ", 2, vec!["ab", " "])]
    #[case("äöü ßå", 3, vec!["äöü", "ßå"])]
    fn chunk_paragraph(#[case] paragraph: &str, #[case] width: usize, #[case] expected: Vec<&str>) {
        assert_eq!(chunk(paragraph, width), expected);
    }
}
