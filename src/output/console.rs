//! Terminal output: ANSI colors, CI log groups and bullet lists

use std::io::{self, Write};

const END: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Green,
    Red,
    Plain,
}

impl Color {
    pub fn paint(self, text: &str) -> String {
        match self {
            Color::Green => green(text),
            Color::Red => red(text),
            Color::Plain => text.to_string(),
        }
    }
}

pub fn green(text: &str) -> String {
    format!("{GREEN}{text}{END}")
}

pub fn red(text: &str) -> String {
    format!("{RED}{text}{END}")
}

/// Line-oriented writer that knows whether it runs inside GitHub Actions
pub struct Console<W: Write> {
    out: W,
    github: bool,
}

impl Console<io::Stdout> {
    pub fn stdout(github: bool) -> Self {
        Self::new(io::stdout(), github)
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, github: bool) -> Self {
        Self { out, github }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn line(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.out, "{}", text.as_ref())
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Print `body` inside a collapsible group on GitHub, or under a
    /// `title:` heading elsewhere
    pub fn group<F>(&mut self, title: &str, body: F) -> io::Result<()>
    where
        F: FnOnce(&mut Self) -> io::Result<()>,
    {
        if self.github {
            self.line(format!("::group::{title}"))?;
        } else {
            self.line(format!("{title}:"))?;
        }

        body(self)?;

        self.blank()?;
        if self.github {
            self.line("::endgroup::")?;
        }
        Ok(())
    }

    /// Print `items` sorted, one ` - item` per line
    pub fn list<I, S>(&mut self, items: I, color: Color) -> io::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut items: Vec<String> = items.into_iter().map(|i| i.as_ref().to_string()).collect();
        items.sort();
        for item in items {
            self.line(format!(" - {}", color.paint(&item)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(github: bool, f: F) -> String
    where
        F: FnOnce(&mut Console<Vec<u8>>) -> io::Result<()>,
    {
        let mut console = Console::new(Vec::new(), github);
        f(&mut console).unwrap();
        String::from_utf8(console.into_inner()).unwrap()
    }

    #[test]
    fn test_colors() {
        assert_eq!(green("ok"), "\x1b[32mok\x1b[0m");
        assert_eq!(red("bad"), "\x1b[31mbad\x1b[0m");
        assert_eq!(Color::Plain.paint("x"), "x");
    }

    #[test]
    fn test_group_on_github() {
        let out = render(true, |c| c.group("Detected", |c| c.line("body")));
        assert_eq!(out, "::group::Detected\nbody\n\n::endgroup::\n");
    }

    #[test]
    fn test_group_locally() {
        let out = render(false, |c| c.group("Detected", |c| c.line("body")));
        assert_eq!(out, "Detected:\nbody\n\n");
    }

    #[test]
    fn test_list_is_sorted() {
        let out = render(false, |c| c.list(["b", "a"], Color::Plain));
        assert_eq!(out, " - a\n - b\n");
    }
}
