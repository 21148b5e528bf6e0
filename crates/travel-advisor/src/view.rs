use std::fmt;

use crate::controller::Phase;
use crate::facts::FACT_TITLE;
use crate::history::SessionHistory;
use crate::layout::{Accordion, Sidebar};
use crate::render::RenderedAdvice;

const RULE: &str = "------------------------------------------------------------";

/// Borrowed snapshot of everything the terminal draws.
pub struct Frame<'a> {
    pub phase: &'a Phase,
    pub accordion: &'a Accordion,
    pub sidebar: Sidebar,
    pub history: &'a SessionHistory,
    pub fact: Option<&'a str>,
}

impl fmt::Display for Frame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}] Travel Advisor", self.sidebar.icon())?;
        if self.sidebar.is_open() {
            write_history(f, self.history)?;
        }
        writeln!(f, "{RULE}")?;

        match self.phase {
            Phase::Idle => writeln!(f, "Search with /search <city> | <country> [| <hobbies>]")?,
            Phase::Loading => {
                writeln!(f, "Loading travel advice...")?;
                if let Some(fact) = self.fact {
                    writeln!(f)?;
                    writeln!(f, "  {FACT_TITLE}")?;
                    writeln!(f, "  {fact}")?;
                }
            }
            Phase::Error(message) => writeln!(f, "Error: {message}")?,
            Phase::Displaying(rendered) => write_results(f, rendered, self.accordion)?,
        }
        Ok(())
    }
}

fn write_history(f: &mut fmt::Formatter<'_>, history: &SessionHistory) -> fmt::Result {
    writeln!(f, "{RULE}")?;
    writeln!(f, "Search history")?;
    if history.is_empty() {
        return writeln!(f, "  (no searches yet)");
    }
    for (i, entry) in history.list().iter().enumerate() {
        writeln!(f, "  {}. {}", i + 1, entry.title())?;
        writeln!(f, "     {}", entry.last_viewed_label())?;
    }
    Ok(())
}

fn write_results(
    f: &mut fmt::Formatter<'_>,
    rendered: &RenderedAdvice,
    accordion: &Accordion,
) -> fmt::Result {
    writeln!(f, "{}", rendered.header)?;
    writeln!(f)?;
    for (i, section) in rendered.sections.iter().enumerate() {
        writeln!(f, "{} {}. {}", accordion.arrow(i), i + 1, section.label)?;
        if !accordion.is_open(i) {
            continue;
        }
        for (p, paragraph) in section.paragraphs.iter().enumerate() {
            if p > 0 {
                writeln!(f)?;
            }
            for line in paragraph {
                writeln!(f, "    {line}")?;
            }
        }
        writeln!(f)?;
    }
    writeln!(f)?;
    writeln!(f, "{}", rendered.follow_up.title)?;
    writeln!(f, "  /ask <{}>", rendered.follow_up.placeholder)
}
