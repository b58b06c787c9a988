//! Selkie CLI - build CSS selectors from a list of steps
//!
//! Usage:
//!   selkie <STEP>...           Print the built selector
//!   selkie <STEP>... --json    Print the selector structure as JSON
//!   selkie --kinds             List part kinds and how they render

mod steps;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use selkie_common::warning::{set_color, warning_count};
use selkie_selector::{Selector, SelectorPartKind};
use strum::IntoEnumIterator;

/// Selkie — build order-checked CSS selectors
#[derive(Parser, Debug)]
#[command(name = "selkie")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"STEPS:
    kind:value     add a part; kinds are element, id, class, attr,
                   pseudo-class, pseudo-element
    @TOKEN         join with a combinator: @> @+ @~, or a bare @ for
                   the descendant combinator

EXAMPLES:
    # Compound selector
    selkie element:div id:main class:container

    # Attribute and pseudo-class
    selkie element:a 'attr:href$=".png"' pseudo-class:focus

    # Combinators fold left
    selkie element:h1 @+ element:p @'>' element:em

    # Structured output
    selkie --json element:ul @'>' element:li
"#)]
struct Cli {
    /// Parts (`kind:value`) and combinators (`@TOKEN`), in order
    #[arg(value_name = "STEP", required_unless_present = "kinds")]
    steps: Vec<String>,

    /// Print the selector structure as JSON
    #[arg(short, long)]
    json: bool,

    /// List the part kinds in their required order and exit
    #[arg(long)]
    kinds: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    set_color(!cli.no_color);

    if cli.kinds {
        print!("{}", kinds_table(!cli.no_color));
        return Ok(());
    }

    let selector = steps::build(cli.steps.as_slice()).context("failed to build selector")?;
    println!("{}", render_output(&selector, cli.json)?);

    if let Some(trailer) = warning_trailer(warning_count(), cli.json) {
        eprintln!("{trailer}");
    }

    Ok(())
}

/// The selector as printed: its string form, or pretty JSON with `--json`.
fn render_output(selector: &Selector, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(selector)?)
    } else {
        Ok(selector.to_string())
    }
}

/// Warning summary for stderr; omitted for JSON output and when nothing was warned.
fn warning_trailer(count: usize, json: bool) -> Option<String> {
    (count > 0 && !json).then(|| format!("({count} warning(s))"))
}

/// Every part kind with its position, example rendering and whether it may repeat.
fn kinds_table(color: bool) -> String {
    let mut table = String::new();
    for kind in SelectorPartKind::iter() {
        let name = format!("{:<15}", kind.to_string());
        let example = format!("{:<16}", kind.render("value"));
        let repeat = if kind.is_single_occurrence() {
            "once"
        } else {
            "repeatable"
        };
        let line = if color {
            format!(
                "{} {} {} {}",
                kind.position(),
                name.cyan(),
                example.bold(),
                repeat.dimmed()
            )
        } else {
            format!("{} {name} {example} {repeat}", kind.position())
        };
        table.push_str(line.trim_end());
        table.push('\n');
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_table_lists_kinds_in_order() {
        let table = kinds_table(false);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "0 element         value            once");
        assert_eq!(lines[3], "3 attr            [value]          repeatable");
        assert_eq!(lines[5], "5 pseudo-element  ::value          once");
    }

    #[test]
    fn test_render_output_plain_and_json() {
        let selector = steps::build(&["element:ul", "@>", "element:li"]).unwrap();
        assert_eq!(render_output(&selector, false).unwrap(), "ul > li");

        let json: serde_json::Value =
            serde_json::from_str(&render_output(&selector, true).unwrap()).unwrap();
        assert_eq!(json["combined"]["combinator"], ">");
    }

    #[test]
    fn test_warning_trailer() {
        assert_eq!(warning_trailer(0, false), None);
        assert_eq!(warning_trailer(2, true), None);
        assert_eq!(warning_trailer(2, false).as_deref(), Some("(2 warning(s))"));
    }

    #[test]
    fn test_cli_parses_flags_and_steps() {
        let cli = Cli::try_parse_from(["selkie", "--json", "element:a", "@+", "element:b"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.steps, ["element:a", "@+", "element:b"]);

        let kinds = Cli::try_parse_from(["selkie", "--kinds"]).unwrap();
        assert!(kinds.kinds && kinds.steps.is_empty());
        assert!(Cli::try_parse_from(["selkie"]).is_err());
    }
}
