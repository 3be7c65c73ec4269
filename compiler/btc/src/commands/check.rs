//! The `check` command: run one entry rule and report the outcome.

use std::io::{self, Write};

use bt_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use bt_diagnostic::Diagnostic;
use bt_lexer::{LexError, Lexer};
use bt_parse::{ParseConfig, ParseStats, Parser, TopRule};
use tracing::debug;

/// Options for `btc check`, layered over a base [`ParseConfig`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckOptions {
    pub rule: TopRule,
    pub config: ParseConfig,
    pub stats: bool,
    pub color: ColorMode,
}

/// Parse `--rule=`, `--no-memo`, `--max-depth=`, `--stats` and `--color=`.
pub fn parse_check_options(args: &[String], base: ParseConfig) -> Result<CheckOptions, String> {
    let mut options = CheckOptions {
        config: base,
        ..CheckOptions::default()
    };
    for arg in args {
        if let Some(rule) = arg.strip_prefix("--rule=") {
            options.rule = rule.parse().map_err(|e| format!("{e}"))?;
        } else if arg == "--no-memo" {
            options.config.memoize = false;
        } else if let Some(depth) = arg.strip_prefix("--max-depth=") {
            options.config.max_depth = match depth.parse::<usize>() {
                Ok(depth) if depth > 0 => depth,
                _ => return Err(format!("invalid depth `{depth}`")),
            };
        } else if arg == "--stats" {
            options.stats = true;
        } else if let Some(mode) = arg.strip_prefix("--color=") {
            options.color = match mode {
                "auto" => ColorMode::Auto,
                "always" => ColorMode::Always,
                "never" => ColorMode::Never,
                _ => return Err(format!("invalid color mode `{mode}`")),
            };
        } else {
            return Err(format!("unknown option `{arg}`"));
        }
    }
    Ok(options)
}

/// Parse `input` as `options.rule`.
///
/// Accepted input prints `accepted` and the replayed tokens to `out`.
/// Rejected input renders every lexical diagnostic, then the syntax failure
/// if the tokens did not match either, to `err`. Returns whether the input
/// was accepted.
pub fn check(
    input: &str,
    options: &CheckOptions,
    is_tty: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    let mut parser = Parser::with_config(Lexer::new(input), options.config);
    let result = parser.parse(options.rule);
    let stats = parser.stats();
    let lex_errors = parser.into_source().take_errors();
    debug!(rule = %options.rule, accepted = result.is_ok(), lex_errors = lex_errors.len(), "checked");

    let mut diagnostics: Vec<Diagnostic> = lex_errors.iter().map(LexError::to_diagnostic).collect();
    let accepted = match result {
        Ok(m) if diagnostics.is_empty() => {
            writeln!(out, "accepted: {}", options.rule)?;
            let replay: Vec<String> = m.replay().map(|t| t.to_string()).collect();
            writeln!(out, "  {}", replay.join(" "))?;
            true
        }
        Ok(_) => false,
        Err(e) => {
            diagnostics.push(e.to_diagnostic());
            false
        }
    };

    if !accepted {
        let mut emitter =
            TerminalEmitter::with_color_mode(&mut *err, options.color, is_tty).with_source(input);
        emitter.emit_all(&diagnostics);
        emitter.emit_summary(diagnostics.len());
        emitter.flush();
    }

    if options.stats {
        write_stats(out, &stats)?;
    }
    Ok(accepted)
}

fn write_stats(out: &mut impl Write, stats: &ParseStats) -> io::Result<()> {
    let mut bodies: Vec<_> = stats.rule_bodies.iter().collect();
    bodies.sort_by_key(|(rule, _)| rule.name());
    let bodies: Vec<String> = bodies
        .into_iter()
        .map(|(rule, runs)| format!("{rule}={runs}"))
        .collect();

    writeln!(out, "stats:")?;
    writeln!(
        out,
        "  speculation   {} opened, {} abandoned, {} committed",
        stats.opens, stats.abandons, stats.commits
    )?;
    writeln!(
        out,
        "  memo          {} hits, {} misses, {} entries",
        stats.memo_hits, stats.memo_misses, stats.memo_entries
    )?;
    writeln!(out, "  rule bodies   {}", bodies.join(" "))?;
    writeln!(out, "  tokens pulled {}", stats.tokens_pulled)?;
    writeln!(out, "  compactions   {}", stats.compactions)?;
    Ok(())
}
