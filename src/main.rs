//zhop/src/main.rs
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process::ExitCode;
use std::{env, path::PathBuf};

use ropey::Rope;
use zhop::kernel::jump::{jump_targets_by_scanning_lines, jump_targets_for_current_line};
use zhop::kernel::services::adapters::{
    build_matcher, ensure_settings_file, load_settings, RopeWindow, RopeWindowProvider,
    StaticMappingTable, Viewport,
};
use zhop::kernel::services::ports::{
    HintDirection, HintPosition, MatcherKind, Position, Settings, WindowContextProvider,
};

mod logging;

const USAGE: &str = "usage: zhop <file> <row> <col> <matcher> [pattern] \
[--before|--after] [--middle|--end] [--reverse] [--line] [--left N] [--width N]";

struct Args {
    path: PathBuf,
    cursor: Position,
    kind: MatcherKind,
    pattern: Option<String>,
    direction: Option<HintDirection>,
    hint_position: Option<HintPosition>,
    reverse: bool,
    current_line: bool,
    leftmost_col: usize,
    width: Option<usize>,
}

fn parse_args(mut argv: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut positional = Vec::new();
    let mut args = Args {
        path: PathBuf::new(),
        cursor: Position::default(),
        kind: MatcherKind::WordStart,
        pattern: None,
        direction: None,
        hint_position: None,
        reverse: false,
        current_line: false,
        leftmost_col: 0,
        width: None,
    };

    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--before" => args.direction = Some(HintDirection::BeforeCursor),
            "--after" => args.direction = Some(HintDirection::AfterCursor),
            "--middle" => args.hint_position = Some(HintPosition::Middle),
            "--end" => args.hint_position = Some(HintPosition::End),
            "--reverse" => args.reverse = true,
            "--line" => args.current_line = true,
            "--left" | "--width" => {
                let value = argv
                    .next()
                    .and_then(|v| v.parse::<usize>().ok())
                    .ok_or_else(|| format!("{} expects a number", arg))?;
                if arg == "--left" {
                    args.leftmost_col = value;
                } else {
                    args.width = Some(value);
                }
            }
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    args.path = positional.next().map(PathBuf::from).ok_or("missing file")?;
    let row = positional.next().and_then(|v| v.parse().ok()).ok_or("invalid row")?;
    let col = positional.next().and_then(|v| v.parse().ok()).ok_or("invalid col")?;
    args.cursor = Position::new(row, col);
    let kind = positional.next().ok_or("missing matcher")?;
    args.kind = MatcherKind::from_name(&kind).ok_or_else(|| format!("unknown matcher: {}", kind))?;
    args.pattern = positional.next();
    Ok(args)
}

fn run(args: Args, mut settings: Settings) -> Result<(), Box<dyn std::error::Error>> {
    if args.direction.is_some() {
        settings.jump.direction = args.direction;
    }
    if let Some(hint_position) = args.hint_position {
        settings.jump.hint_position = hint_position;
    }
    settings.jump.reverse_distribution |= args.reverse;

    let mappings = StaticMappingTable::from_settings(&settings);
    let matcher = build_matcher(args.kind, args.pattern.as_deref(), &settings.jump, &mappings)?;

    let rope = Rope::from_reader(BufReader::new(File::open(&args.path)?))?;
    let viewport = Viewport {
        leftmost_col: args.leftmost_col,
        width: args.width,
        ..Viewport::rows(rope.len_lines())
    };
    let provider = RopeWindowProvider::new(1).with_window(RopeWindow {
        window: 1,
        buffer: 1,
        rope,
        viewport,
        cursor: args.cursor,
    });

    let windows = provider.window_contexts(settings.jump.direction);
    let focused = provider.focused_window();
    let locations = if args.current_line {
        jump_targets_for_current_line(matcher.as_ref(), &settings.jump, &windows, focused)
    } else {
        jump_targets_by_scanning_lines(matcher.as_ref(), &settings.jump, &windows, focused)
    };

    let mut out = io::stdout().lock();
    for (target, score) in locations.by_priority() {
        writeln!(
            out,
            "{}:{}\tlen={}\tscore={}",
            target.cursor.row, target.cursor.col, target.len, score
        )?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let guard = logging::init();

    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}\n{}", e, USAGE);
            if let Some(guard) = &guard {
                eprintln!("logs: {}", guard.log_dir().display());
            }
            return ExitCode::from(2);
        }
    };

    if let Err(e) = ensure_settings_file() {
        tracing::warn!(error = %e, "settings file unavailable");
    }
    let settings = load_settings().unwrap_or_default();
    match run(args, settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "zhop failed");
            eprintln!("zhop: {}", e);
            ExitCode::FAILURE
        }
    }
}
