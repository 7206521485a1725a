use anyhow::{bail, Context, Result};
use clap::{arg, command, value_parser, ArgAction};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tiler::utils;
use tiler_core::models::{Handle, Rect, RectDelta, Window, WindowHandle};
use tiler_core::{Action, Engine, TileLayout};

/// Windows in a preview are just numbered.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
struct PreviewHandle(usize);
impl Handle for PreviewHandle {}

/// Stands in for the window manager: nothing to notify and no windows to focus.
struct PreviewEngine;

impl Engine for PreviewEngine {
    fn show_layout_notification(&mut self) {
        tracing::info!("Layout changed");
    }

    fn execute_without_layout_override(&mut self, action: &Action) {
        tracing::warn!("{:?} is handled by the window manager, skipping", action);
    }
}

fn main() -> Result<()> {
    let matches = command!("Tiler Preview")
        .about("Prints the geometry the tile layout gives to a number of windows")
        .help_template(utils::get_help_template())
        .args(&[
            arg!(-c --config <FILE> "Config file to use instead of the one in the XDG config directory")
                .value_parser(value_parser!(PathBuf)),
            arg!(--width <PIXELS> "Width of the screen")
                .value_parser(value_parser!(i32))
                .default_value("1920"),
            arg!(--height <PIXELS> "Height of the screen")
                .value_parser(value_parser!(i32))
                .default_value("1080"),
            arg!(-n --windows <COUNT> "Number of windows to tile")
                .value_parser(value_parser!(usize))
                .default_value("3"),
            arg!(-a --action <ACTION> "Layout action to run, e.g. Rotate. Can be repeated")
                .action(ArgAction::Append),
            arg!(-d --drag <DRAG> "Resize a window, after the actions: INDEX:LEFT,RIGHT,TOP,BOTTOM. Can be repeated")
                .action(ArgAction::Append)
                .allow_hyphen_values(true),
            arg!(--json "Print the windows as JSON"),
        ])
        .get_matches();

    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => tiler::load_from_file(Some(path.as_path()))
            .with_context(|| format!("Could not load {}", path.display()))?,
        None => tiler::load(),
    };

    let (subscribers, log_parse_err) = utils::log::parse_log_level(&config.log_level);
    tracing::subscriber::set_global_default(subscribers)
        .expect("Couldn't setup global subscriber (logger)");
    if let Some(err) = log_parse_err {
        tracing::warn!("Error parsing log_level config: {err}");
    }

    let width = *matches.get_one::<i32>("width").unwrap_or(&1920);
    let height = *matches.get_one::<i32>("height").unwrap_or(&1080);
    if width < 0 || height < 0 {
        bail!("Screen size must not be negative, got {width}x{height}");
    }
    let area = Rect::new(0, 0, width, height).shrink(config.screen_gap.max(0));
    let count = *matches.get_one::<usize>("windows").unwrap_or(&3);

    let mut windows: Vec<Window<PreviewHandle>> = (0..count)
        .map(|i| Window::new(WindowHandle(PreviewHandle(i))))
        .collect();
    let mut layout = TileLayout::new(&config);
    let mut engine = PreviewEngine;

    for name in matches.get_many::<String>("action").unwrap_or_default() {
        let action: Action = name.parse()?;
        layout.execute_action(&mut engine, &action);
    }

    layout.apply(&mut windows, area);
    for drag in matches.get_many::<String>("drag").unwrap_or_default() {
        let (index, delta) = parse_drag(drag)?;
        let Some(basis) = windows.get(index).map(|window| window.handle) else {
            bail!("Cannot drag window {index}, there are only {count} windows");
        };
        layout.adjust(area, &windows, &basis, delta);
        layout.apply(&mut windows, area);
    }

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&windows)?);
    } else {
        println!("{layout} in {}x{}+{}+{}", area.w, area.h, area.x, area.y);
        for (index, window) in windows.iter().enumerate() {
            let Rect { x, y, w, h } = window.geometry;
            println!("{index}: {w}x{h}+{x}+{y}");
        }
    }
    Ok(())
}

/// Parse `INDEX:LEFT,RIGHT,TOP,BOTTOM`.
fn parse_drag(drag: &str) -> Result<(usize, RectDelta)> {
    let Some((index, edges)) = drag.split_once(':') else {
        bail!("Drag `{drag}` should look like INDEX:LEFT,RIGHT,TOP,BOTTOM");
    };
    let index = index
        .trim()
        .parse()
        .with_context(|| format!("Invalid window index in drag `{drag}`"))?;
    let edges = edges
        .split(',')
        .map(|edge| edge.trim().parse::<i32>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Invalid edge in drag `{drag}`"))?;
    let &[left, right, top, bottom] = edges.as_slice() else {
        bail!("Drag `{drag}` needs exactly four edges");
    };
    Ok((index, RectDelta::new(left, right, top, bottom)))
}
