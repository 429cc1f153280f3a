//! Plain terminal rendering of a [`Screen`].

use colored::Colorize;

use crate::{
    logs::fmt_divider,
    portal::Screen,
    views::{
        grid_cells,
        EntryView,
    },
    LogColor,
};

pub const CONNECT_AFFORDANCE: &str = "[ Connect to Wallet ]";
pub const INITIALIZE_AFFORDANCE: &str = "[ Do One-Time Initialization For GIF Program Account ]";
pub const SUBMIT_AFFORDANCE: &str = "[ Submit ]";

pub fn render(screen: &Screen<'_>, columns: usize) -> String {
    let mut lines = vec![
        "GIF Portal".color(LogColor::Header).bold().to_string(),
        "View your GIF collection in the metaverse".to_string(),
        fmt_divider(),
    ];

    match screen {
        Screen::Disconnected => {
            lines.push(format!("{}  (type `connect`)", CONNECT_AFFORDANCE.bold()));
        }
        Screen::Loading { user } => {
            lines.push(connected_line(user));
            lines.push("Fetching list...".to_string());
        }
        Screen::Uninitialized { user } => {
            lines.push(connected_line(user));
            lines.push(format!("{}  (type `init`)", INITIALIZE_AFFORDANCE.bold()));
        }
        Screen::Loaded {
            user,
            input,
            entries,
        } => {
            lines.push(connected_line(user));
            lines.push(format!("Enter gif link! > {input}"));
            lines.push(format!(
                "{}  (type `submit [<link>]`)",
                SUBMIT_AFFORDANCE.bold()
            ));
            lines.extend(render_grid(entries, columns).lines().map(str::to_string));
        }
    }

    lines.push(fmt_divider());
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn connected_line(user: &impl ToString) -> String {
    format!("Connected as {}", user.to_string().color(LogColor::Highlight))
}

/// Lays out the entries row-major, `columns` cells per row. Links are never shortened; each column
/// is as wide as its widest cell.
pub fn render_grid(entries: &[EntryView], columns: usize) -> String {
    if entries.is_empty() {
        return "No links yet. Submit the first one!\n".to_string();
    }

    let columns = columns.max(1);
    let cells: Vec<String> = grid_cells(entries)
        .map(|cell| format!("#{} {}", cell.key, cell.src))
        .collect();

    let mut widths = vec![0; columns];
    for (i, cell) in cells.iter().enumerate() {
        let width = &mut widths[i % columns];
        *width = (*width).max(cell.chars().count());
    }

    cells
        .chunks(columns)
        .map(|row| {
            let row = row
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join(" | ");
            format!("| {row} |\n")
        })
        .collect()
}
