use crate::config::DataPaths;
use crate::errors::AppResult;
use crate::store::log::read_log;
use crate::utils::table::{strip_ansi, visible_width};
use ansi_term::Colour;

const OP_WIDTH_MAX: usize = 40;

/// Restituisce il colore ANSI in base all'operazione
fn color_for_operation(op: &str) -> Colour {
    match op {
        "clock_in" => Colour::Green,
        "clock_out" => Colour::Cyan,
        "backup" => Colour::Blue,
        "export" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51), // arancione
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(paths: &DataPaths) -> AppResult<()> {
        let entries = read_log(&paths.log)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        let colored: Vec<String> = entries
            .iter()
            .map(|e| {
                let op = color_for_operation(&e.operation)
                    .paint(e.operation.as_str())
                    .to_string();
                if e.target.is_empty() {
                    op
                } else {
                    format!("{op} ({})", e.target)
                }
            })
            .collect();

        let op_w = colored
            .iter()
            .map(|c| visible_width(c))
            .max()
            .unwrap_or(10)
            .min(OP_WIDTH_MAX);

        println!("📜 Internal log:\n");

        for (entry, op_target) in entries.iter().zip(colored) {
            // long targets are cut on the visible text
            let shown = if visible_width(&op_target) > OP_WIDTH_MAX {
                let visible = strip_ansi(&op_target);
                let cut: String = visible.chars().take(OP_WIDTH_MAX - 1).collect();
                format!("{cut}…")
            } else {
                op_target
            };
            let padding = " ".repeat(op_w.saturating_sub(visible_width(&shown)));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                entry.id,
                entry.date,
                shown,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
