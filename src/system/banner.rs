use std::io::IsTerminal;

use crossterm::style::{Color, Stylize};

const BANNER_LINES: [&str; 6] = [
    "     ██╗███████╗████████╗ ██████╗██╗  ██╗███████╗ ██████╗██╗  ██╗",
    "     ██║██╔════╝╚══██╔══╝██╔════╝██║  ██║██╔════╝██╔════╝██║ ██╔╝",
    "     ██║█████╗     ██║   ██║     ███████║█████╗  ██║     █████╔╝ ",
    "██   ██║██╔══╝     ██║   ██║     ██╔══██║██╔══╝  ██║     ██╔═██╗ ",
    "╚█████╔╝███████╗   ██║   ╚██████╗██║  ██║███████╗╚██████╗██║  ██╗",
    " ╚════╝ ╚══════╝   ╚═╝    ╚═════╝╚═╝  ╚═╝╚══════╝ ╚═════╝╚═╝  ╚═╝",
];

const TOP_RGB: (u8, u8, u8) = (0x2e, 0xc4, 0xb6);
const BOTTOM_RGB: (u8, u8, u8) = (0x3a, 0x86, 0xff);

pub(crate) fn print_cli_banner(no_color: bool) {
    let use_color = !no_color && std::io::stdout().is_terminal();
    let last = BANNER_LINES.len().saturating_sub(1);
    for (idx, line) in BANNER_LINES.iter().enumerate() {
        if use_color {
            let (r, g, b) = blend(TOP_RGB, BOTTOM_RGB, idx, last);
            println!("{}", line.with(Color::Rgb { r, g, b }));
        } else {
            println!("{line}");
        }
    }
    println!();
}

pub(crate) fn print_version(no_color: bool) {
    print_cli_banner(no_color);
    println!("jetcheck v{}", env!("CARGO_PKG_VERSION"));
    println!("{}", env!("CARGO_PKG_DESCRIPTION"));
    println!("License: {}", env!("CARGO_PKG_LICENSE"));
}

/// Linear blend from `from` (step 0) to `to` (step `steps`).
fn blend(from: (u8, u8, u8), to: (u8, u8, u8), step: usize, steps: usize) -> (u8, u8, u8) {
    let steps = u32::try_from(steps.max(1)).unwrap_or(u32::MAX);
    let step = u32::try_from(step).unwrap_or(u32::MAX).min(steps);
    let channel = |start: u8, end: u8| -> u8 {
        let start = u32::from(start);
        let end = u32::from(end);
        let mixed = start
            .saturating_mul(steps.saturating_sub(step))
            .saturating_add(end.saturating_mul(step))
            .checked_div(steps)
            .unwrap_or(start);
        u8::try_from(mixed).unwrap_or(u8::MAX)
    };
    (
        channel(from.0, to.0),
        channel(from.1, to.1),
        channel(from.2, to.2),
    )
}
