// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use chrono::NaiveDate;

use crate::config::consts::DATE_FMT;
use crate::config::options::{Options, WindowSpec};
use crate::progress::Progress;
use crate::runner;

enum Command {
    Scrape,
    Report,
    History(String),
    ListDates,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let (command, opts) = parse_cli()?;

    match command {
        Command::Scrape => {
            let mut progress = ConsoleProgress { total: 0 };
            let summary = runner::run_scrape(&opts, Some(&mut progress))?;
            for path in summary.files_written {
                println!("Wrote {}", path.display());
            }
        }
        Command::Report => {
            let summary = runner::run_report(&opts)?;
            for path in summary.files_written {
                println!("Wrote {}", path.display());
            }
        }
        Command::History(name) => {
            let summary = runner::run_history(&opts, &name)?;
            for path in summary.files_written {
                println!("Wrote {}", path.display());
            }
        }
        Command::ListDates => {
            for date in runner::available_dates(&opts)? {
                println!("{date}");
            }
        }
    }

    Ok(())
}

fn parse_cli() -> Result<(Command, Options), Box<dyn Error>> {
    let mut args = env::args().skip(1);

    let Some(first) = args.next() else {
        eprintln!(include_str!("cli_help.txt"));
        std::process::exit(2);
    };

    let command = match first.as_str() {
        "scrape" => Command::Scrape,
        "report" => Command::Report,
        "history" => Command::History(s!(args.next().ok_or("Missing player name")?)),
        "list-dates" => Command::ListDates,
        "-h" | "--help" => {
            eprintln!(include_str!("cli_help.txt"));
            std::process::exit(0);
        }
        other => return Err(format!("Unknown command: {}", other).into()),
    };

    let mut opts = Options::default();
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--dir" => opts.dir = PathBuf::from(args.next().ok_or("Missing value for --dir")?),
            "--pages" => {
                let v: u32 = args.next().ok_or("Missing value for --pages")?.parse()?;
                if v == 0 { return Err("--pages must be at least 1".into()); }
                opts.pages = v; }
            "--delay-ms" => opts.delay_ms = args.next().ok_or("Missing value for --delay-ms")?.parse()?,
            "--date" => {
                let v = args.next().ok_or("Missing value for --date")?;
                let date = NaiveDate::parse_from_str(&v, DATE_FMT)
                    .map_err(|_| format!("Bad date: {} (want YYYY-MM-DD)", v))?;
                opts.date = Some(date); }
            "-o" | "--out" => opts.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--json" => opts.json = true,
            "--windows" => {
                let v = args.next().ok_or("Missing value for --windows")?;
                opts.windows = parse_windows(&v)?; }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok((command, opts))
}

/// "daily=1,weekly=7,monthly=30" → window specs, order preserved.
fn parse_windows(s: &str) -> Result<Vec<WindowSpec>, Box<dyn Error>> {
    let mut out: Vec<WindowSpec> = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() { continue; }
        let Some(eq) = part.find('=') else {
            return Err(format!("Bad window spec: {} (want label=days)", part).into());
        };
        let label = part[..eq].trim();
        let days: u32 = part[eq + 1..].trim().parse()?;
        if label.is_empty() { return Err(format!("Bad window spec: {}", part).into()); }
        if out.iter().any(|w| w.label == label) {
            return Err(format!("Duplicate window label: {}", label).into());
        }
        out.push(WindowSpec::new(label, days));
    }
    if out.is_empty() {
        return Err("No windows given".into());
    }
    Ok(out)
}

/* ---------------- Console progress sink ---------------- */

struct ConsoleProgress {
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn page_done(&mut self, page: u32) {
        println!("Fetched page {}/{}", page, self.total);
    }
}
