// src/render.rs
//
// Static output only: self-contained HTML documents and JSON dumps of the
// core result structures. No templating engine: string assembly is plenty
// for two page kinds, same as the tag soup on the way in.

use std::fmt::Write as _;

use crate::compare::{ComparisonReport, PlayerDelta, WindowResult};
use crate::history::PlayerHistory;

const STYLE: &str = r#"
  body { font-family: Arial, sans-serif; margin: 20px; background: #f9f9f9; }
  table { border-collapse: collapse; width: 100%; margin-top: 20px; }
  th, td { border: 1px solid #ccc; padding: 8px; text-align: left; }
  th { background: #444; color: #fff; }
  tr:nth-child(even) { background: #eee; }
  .gain { color: green; font-weight: bold; }
  .loss { color: red; font-weight: bold; }
  .missing { color: #777; font-style: italic; }
"#;

/* ---------------- Formatting helpers ---------------- */

pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// 1234567 → "1,234,567"
pub fn fmt_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Signed with explicit plus: "+1,234" / "-567" / "+0"
pub fn fmt_signed(n: i64) -> String {
    if n < 0 {
        join!("-", &fmt_thousands(n.unsigned_abs()))
    } else {
        join!("+", &fmt_thousands(n as u64))
    }
}

fn opt_exp(v: Option<u64>) -> String {
    v.map(fmt_thousands).unwrap_or_else(|| s!("&mdash;"))
}

fn rank_move(d: &PlayerDelta) -> String {
    match d.rank_delta {
        Some(0) => s!("="),
        Some(n) if n > 0 => format!("&#9650;{}", n),
        Some(n) => format!("&#9660;{}", -n),
        None => s!("&mdash;"),
    }
}

/* ---------------- Comparison report ---------------- */

pub fn report_html(report: &ComparisonReport) -> String {
    let mut html = s!();
    let _ = write!(
        html,
        "<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Experience Changes</title>\n<style>{STYLE}</style>\n</head>\n<body>\n"
    );
    let _ = writeln!(html, "<h2>Experience Changes ({})</h2>", report.target_date);

    for window in &report.windows {
        write_window(&mut html, window);
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn write_window(html: &mut String, window: &WindowResult) {
    let plural = if window.days == 1 { "day" } else { "days" };
    match window.older_date {
        Some(date) => {
            let _ = writeln!(
                html,
                "<h3>{} &mdash; since {} ({} {} back)</h3>",
                html_escape(&window.label),
                date,
                window.days,
                plural
            );
        }
        None => {
            let _ = writeln!(html, "<h3>{}</h3>", html_escape(&window.label));
            let _ = writeln!(
                html,
                "<p class=\"missing\">Insufficient history for this window.</p>"
            );
            return;
        }
    }

    html.push_str("<table>\n<tr><th>Name</th><th>Before</th><th>After</th><th>Change</th><th>Rank</th><th>Moved</th></tr>\n");
    for d in &window.deltas {
        let (cls, change) = match d.delta {
            Some(n) if n < 0 => ("loss", fmt_signed(n)),
            Some(n) => ("gain", fmt_signed(n)),
            None if d.newer_exp.is_some() => ("gain", s!("new")),
            None => ("loss", s!("left")),
        };
        let rank = d
            .newer_rank
            .or(d.older_rank)
            .map(|r| r.to_string())
            .unwrap_or_else(|| s!("&mdash;"));

        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td class='{}'>{}</td><td>{}</td><td>{}</td></tr>",
            html_escape(&d.name),
            opt_exp(d.older_exp),
            opt_exp(d.newer_exp),
            cls,
            change,
            rank,
            rank_move(d)
        );
    }
    html.push_str("</table>\n");
}

pub fn report_json(report: &ComparisonReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/* ---------------- Player history ---------------- */

pub fn history_html(history: &PlayerHistory) -> String {
    let mut html = s!();
    let title = html_escape(&history.display_name);
    let _ = write!(
        html,
        "<html>\n<head>\n<meta charset=\"utf-8\">\n<title>History: {title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n"
    );
    let _ = writeln!(html, "<h2>Experience History &mdash; {title}</h2>");

    if history.is_empty() {
        let _ = writeln!(
            html,
            "<p class=\"missing\">No snapshots contain \"{}\".</p>",
            html_escape(&history.searched)
        );
        html.push_str("</body>\n</html>\n");
        return html;
    }

    html.push_str(&history_svg(history));

    html.push_str("<table>\n<tr><th>Date</th><th>Experience</th><th>Rank</th></tr>\n");
    for p in &history.points {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            p.date,
            fmt_thousands(p.experience),
            p.rank
        );
    }
    html.push_str("</table>\n</body>\n</html>\n");
    html
}

/// Inline polyline chart, experience over snapshot index. Deliberately
/// dependency-free; the JSON output exists for anything fancier.
fn history_svg(history: &PlayerHistory) -> String {
    const W: f64 = 800.0;
    const H: f64 = 300.0;
    const PAD: f64 = 40.0;

    let points = &history.points;
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return s!();
    };
    let lo = points.iter().map(|p| p.experience).min().unwrap_or(0);
    let hi = points.iter().map(|p| p.experience).max().unwrap_or(0);
    let span = (hi - lo).max(1) as f64;
    let step = if points.len() > 1 {
        (W - 2.0 * PAD) / (points.len() - 1) as f64
    } else {
        0.0
    };

    let mut coords = s!();
    for (i, p) in points.iter().enumerate() {
        let x = PAD + step * i as f64;
        let y = H - PAD - (p.experience - lo) as f64 / span * (H - 2.0 * PAD);
        let _ = write!(coords, "{x:.1},{y:.1} ");
    }

    format!(
        concat!(
            "<svg viewBox=\"0 0 {w} {h}\" width=\"{w}\" height=\"{h}\" style=\"background:#fff;border:1px solid #ccc\">\n",
            "<polyline fill=\"none\" stroke=\"green\" stroke-width=\"2\" points=\"{coords}\"/>\n",
            "<text x=\"{pad}\" y=\"{h_lab}\" font-size=\"12\">{d0}</text>\n",
            "<text x=\"{x1}\" y=\"{h_lab}\" font-size=\"12\" text-anchor=\"end\">{d1}</text>\n",
            "<text x=\"{pad}\" y=\"{pad_lab}\" font-size=\"12\">{hi}</text>\n",
            "</svg>\n"
        ),
        w = W,
        h = H,
        coords = coords.trim_end(),
        pad = PAD,
        h_lab = H - PAD / 3.0,
        x1 = W - PAD,
        d0 = first.date,
        d1 = last.date,
        pad_lab = PAD / 1.5,
        hi = fmt_thousands(hi),
    )
}

pub fn history_json(history: &PlayerHistory) -> serde_json::Result<String> {
    serde_json::to_string_pretty(history)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_grouping() {
        assert_eq!(fmt_thousands(0), "0");
        assert_eq!(fmt_thousands(999), "999");
        assert_eq!(fmt_thousands(1_000), "1,000");
        assert_eq!(fmt_thousands(12_345_678), "12,345,678");
    }

    #[test]
    fn signed_always_carries_sign() {
        assert_eq!(fmt_signed(1_500), "+1,500");
        assert_eq!(fmt_signed(-42), "-42");
        assert_eq!(fmt_signed(0), "+0");
    }

    #[test]
    fn escapes_hostile_names() {
        assert_eq!(html_escape("<b>&\"x\""), "&lt;b&gt;&amp;&quot;x&quot;");
    }
}
