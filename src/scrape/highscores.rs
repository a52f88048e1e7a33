// src/scrape/highscores.rs
//
// Parser for the experience highscore pages. The table is plain tag soup:
// rows of exactly four cells (Rank, Name, Level, Points). The name cell
// wraps the character name in an <a> or <span>, with guild/vocation noise
// in a trailing <small>; the points cell carries thousands separators.

use crate::config::consts::HIGHSCORE_PATH;
use crate::core::html::{inner_after_open_tag, next_tag_block_ci, strip_tags};
use crate::core::sanitize::normalize_entities;

/// Page 1 is the bare highscore path; page N is suffixed with N−1.
pub fn page_path(page: u32) -> String {
    if page <= 1 {
        s!(HIGHSCORE_PATH)
    } else {
        format!("{}/{}", HIGHSCORE_PATH, page - 1)
    }
}

/// All (name, experience) rows found in one page of highscore HTML.
/// Rows that don't look like highscore entries are skipped silently;
/// the page is full of layout tables we don't care about.
pub fn parse_highscores(doc: &str) -> Vec<(String, u64)> {
    let mut rows = Vec::new();
    let mut pos = 0usize;

    while let Some((tr_s, tr_e)) = next_tag_block_ci(doc, "<tr", "</tr>", pos) {
        let tr = &doc[tr_s..tr_e];
        pos = tr_e;

        let mut cells = Vec::new();
        let mut td_pos = 0usize;
        while let Some((td_s, td_e)) = next_tag_block_ci(tr, "<td", "</td>", td_pos) {
            cells.push(inner_after_open_tag(&tr[td_s..td_e]));
            td_pos = td_e;
        }
        if cells.len() != 4 { continue; } // Rank, Name, Level, Points

        let Some(name) = extract_name(&cells[1]) else { continue };

        let points = strip_tags(normalize_entities(&cells[3])).replace(',', "");
        if points.is_empty() || !points.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }
        let Ok(experience) = points.parse::<u64>() else { continue };

        rows.push((name, experience));
    }

    rows
}

/// Character name from the name cell: the first <a> or <span> if present,
/// else whatever text precedes the first <br>.
fn extract_name(cell: &str) -> Option<String> {
    let tagged = next_tag_block_ci(cell, "<a", "</a>", 0)
        .or_else(|| next_tag_block_ci(cell, "<span", "</span>", 0));

    let raw = match tagged {
        Some((s, e)) => inner_after_open_tag(&cell[s..e]),
        None => {
            let cut = crate::core::html::to_lower(cell)
                .find("<br")
                .unwrap_or(cell.len());
            cell[..cut].to_string()
        }
    };

    let name = strip_tags(normalize_entities(&raw));
    if name.is_empty() { None } else { Some(name) }
}
