// HTML for the pitch contents and the saved-layout list.
// Kept free of web-sys so host tests can include it directly.

use std::fmt::Write as _;
use tactics_core::{Bounds, DragTarget, Mode, Position, SavedState, Scene, Team, ZoneDraft};

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn point_style(p: Position) -> String {
    format!("left:{}%;top:{}%", p.x, p.y)
}

fn box_style(b: Bounds) -> String {
    format!(
        "left:{}%;top:{}%;width:{}%;height:{}%",
        b.left, b.top, b.width, b.height
    )
}

/// Zones, markers and the ball, bottom to top. The piece being dragged
/// carries a `dragging` class.
pub fn pitch_items(scene: &Scene, dragging: Option<&DragTarget>) -> String {
    let mut html = String::new();
    for zone in &scene.zones {
        _ = write!(
            html,
            r#"<div class="zone" data-kind="zone" data-id="{}" style="{}"></div>"#,
            escape_html(&zone.id),
            box_style(zone.bounds())
        );
    }
    for m in &scene.markers {
        let team = match m.team {
            Team::Home => "home",
            Team::Away => "away",
        };
        let lit = if m.highlighted { " highlighted" } else { "" };
        let held = match dragging {
            Some(DragTarget::Marker(id)) if *id == m.id => " dragging",
            _ => "",
        };
        _ = write!(
            html,
            r#"<div class="marker {}{}{}" data-kind="marker" data-id="{}" style="{}"></div>"#,
            team,
            lit,
            held,
            escape_html(&m.id),
            point_style(m.position)
        );
    }
    let held = if dragging == Some(&DragTarget::Ball) {
        " dragging"
    } else {
        ""
    };
    _ = write!(
        html,
        r#"<div class="ball{}" data-kind="ball" style="{}"></div>"#,
        held,
        point_style(scene.ball)
    );
    html
}

/// Live box for a half-drawn zone. It lives in its own layer so the pitch
/// items stay untouched while the pointer moves, and is untagged so clicks
/// fall through to the pitch.
pub fn zone_preview(draft: Option<&ZoneDraft>) -> String {
    match draft.and_then(ZoneDraft::preview) {
        Some(preview) => format!(
            r#"<div class="zone preview" style="{}"></div>"#,
            box_style(preview)
        ),
        None => String::new(),
    }
}

pub fn saved_list(states: &[SavedState]) -> String {
    if states.is_empty() {
        return r#"<p class="saved-empty">No saved states</p>"#.to_string();
    }
    let mut html = String::from(r#"<ul class="saved">"#);
    for (i, s) in states.iter().enumerate() {
        _ = write!(
            html,
            concat!(
                r#"<li class="saved-item"><span class="saved-name">{name}</span>"#,
                r#"<button data-action="load" data-index="{i}">Load</button>"#,
                r#"<button data-action="delete" data-index="{i}" title="Delete">&#x2715;</button></li>"#
            ),
            name = escape_html(&s.name),
            i = i
        );
    }
    html.push_str("</ul>");
    html
}

pub fn highlight_label(mode: &Mode) -> &'static str {
    if mode.is_highlighting() {
        "Exit Highlight"
    } else {
        "Highlight"
    }
}

pub fn draw_zone_label(mode: &Mode) -> &'static str {
    match (mode.is_drawing_zone(), mode.awaiting_second_point()) {
        (true, true) => "Click to complete zone",
        (true, false) => "Click to start zone",
        _ => "Draw Zone",
    }
}
