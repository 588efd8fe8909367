use engine::{
    session::Session,
    settings::{Action, ITERATION_SPEEDS, ITERATION_SPEED_LABELS, MAX_SIZE, MIN_SIZE},
    Algorithm,
};
use movegen::WeightSettings;
use util::{color::Color, piece::Piece, position::Position};

use crate::query::{Mode, Moving, PageState};

const SQUARE_SIZE: usize = 64;
const FLAG: char = '⚑';

fn link(href: &str, text: &str, current: bool) -> String {
    let class = if current { " class=\"current\"" } else { "" };
    format!("<a href=\"{}\"{class}>{text}</a>", href.replace('&', "&amp;"))
}

/// Where clicking `at` leads, if anywhere.
fn square_target(state: &PageState, session: &Session, at: Position) -> Option<PageState> {
    let settings = &state.settings;
    match (state.mode, state.moving) {
        (Mode::Display, _) => {
            (!session.is_finished()).then(|| state.with_steps(session.iterations() + 1))
        }
        (Mode::Draw, _) => (at != settings.knight && at != settings.flag).then(|| {
            state.apply(Action::SetTile {
                at,
                passable: !settings.is_passable(at),
            })
        }),
        (Mode::Move, None) => {
            if at == settings.knight {
                Some(state.with_mode(Mode::Move, Some(Moving::Knight)))
            } else if at == settings.flag {
                Some(state.with_mode(Mode::Move, Some(Moving::Flag)))
            } else {
                None
            }
        }
        (Mode::Move, Some(moving)) => {
            let action = match moving {
                Moving::Knight => Action::SetKnightPosition(at),
                Moving::Flag => Action::SetFlagPosition(at),
            };
            Some(state.apply(action).with_mode(Mode::Move, None))
        }
    }
}

fn squares(state: &PageState, session: &Session) -> String {
    let settings = &state.settings;
    let mut html = String::new();
    for (y, row) in session.tiles().rows().enumerate() {
        html += "<div class=\"rank\">";
        for (x, tile) in row.iter().enumerate() {
            let at = Position::new(x, y);
            let color = match Color::of(&at) {
                Color::White => "AntiqueWhite",
                Color::Black => "Coral",
            };
            let glyph = if at == settings.knight {
                format!("<span class=\"piece\">{}</span>", settings.piece.symbol())
            } else if at == settings.flag {
                format!("<span class=\"piece\">{FLAG}</span>")
            } else if session.shadows().contains(&at) {
                format!("<span class=\"piece shadow\">{}</span>", settings.piece.symbol())
            } else {
                String::new()
            };
            let held = match state.moving {
                Some(Moving::Knight) => at == settings.knight,
                Some(Moving::Flag) => at == settings.flag,
                None => false,
            };
            let class = format!(
                "square {}{}",
                tile.name(),
                if held { " held" } else { "" }
            );

            html += &match square_target(state, session, at) {
                Some(target) => format!(
                    "<a href=\"{}\" class=\"{class}\" style=\"background-color: {color}\" title=\"{at}\">{glyph}</a>",
                    target.href().replace('&', "&amp;")
                ),
                None => format!(
                    "<div class=\"{class}\" style=\"background-color: {color}\" title=\"{at}\">{glyph}</div>"
                ),
            };
        }
        html += "</div>";
    }
    html
}

/// Svg overlay in board units, one unit per square.
fn arrows(state: &PageState, session: &Session) -> String {
    let (width, height) = (state.settings.width, state.settings.height);
    let lines = session.arrows().iter().fold(String::new(), |mut acc, line| {
        acc += &format!(
            "<line x1=\"{}.5\" y1=\"{}.5\" x2=\"{}.5\" y2=\"{}.5\" marker-end=\"url(#head)\"/>",
            line.from.x, line.from.y, line.to.x, line.to.y
        );
        acc
    });
    format!(
        "<svg class=\"arrows\" viewBox=\"0 0 {width} {height}\" width=\"{}\" height=\"{}\">
            <defs>
                <marker id=\"head\" viewBox=\"0 0 10 10\" refX=\"8\" refY=\"5\" markerWidth=\"4\" markerHeight=\"4\" orient=\"auto\">
                    <path d=\"M 0 0 L 10 5 L 0 10 z\"/>
                </marker>
            </defs>
            {lines}
        </svg>",
        width * SQUARE_SIZE,
        height * SQUARE_SIZE
    )
}

fn controls(state: &PageState, session: &Session) -> String {
    let settings = &state.settings;
    let mut html = String::new();

    html += "<div class=\"row\">Mode: ";
    for mode in Mode::ALL {
        html += &link(&state.with_mode(mode, None).href(), mode.name(), state.mode == mode);
    }
    html += "</div><div class=\"row\">Search: ";
    if !session.is_finished() {
        html += &link(&state.with_steps(session.iterations() + 1).href(), "step", false);
    }
    html += &link(&state.with_steps(0).href(), "restart", false);
    html += &link(&format!("/api/run?{}", state.query()), "json", false);

    html += "</div><div class=\"row\">Size: ";
    let (width, height) = (settings.width, settings.height);
    for (label, w, h) in [
        ("width -", width.saturating_sub(1), height),
        ("width +", width + 1, height),
        ("height -", width, height.saturating_sub(1)),
        ("height +", width, height + 1),
    ] {
        if (MIN_SIZE..=MAX_SIZE).contains(&w) && (MIN_SIZE..=MAX_SIZE).contains(&h) {
            let target = state.apply(Action::ChangeSize { width: w, height: h });
            html += &link(&target.href(), label, false);
        }
    }

    html += "</div><div class=\"row\">Piece: ";
    for piece in Piece::ALL {
        let target = state.apply(Action::SetCharacter(piece));
        html += &link(&target.href(), piece.name(), settings.piece == piece);
    }

    html += "</div><div class=\"row\">Algorithm: ";
    for algorithm in Algorithm::ALL {
        let target = state.apply(Action::SetAlgorithm(algorithm));
        html += &link(&target.href(), algorithm.label(), settings.algorithm == algorithm);
    }

    html += "</div><div class=\"row\">Speed: ";
    for (speed, label) in ITERATION_SPEEDS.into_iter().zip(ITERATION_SPEED_LABELS) {
        let target = state.apply(Action::SetIterationSpeed(speed));
        html += &link(&target.href(), label, settings.iteration_speed == speed);
    }

    html += "</div><div class=\"row\">Avoid: ";
    let weights = settings.weight_settings;
    let toggles: [(&str, bool, WeightSettings); 4] = [
        ("white", weights.avoid_white, WeightSettings { avoid_white: !weights.avoid_white, ..weights }),
        ("black", weights.avoid_black, WeightSettings { avoid_black: !weights.avoid_black, ..weights }),
        ("center", weights.avoid_center, WeightSettings { avoid_center: !weights.avoid_center, ..weights }),
        ("corners", weights.avoid_corners, WeightSettings { avoid_corners: !weights.avoid_corners, ..weights }),
    ];
    for (label, on, toggled) in toggles {
        html += &link(&state.apply(Action::SetWeights(toggled)).href(), label, on);
    }
    html += "</div>";
    html
}

fn score(session: &Session) -> String {
    match session.path_length() {
        Some(length) => format!("Iterations: {} | Path: {length}", session.iterations()),
        None => format!("Iterations: {}", session.iterations()),
    }
}

/// Meta refresh stepping the search while it runs in display mode.
fn refresh(state: &PageState, session: &Session) -> String {
    match state.settings.iteration_speed {
        Some(ms) if state.mode == Mode::Display && !session.is_finished() => format!(
            "<meta http-equiv=\"refresh\" content=\"{};url={}\">",
            ms as f64 / 1000.0,
            state.with_steps(session.iterations() + 1).href().replace('&', "&amp;")
        ),
        _ => String::new(),
    }
}

pub fn page(state: &PageState, session: &Session) -> String {
    let board_width = state.settings.width * SQUARE_SIZE;
    let board_height = state.settings.height * SQUARE_SIZE;
    format!(
        "<!DOCTYPE html>
        <html>
            <head>
                <meta charset=\"utf-8\">
                {refresh}
                <title>Knight path</title>
                <style>
                    body {{
                        font-family: sans-serif;
                    }}
                    .board {{
                        position: relative;
                        display: flex;
                        flex-flow: column;
                        width: {board_width}px;
                        height: {board_height}px;
                    }}
                    .rank {{
                        display: flex;
                    }}
                    .square {{
                        position: relative;
                        display: flex;
                        justify-content: center;
                        align-items: center;
                        width: {SQUARE_SIZE}px;
                        height: {SQUARE_SIZE}px;
                        text-decoration: none;
                        color: black;
                    }}
                    .found {{ box-shadow: inset 0 0 0 {SQUARE_SIZE}px rgba(255, 215, 0, 0.35); }}
                    .visited {{ box-shadow: inset 0 0 0 {SQUARE_SIZE}px rgba(70, 130, 180, 0.45); }}
                    .road {{ box-shadow: inset 0 0 0 {SQUARE_SIZE}px rgba(50, 205, 50, 0.6); }}
                    .unpassable {{ background-color: #333 !important; }}
                    .held {{ outline: 3px solid royalblue; outline-offset: -3px; }}
                    .piece {{ font-size: 44px; }}
                    .shadow {{ opacity: 0.5; }}
                    .arrows {{
                        position: absolute;
                        top: 0;
                        left: 0;
                        pointer-events: none;
                        stroke: darkred;
                        stroke-width: 0.08;
                        fill: darkred;
                    }}
                    .row a {{ margin-right: 0.5rem; }}
                    .current {{ font-weight: bold; }}
                </style>
            </head>
            <body>
                <div class=\"board\">
                    {squares}
                    {arrows}
                </div>
                <p class=\"score\">{score}</p>
                {controls}
            </body>
        </html>
    ",
        refresh = refresh(state, session),
        squares = squares(state, session),
        arrows = arrows(state, session),
        score = score(session),
        controls = controls(state, session),
    )
}

#[cfg(test)]
mod tests {
    use engine::settings::Settings;

    use super::*;

    fn session(state: &PageState) -> Session {
        Session::replay(state.settings.clone(), state.steps).unwrap()
    }

    #[test]
    fn display_page_steps_on_click_and_refreshes() {
        let state = PageState::new(Settings::default()).with_steps(2);
        let session = session(&state);
        let html = page(&state, &session);
        assert!(html.contains("http-equiv=\"refresh\" content=\"0.5;url=/?"));
        assert!(html.contains("steps=3"));
        assert!(html.contains("Iterations: 2"));
        assert!(html.contains("<line"));
    }

    #[test]
    fn finished_page_stops_refreshing() {
        let state = PageState::new(Settings::default()).with_steps(usize::MAX);
        let session = session(&state);
        let html = page(&state, &session);
        assert!(!html.contains("http-equiv"));
        assert!(html.contains("Path: 4 moves"));
        assert!(html.contains("square road"));
    }

    #[test]
    fn draw_mode_links_toggle_walls() {
        let state = PageState::new(Settings::with_size(3, 3)).with_mode(Mode::Draw, None);
        let session = session(&state);
        let target = square_target(&state, &session, Position::new(2, 0)).unwrap();
        assert!(!target.settings.is_passable(Position::new(2, 0)));
        assert!(square_target(&state, &session, Position::new(0, 0)).is_none());
        assert!(!page(&state, &session).contains("http-equiv"));
    }

    #[test]
    fn move_mode_picks_up_and_drops() {
        let state = PageState::new(Settings::default()).with_mode(Mode::Move, None);
        let session = session(&state);
        assert!(square_target(&state, &session, Position::new(4, 4)).is_none());
        let held = square_target(&state, &session, Position::new(1, 1)).unwrap();
        assert_eq!(held.moving, Some(Moving::Flag));

        let dropped = square_target(&held, &session, Position::new(6, 6)).unwrap();
        assert_eq!(dropped.settings.flag, Position::new(6, 6));
        assert_eq!(dropped.moving, None);
    }

    #[test]
    fn click_only_speed_has_no_refresh() {
        let state = PageState::new(Settings::default()).apply(Action::SetIterationSpeed(None));
        let html = page(&state, &session(&state));
        assert!(!html.contains("http-equiv"));
        assert!(html.contains("square visited") || html.contains("square notfound"));
    }
}
