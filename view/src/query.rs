use engine::{
    settings::{Action, Settings},
    Algorithm,
};
use movegen::{Layout, WeightSettings};
use serde::{Deserialize, Serialize};
use util::{error::GridError, mapping::Mapping2D, piece::Piece, position::Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Clicking the board advances the search
    #[default]
    Display,
    /// Clicking a square toggles a wall
    Draw,
    /// Clicking a piece picks it up, the next click drops it
    Move,
}

impl Mode {
    pub const ALL: [Self; 3] = [Self::Display, Self::Draw, Self::Move];

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Display => "display",
            Self::Draw => "draw",
            Self::Move => "move",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Moving {
    Knight,
    Flag,
}

impl Moving {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Knight => "knight",
            Self::Flag => "flag",
        }
    }
}

/// Query string of the board page. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoardQuery {
    pub w: Option<usize>,
    pub h: Option<usize>,
    /// Layout rows in url form, `.` open and `x` wall, split by `/`
    pub walls: Option<String>,
    pub kx: Option<usize>,
    pub ky: Option<usize>,
    pub fx: Option<usize>,
    pub fy: Option<usize>,
    pub piece: Option<Piece>,
    pub algo: Option<Algorithm>,
    /// Milliseconds between automatic steps, `0` for click only
    pub speed: Option<u64>,
    #[serde(default)]
    pub aw: bool,
    #[serde(default)]
    pub ab: bool,
    #[serde(default)]
    pub ac: bool,
    #[serde(default)]
    pub aco: bool,
    #[serde(default)]
    pub steps: usize,
    #[serde(default)]
    pub mode: Mode,
    pub moving: Option<Moving>,
}

/// Moves both endpoints at once so they can swap squares. Anything the
/// reducer would refuse falls back to moving them one at a time.
fn place_endpoints(mut settings: Settings, knight: Option<Position>, flag: Option<Position>) -> Settings {
    match (knight, flag) {
        (Some(knight), Some(flag))
            if knight != flag && settings.is_passable(knight) && settings.is_passable(flag) =>
        {
            settings.knight = knight;
            settings.flag = flag;
            settings
        }
        _ => [
            knight.map(Action::SetKnightPosition),
            flag.map(Action::SetFlagPosition),
        ]
        .into_iter()
        .flatten()
        .fold(settings, Settings::reduce),
    }
}

/// Fills endpoints the layout does not mark with the ones from the query,
/// under the same guards as the reducer: open squares only, never shared.
fn endpoints_onto(layout: &mut Layout, knight: Option<Position>, flag: Option<Position>) {
    let open = |passability: &Mapping2D<bool>, at: Position| passability.get(at).copied().unwrap_or(false);
    if layout.knight.is_none() {
        layout.knight = knight.filter(|at| open(&layout.passability, *at) && Some(*at) != layout.flag);
    }
    if layout.flag.is_none() {
        layout.flag = flag.filter(|at| open(&layout.passability, *at) && Some(*at) != layout.knight);
    }
}

/// Everything a page shows, recoverable from its url.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub settings: Settings,
    pub steps: usize,
    pub mode: Mode,
    pub moving: Option<Moving>,
}

impl PageState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            steps: 0,
            mode: Mode::default(),
            moving: None,
        }
    }

    /// Replays the query through the settings reducer on top of `defaults`.
    pub fn from_query(query: &BoardQuery, defaults: &Settings) -> Result<Self, GridError> {
        let mut settings = defaults.clone();
        let knight = query.kx.zip(query.ky).map(|(x, y)| Position::new(x, y));
        let flag = query.fx.zip(query.fy).map(|(x, y)| Position::new(x, y));

        if let Some(walls) = &query.walls {
            let mut layout: Layout = walls.parse()?;
            endpoints_onto(&mut layout, knight, flag);
            settings = settings.with_layout(&layout)?;
        }
        if query.w.is_some() || query.h.is_some() {
            let width = query.w.unwrap_or(settings.width);
            let height = query.h.unwrap_or(settings.height);
            settings = settings.reduce(Action::ChangeSize { width, height });
        }
        if query.walls.is_none() {
            settings = place_endpoints(settings, knight, flag);
        }

        if let Some(piece) = query.piece {
            settings = settings.reduce(Action::SetCharacter(piece));
        }
        if let Some(algorithm) = query.algo {
            settings = settings.reduce(Action::SetAlgorithm(algorithm));
        }
        if let Some(speed) = query.speed {
            settings = settings.reduce(Action::SetIterationSpeed(Some(speed).filter(|ms| *ms > 0)));
        }
        settings = settings.reduce(Action::SetWeights(WeightSettings {
            avoid_white: query.aw,
            avoid_black: query.ab,
            avoid_center: query.ac,
            avoid_corners: query.aco,
        }));

        Ok(Self {
            settings,
            steps: query.steps,
            mode: query.mode,
            moving: query.moving.filter(|_| query.mode == Mode::Move),
        })
    }

    /// State after `action`. The run restarts unless only the speed changed.
    pub fn apply(&self, action: Action) -> Self {
        let steps = if action.restarts_search() { 0 } else { self.steps };
        Self {
            settings: self.settings.clone().reduce(action),
            steps,
            ..self.clone()
        }
    }

    pub fn with_steps(&self, steps: usize) -> Self {
        Self {
            steps,
            ..self.clone()
        }
    }

    pub fn with_mode(&self, mode: Mode, moving: Option<Moving>) -> Self {
        Self {
            mode,
            moving: moving.filter(|_| mode == Mode::Move),
            ..self.clone()
        }
    }

    /// Query string that recreates this state, without the leading `?`.
    pub fn query(&self) -> String {
        let settings = &self.settings;
        let mut pairs = vec![
            format!("w={}", settings.width),
            format!("h={}", settings.height),
        ];
        if settings.passability.iter().any(|(_, passable)| !passable) {
            let walls = Layout::from_passability(settings.passability.clone());
            pairs.push(format!("walls={}", walls.to_string(true)));
        }
        pairs.push(format!("kx={}&ky={}", settings.knight.x, settings.knight.y));
        pairs.push(format!("fx={}&fy={}", settings.flag.x, settings.flag.y));
        pairs.push(format!("piece={}", settings.piece));
        pairs.push(format!("algo={}", settings.algorithm));
        pairs.push(format!("speed={}", settings.iteration_speed.unwrap_or(0)));

        let weights = settings.weight_settings;
        for (key, on) in [
            ("aw", weights.avoid_white),
            ("ab", weights.avoid_black),
            ("ac", weights.avoid_center),
            ("aco", weights.avoid_corners),
        ] {
            if on {
                pairs.push(format!("{key}=true"));
            }
        }
        if self.steps > 0 {
            pairs.push(format!("steps={}", self.steps));
        }
        if self.mode != Mode::Display {
            pairs.push(format!("mode={}", self.mode.name()));
        }
        if let Some(moving) = self.moving {
            pairs.push(format!("moving={}", moving.name()));
        }
        pairs.join("&")
    }

    pub fn href(&self) -> String {
        format!("/?{}", self.query())
    }
}

#[cfg(test)]
mod tests {
    use axum::{extract::Query, http::Uri};

    use super::*;

    fn parse(uri: &str) -> BoardQuery {
        let uri: Uri = uri.parse().unwrap();
        Query::<BoardQuery>::try_from_uri(&uri).unwrap().0
    }

    fn state(uri: &str) -> PageState {
        PageState::from_query(&parse(uri), &Settings::default()).unwrap()
    }

    #[test]
    fn empty_query_is_default() {
        assert_eq!(state("/"), PageState::new(Settings::default()));
    }

    #[test]
    fn reads_every_parameter() {
        let page = state(
            "/?w=5&h=4&kx=4&ky=3&fx=0&fy=0&piece=queen&algo=astar&speed=0&ab=true&aco=true&steps=7&mode=move&moving=flag",
        );
        let settings = &page.settings;
        assert_eq!((settings.width, settings.height), (5, 4));
        assert_eq!(settings.knight, Position::new(4, 3));
        assert_eq!(settings.flag, Position::new(0, 0));
        assert_eq!(settings.piece, Piece::Queen);
        assert_eq!(settings.algorithm, Algorithm::AStar);
        assert_eq!(settings.iteration_speed, None);
        assert!(settings.weight_settings.avoid_black && settings.weight_settings.avoid_corners);
        assert!(!settings.weight_settings.avoid_white);
        assert_eq!(page.steps, 7);
        assert_eq!(page.mode, Mode::Move);
        assert_eq!(page.moving, Some(Moving::Flag));
    }

    #[test]
    fn swapping_endpoints_is_not_refused() {
        let page = state("/?kx=1&ky=1&fx=0&fy=0");
        assert_eq!(page.settings.knight, Position::new(1, 1));
        assert_eq!(page.settings.flag, Position::new(0, 0));
    }

    #[test]
    fn reducer_guards_apply() {
        let page = state("/?w=99&kx=50&ky=0&fx=0&fy=0");
        assert_eq!(page.settings.width, 20);
        assert_eq!(page.settings.knight, Position::new(0, 0));
        assert_eq!(page.settings.flag, Position::new(1, 1));
    }

    #[test]
    fn query_recreates_the_page() {
        let page = PageState::new(Settings::default())
            .apply(Action::ChangeSize { width: 6, height: 5 })
            .apply(Action::SetTile {
                at: Position::new(3, 2),
                passable: false,
            })
            .apply(Action::SetKnightPosition(Position::new(5, 4)))
            .apply(Action::SetCharacter(Piece::Bishop))
            .apply(Action::SetWeights(WeightSettings {
                avoid_center: true,
                ..Default::default()
            }))
            .with_steps(3)
            .with_mode(Mode::Draw, None);
        assert_eq!(state(&page.href()), page);
        assert!(page.query().contains("walls=....../....../...x../....../......"));
    }

    #[test]
    fn resizing_keeps_the_other_side() {
        let page = state("/?h=3");
        assert_eq!((page.settings.width, page.settings.height), (8, 3));
        let page = state("/?w=5");
        assert_eq!((page.settings.width, page.settings.height), (5, 8));
    }

    #[test]
    fn endpoints_do_not_open_walls() {
        let page = state("/?walls=..../..x./....&kx=2&ky=1&fx=3&fy=2");
        assert_eq!(page.settings.knight, Position::new(0, 0));
        assert_eq!(page.settings.flag, Position::new(3, 2));
        assert!(!page.settings.is_passable(Position::new(2, 1)));
    }

    #[test]
    fn endpoints_on_layouts_do_not_share_a_square() {
        let page = state("/?walls=..../..../....&kx=1&ky=1");
        assert_eq!(page.settings.knight, Position::new(1, 1));
        assert_eq!(page.settings.flag, Position::new(0, 0));

        let page = state("/?walls=K.../..../....&fx=0&fy=0");
        assert_eq!(page.settings.knight, Position::new(0, 0));
        assert_eq!(page.settings.flag, Position::new(1, 1));
    }

    #[test]
    fn bad_walls_are_errors() {
        let query = parse("/?walls=..q/...");
        assert!(PageState::from_query(&query, &Settings::default()).is_err());
    }

    #[test]
    fn speed_change_keeps_steps() {
        let page = PageState::new(Settings::default()).with_steps(4);
        assert_eq!(page.apply(Action::SetIterationSpeed(Some(50))).steps, 4);
        assert_eq!(page.apply(Action::SetAlgorithm(Algorithm::Greedy)).steps, 0);
    }
}
