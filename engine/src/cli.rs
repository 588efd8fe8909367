use std::{collections::VecDeque, fs, path::PathBuf, thread, time::Duration};

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use movegen::{Layout, WeightSettings};
use util::{piece::Piece, position::Position};

use crate::{
    algorithm::Algorithm,
    session::Session,
    settings::{Action, Settings, ITERATION_SPEEDS},
    IterationResult,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Board drawn with `.` `#` `K` `F`, rows split by `/`
    #[arg(long, global = true)]
    pub layout: Option<Layout>,

    #[arg(long, global = true)]
    pub piece: Option<Piece>,

    #[arg(long, global = true)]
    pub algorithm: Option<Algorithm>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct Avoid {
    #[arg(long)]
    pub white: bool,
    #[arg(long)]
    pub black: bool,
    #[arg(long)]
    pub center: bool,
    #[arg(long)]
    pub corners: bool,
}

impl From<Avoid> for WeightSettings {
    fn from(avoid: Avoid) -> Self {
        Self {
            avoid_white: avoid.white,
            avoid_black: avoid.black,
            avoid_center: avoid.center,
            avoid_corners: avoid.corners,
        }
    }
}

#[derive(Subcommand, Debug)]
#[clap(rename_all = "snake_case")]
pub enum Command {
    Interactive,
    Size {
        width: usize,
        height: usize,
    },
    Load {
        file: PathBuf,
    },
    Wall {
        at: Position,
    },
    Open {
        at: Position,
    },
    Knight {
        at: Position,
    },
    Flag {
        at: Position,
    },
    Piece {
        kind: Piece,
    },
    Algorithm {
        name: Algorithm,
    },
    Avoid(Avoid),
    /// Milliseconds between automatic steps, nothing for click only
    Speed {
        ms: Option<u64>,
    },
    Step {
        #[arg(default_value_t = 1)]
        count: usize,
    },
    Play {
        #[arg(short, long, default_value_t = 250)]
        frame_time: u64,
    },
    Moves {
        at: Position,
    },
    Print,
    Exit,
    Reset,
}

impl Cli {
    /// Settings picked by the global options.
    pub fn settings(&self) -> anyhow::Result<Settings> {
        let mut settings = Settings::default();
        if let Some(layout) = &self.layout {
            settings = settings.with_layout(layout).context("Invalid --layout")?;
        }
        if let Some(piece) = self.piece {
            settings = settings.reduce(Action::SetCharacter(piece));
        }
        if let Some(algorithm) = self.algorithm {
            settings = settings.reduce(Action::SetAlgorithm(algorithm));
        }
        Ok(settings)
    }

    /// Applies global options typed on an interactive line to the running
    /// session, before its command.
    pub fn apply_options(&self, session: &mut Session) -> anyhow::Result<()> {
        if let Some(layout) = &self.layout {
            let settings = session.settings().with_layout(layout).context("Invalid --layout")?;
            *session = Session::new(settings)?;
        }
        if let Some(piece) = self.piece {
            session.apply(Action::SetCharacter(piece))?;
        }
        if let Some(algorithm) = self.algorithm {
            session.apply(Action::SetAlgorithm(algorithm))?;
        }
        Ok(())
    }
}

/// Applies a position changing action and reports when the board refused it.
fn apply_checked(session: &mut Session, action: Action) -> anyhow::Result<()> {
    let before = session.settings().clone();
    session.apply(action.clone())?;
    if *session.settings() == before {
        bail!("{action:?} was ignored, the square is off the board, a wall or taken");
    }
    Ok(())
}

fn print_record(iteration: usize, record: &IterationResult) {
    match (record.from, record.to) {
        (Some(from), Some(to)) => println!(
            "{iteration}: {:?} {} -> {}",
            record.result, from.position, to.position
        ),
        (None, Some(to)) => println!("{iteration}: {:?} {}", record.result, to.position),
        _ => println!("{iteration}: {:?}", record.result),
    }
}

pub fn handle_command(cmd: Command, session: &mut Session) -> anyhow::Result<()> {
    match cmd {
        Command::Size { width, height } => {
            session.apply(Action::ChangeSize { width, height })?;
        }
        Command::Load { file } => {
            let text = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let layout: Layout = text
                .parse()
                .with_context(|| format!("Failed to parse {}", file.display()))?;
            *session = Session::new(session.settings().with_layout(&layout)?)?;
            println!("{session}");
        }
        Command::Wall { at } => apply_checked(session, Action::SetTile { at, passable: false })?,
        Command::Open { at } => apply_checked(session, Action::SetTile { at, passable: true })?,
        Command::Knight { at } => apply_checked(session, Action::SetKnightPosition(at))?,
        Command::Flag { at } => apply_checked(session, Action::SetFlagPosition(at))?,
        Command::Piece { kind } => session.apply(Action::SetCharacter(kind))?,
        Command::Algorithm { name } => session.apply(Action::SetAlgorithm(name))?,
        Command::Avoid(avoid) => session.apply(Action::SetWeights(avoid.into()))?,
        Command::Speed { ms } => {
            if !ITERATION_SPEEDS.contains(&ms) {
                bail!("Speed must be one of {ITERATION_SPEEDS:?}");
            }
            session.apply(Action::SetIterationSpeed(ms))?;
        }
        Command::Step { count } => {
            for _ in 0..count {
                match session.advance() {
                    Some(record) => print_record(session.iterations(), &record),
                    None => {
                        println!("Search already finished");
                        break;
                    }
                }
            }
            if session.is_finished() {
                println!("{session}");
            }
        }
        Command::Play { frame_time } => {
            println!("{session}\n");
            while session.advance().is_some() {
                thread::sleep(Duration::from_millis(frame_time));
                println!("{session}\n");
            }
        }
        Command::Moves { at } => {
            let board = session.board();
            board.at(at)?;
            let piece = session.settings().piece;
            println!(
                "Moves: {}",
                board.get_moves(piece, at).iter().fold(String::new(), |mut acc, to| {
                    acc += &to.to_string();
                    acc += " ";
                    acc
                })
            );
        }
        Command::Print => println!("{session}"),
        Command::Reset => *session = Session::new(session.settings().clone())?,
        Command::Interactive | Command::Exit => {}
    }
    Ok(())
}

/// Splits a command line on spaces, keeping quoted runs together.
pub fn split_ignore_quotes(input: &str) -> VecDeque<String> {
    let mut words = VecDeque::new();
    let mut word = String::new();
    let mut quoted = false;

    for c in input.trim_end_matches(|c: char| c == '\n' || c == '\r').chars() {
        match c {
            '\'' | '"' => quoted = !quoted,
            c if c.is_whitespace() && !quoted => {
                if !word.is_empty() {
                    words.push_back(std::mem::take(&mut word));
                }
            }
            c => word.push(c),
        }
    }
    if !word.is_empty() {
        words.push_back(word);
    }
    words
}
