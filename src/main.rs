use arbiter::rules::notation::fen;
use arbiter::rules::{attackers, in_check, legal_moves, perft, Field, Move, State, Team};

use clap::arg;
use clap::command;
use clap::Command;

use tabled::settings::Style;
use tabled::Table;
use tabled::Tabled;

const INITIAL_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 0";

fn main() {
    let matches = command!()
        .propagate_version(true)
        .subcommand(
            Command::new("show").about("Render a position").arg(
                arg!(
                -f --fen <FEN> "Position record"
                        )
                .default_value(INITIAL_POSITION),
            ),
        )
        .subcommand(
            Command::new("moves")
                .about("List the legal moves of a position")
                .arg(
                    arg!(
                    -f --fen <FEN> "Position record"
                            )
                    .default_value(INITIAL_POSITION),
                )
                .arg(
                    arg!(
                    -s --square <SQUARE> "Only moves starting on this square"
                            )
                    .required(false),
                ),
        )
        .subcommand(
            Command::new("attacks")
                .about("List the pieces attacking a square")
                .arg(
                    arg!(
                    -f --fen <FEN> "Position record"
                            )
                    .default_value(INITIAL_POSITION),
                )
                .arg(arg!(
                    -s --square <SQUARE> "Target square"
                ))
                .arg(
                    arg!(
                    -b --by <TEAM> "Attacking side, w or b"
                            )
                    .default_value("w"),
                ),
        )
        .subcommand(
            Command::new("perft")
                .about("Count leaf positions of the legal-move tree")
                .arg(
                    arg!(
                    -f --fen <FEN> "Position record"
                            )
                    .default_value(INITIAL_POSITION),
                )
                .arg(
                    arg!(
                    -x --depth <d> "depth"
                            )
                    .default_value("3")
                    .value_parser(clap::value_parser!(u8)),
                )
                .arg(
                    arg!(
                    -m --moves <moves> "Moves to apply first"
                            )
                    .num_args(1..)
                    .value_parser(clap::value_parser!(String)),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("show", arg_matches)) => {
            let state = parse_state(arg_matches.get_one::<String>("fen").unwrap());
            show(&state);
        }
        Some(("moves", arg_matches)) => {
            let state = parse_state(arg_matches.get_one::<String>("fen").unwrap());
            let square = arg_matches.get_one::<String>("square");
            list_moves(&state, square.map(|s| s.as_str()));
        }
        Some(("attacks", arg_matches)) => {
            let state = parse_state(arg_matches.get_one::<String>("fen").unwrap());
            let square = arg_matches.get_one::<String>("square").unwrap();
            let by = arg_matches.get_one::<String>("by").unwrap();
            list_attackers(&state, square, by);
        }
        Some(("perft", arg_matches)) => {
            let state = parse_state(arg_matches.get_one::<String>("fen").unwrap());
            let depth = *arg_matches.get_one::<u8>("depth").unwrap();
            let moves = arg_matches
                .get_many::<String>("moves")
                .unwrap_or_default()
                .filter(|v| !v.is_empty())
                .collect::<Vec<_>>();
            run_perft(state, moves, depth);
        }
        None => {
            show(&State::default());
        }
        _ => unreachable!("Exhausted list of subcommands"),
    }
}

fn parse_state(record: &str) -> State {
    fen::decode(record).expect("Invalid position record")
}

fn show(state: &State) {
    println!("{}", state.board().render_to_string());
    println!("{}", fen::encode(state));
    if in_check(state, state.to_move()) {
        println!("side to move is in check");
    }
}

#[derive(Tabled)]
struct MoveRow {
    piece: char,
    from: String,
    to: String,
    capture: bool,
}

fn list_moves(state: &State, square: Option<&str>) {
    let from_filter = square.map(|s| Field::from_algebraic(s).expect("Invalid square"));
    let rows: Vec<MoveRow> = legal_moves(state)
        .into_iter()
        .filter(|m| from_filter.map_or(true, |f| m.from == f))
        .map(|m| MoveRow {
            piece: state.board().piece_at(m.from).unwrap().letter(),
            from: m.from.as_algebraic(),
            to: m.to.as_algebraic(),
            capture: state.board().piece_at(m.to).is_some(),
        })
        .collect();
    println!("{}", Table::new(rows).with(Style::modern()));
}

#[derive(Tabled)]
struct AttackerRow {
    piece: char,
    square: String,
}

fn list_attackers(state: &State, square: &str, by: &str) {
    let target = Field::from_algebraic(square).expect("Invalid square");
    let team = match by {
        "w" => Team::White,
        "b" => Team::Black,
        _ => panic!("Invalid team: {}", by),
    };
    let rows: Vec<AttackerRow> = attackers(state, target, team)
        .into_iter()
        .map(|field| AttackerRow {
            piece: state.board().piece_at(field).unwrap().letter(),
            square: field.as_algebraic(),
        })
        .collect();
    println!("{}", Table::new(rows).with(Style::modern()));
}

fn run_perft(state: State, moves: Vec<&String>, depth: u8) {
    let mut state = state;
    for m in moves {
        let mv = Move::from_algebraic(m).expect("Invalid move");
        if legal_moves(&state).contains(&mv) {
            state = state.execute(mv);
        } else {
            panic!("Illegal move: {}", m);
        }
    }

    let mut counts = Vec::<(String, u64)>::new();
    for mv in legal_moves(&state) {
        counts.push((
            mv.as_algebraic(),
            perft(&state.execute(mv), depth.saturating_sub(1)),
        ));
    }
    counts.sort();

    let mut total = 0;
    for (m, c) in counts {
        println!("{}: {}", m, c);
        total += c;
    }
    println!("\nNodes searched: {}", total);
}
