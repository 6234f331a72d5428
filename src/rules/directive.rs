use super::board::{initial_piece_at, Board};
use super::model::{Field, Piece, Team};
use super::state::State;

/// Everything a directive may consult: the position being evaluated, the
/// field the piece stands on, and the piece itself.
pub struct MoveContext<'a> {
    pub state: &'a State,
    pub from: Field,
    pub piece: Piece,
}

impl<'a> MoveContext<'a> {
    pub fn board(&self) -> &'a Board {
        self.state.board()
    }
}

/// Quarter-turn transforms of a base (Δrank, Δfile) offset. North is "up"
/// the board, toward rank 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    fn apply(self, rank: i8, file: i8) -> (i8, i8) {
        match self {
            Rotation::North => (-rank, file),
            Rotation::East => (file, rank),
            Rotation::South => (rank, -file),
            Rotation::West => (-file, -rank),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Team-relative: north for WHITE, south for BLACK.
    Forward,
    AllDirections,
}

impl Orientation {
    fn rotations(self, team: Team) -> &'static [Rotation] {
        match self {
            Orientation::AllDirections => {
                &[Rotation::North, Rotation::East, Rotation::South, Rotation::West]
            }
            Orientation::Forward => match team {
                Team::White => &[Rotation::North],
                Team::Black => &[Rotation::South],
            },
        }
    }
}

/// Post-filter over the stepped-to field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    Any,
    /// The field must be empty (a non-capturing step).
    EmptyOnly,
    /// The field must hold an opposing piece (a capture-only step).
    EnemyOnly,
}

/// A geometric rule: walk a base offset outward, in one or all directions,
/// a bounded number of steps. Builders consume and return the directive, so
/// specializing a shared base can never alias its siblings.
#[derive(Debug, Clone, PartialEq)]
pub struct Relative {
    offsets: Vec<(i8, i8)>,
    orientation: Orientation,
    steps: u8,
    filter: Filter,
    outset_only: bool,
    en_passant: bool,
}

pub fn relative(rank: i8, file: i8) -> Relative {
    Relative {
        offsets: vec![(rank, file)],
        orientation: Orientation::Forward,
        steps: 1,
        filter: Filter::Any,
        outset_only: false,
        en_passant: false,
    }
}

pub fn forward(steps: u8) -> Relative {
    relative(1, 0).steps(steps)
}

impl Relative {
    /// Adds an alternative base offset.
    pub fn or(mut self, rank: i8, file: i8) -> Self {
        self.offsets.push((rank, file));
        self
    }

    pub fn all_directions(mut self) -> Self {
        self.orientation = Orientation::AllDirections;
        self
    }

    pub fn steps(mut self, steps: u8) -> Self {
        self.steps = steps;
        self
    }

    pub fn once(self) -> Self {
        self.steps(1)
    }

    pub fn twice(self) -> Self {
        self.steps(2)
    }

    /// Up to 7 steps, the longest walk an 8×8 board admits.
    pub fn indefinitely(self) -> Self {
        self.steps(7)
    }

    pub fn non_capturing(mut self) -> Self {
        self.filter = Filter::EmptyOnly;
        self
    }

    pub fn capture_only(mut self) -> Self {
        self.filter = Filter::EnemyOnly;
        self
    }

    /// Only applies while the origin field still holds this piece per the
    /// default starting layout (the pawn double-step gate).
    pub fn if_outset(mut self) -> Self {
        self.outset_only = true;
        self
    }

    /// Additionally accept the position's en-passant target even though that
    /// field is empty.
    pub fn en_passant(mut self) -> Self {
        self.en_passant = true;
        self
    }

    fn accepts(&self, context: &MoveContext, field: Field) -> bool {
        let matched = match self.filter {
            Filter::Any => true,
            Filter::EmptyOnly => context.board().piece_at(field).is_none(),
            Filter::EnemyOnly => context
                .board()
                .piece_at(field)
                .map_or(false, |occupant| occupant.team != context.piece.team),
        };
        matched || (self.en_passant && context.state.en_passant() == Some(field))
    }

    fn apply(&self, context: &MoveContext) -> Vec<Field> {
        if self.outset_only && initial_piece_at(context.from) != Some(context.piece) {
            return Vec::new();
        }

        let mut fields = Vec::new();
        for rotation in self.orientation.rotations(context.piece.team) {
            for &(rank, file) in &self.offsets {
                let (d_rank, d_file) = rotation.apply(rank, file);
                let mut current = context.from;
                for _ in 0..self.steps {
                    current = match current.offset(d_rank, d_file) {
                        Some(next) => next,
                        None => break,
                    };
                    if self.accepts(context, current) {
                        fields.push(current);
                    }
                    // no sliding through pieces, friend or foe
                    if context.board().piece_at(current).is_some() {
                        break;
                    }
                }
            }
        }
        fields
    }
}

pub type OpaqueRule = fn(&MoveContext) -> Vec<Field>;

/// A composable move rule: either a geometric walk or an arbitrary function
/// of the whole context (castling needs rights and attack state, not
/// geometry).
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    Opaque(OpaqueRule),
    Relative(Relative),
}

impl Directive {
    pub fn apply(&self, context: &MoveContext) -> Vec<Field> {
        match self {
            Directive::Opaque(rule) => rule(context),
            Directive::Relative(relative) => relative.apply(context),
        }
    }

    /// Caps a geometric walk at one step; opaque rules are unchanged.
    pub fn once(self) -> Self {
        match self {
            Directive::Relative(relative) => Directive::Relative(relative.once()),
            opaque => opaque,
        }
    }

    /// Opaque rules never produce capturing moves, so attack scans skip them.
    pub(crate) fn may_capture(&self) -> bool {
        matches!(self, Directive::Relative(_))
    }
}

impl From<Relative> for Directive {
    fn from(relative: Relative) -> Self {
        Directive::Relative(relative)
    }
}
