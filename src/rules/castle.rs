use super::model::Team;

/// The two castling sides, with their fixed target and transit files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Queenside,
    Kingside,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Queenside, CastleSide::Kingside];

    /// File the king lands on.
    pub const fn king_file(self) -> u8 {
        match self {
            CastleSide::Queenside => 2,
            CastleSide::Kingside => 6,
        }
    }

    /// Home-rank files that must be vacant and unattacked.
    pub const fn free_files(self) -> &'static [u8] {
        match self {
            CastleSide::Queenside => &[1, 2, 3],
            CastleSide::Kingside => &[5, 6],
        }
    }

    /// Corner file the rook starts on.
    pub const fn rook_home_file(self) -> u8 {
        match self {
            CastleSide::Queenside => 0,
            CastleSide::Kingside => 7,
        }
    }

    /// File the rook lands on, inside of the castled king.
    pub const fn rook_castled_file(self) -> u8 {
        match self {
            CastleSide::Queenside => 3,
            CastleSide::Kingside => 5,
        }
    }
}

/// Which castling options each team still has. Rights only ever shrink over
/// a game line; `grant` exists for reconstructing a position from notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastleRights {
    // [white kingside, white queenside, black kingside, black queenside]
    flags: [bool; 4],
}

impl CastleRights {
    pub fn full() -> Self {
        Self { flags: [true; 4] }
    }

    pub fn none() -> Self {
        Self { flags: [false; 4] }
    }

    fn index(team: Team, side: CastleSide) -> usize {
        let side_index = match side {
            CastleSide::Kingside => 0,
            CastleSide::Queenside => 1,
        };
        team.index() * 2 + side_index
    }

    pub fn allows(&self, team: Team, side: CastleSide) -> bool {
        self.flags[Self::index(team, side)]
    }

    pub fn grant(&mut self, team: Team, side: CastleSide) {
        self.flags[Self::index(team, side)] = true;
    }

    pub fn revoke(&mut self, team: Team, side: CastleSide) {
        self.flags[Self::index(team, side)] = false;
    }

    pub fn revoke_all(&mut self, team: Team) {
        for side in CastleSide::BOTH {
            self.revoke(team, side);
        }
    }

    pub fn any(&self, team: Team) -> bool {
        CastleSide::BOTH.iter().any(|side| self.allows(team, *side))
    }

    /// The sides `team` may still castle on.
    pub fn sides(&self, team: Team) -> Vec<CastleSide> {
        CastleSide::BOTH
            .into_iter()
            .filter(|side| self.allows(team, *side))
            .collect()
    }
}

impl Default for CastleRights {
    fn default() -> Self {
        Self::full()
    }
}
