use core::fmt;

/// One of the three fixed table positions. Roles never rotate mid-game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Seat {
    Landlord = 0,
    LandlordUp = 1,
    LandlordDown = 2,
}

impl Seat {
    pub const LOOP: [Seat; 3] = [Seat::Landlord, Seat::LandlordUp, Seat::LandlordDown];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Seat::Landlord),
            1 => Some(Seat::LandlordUp),
            2 => Some(Seat::LandlordDown),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Turn order is fixed regardless of passes.
    pub const fn next(self) -> Seat {
        match self {
            Seat::Landlord => Seat::LandlordUp,
            Seat::LandlordUp => Seat::LandlordDown,
            Seat::LandlordDown => Seat::Landlord,
        }
    }

    pub const fn side(self) -> Side {
        match self {
            Seat::Landlord => Side::Landlord,
            Seat::LandlordUp | Seat::LandlordDown => Side::Farmers,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Seat::Landlord => "Landlord",
            Seat::LandlordUp => "LandlordUp",
            Seat::LandlordDown => "LandlordDown",
        };
        f.write_str(label)
    }
}

/// The two scoring sides; the farmers win and lose together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Side {
    Landlord = 0,
    Farmers = 1,
}

impl Side {
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn opponent(self) -> Side {
        match self {
            Side::Landlord => Side::Farmers,
            Side::Farmers => Side::Landlord,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Side::Landlord => "Landlord",
            Side::Farmers => "Farmers",
        };
        f.write_str(label)
    }
}
