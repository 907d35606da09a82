use super::globals::JAIL_POSITION;
use super::player::PlayerToken;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
/// The rent leg of a turn, settled when the mover lands on a property
/// somebody else owns.
pub struct RentCharge {
    /// Number of the position the rent was charged at.
    pub position: u8,
    /// The amount transferred.
    pub amount: f64,
    /// The owner of the property.
    pub owner: PlayerToken,
    /// The player who paid.
    pub paid_by: PlayerToken,
    /// The player who was credited. Rent always goes to the mover's
    /// opponent, who in a two-player game is necessarily the owner.
    pub paid_to: PlayerToken,
}

#[derive(Debug, Clone, PartialEq)]
/// The facts of one `advance_turn` call.
pub struct TurnReport {
    /// The player who moved this turn.
    pub mover: PlayerToken,
    /// The dice roll that was played, 1 to 12.
    pub roll: u8,
    /// Position number the mover started the turn on.
    pub from: u8,
    /// Position number the mover ended the turn on, after any redirect.
    pub to: u8,
    /// Whether the mover landed on JAIL and was sent on to GO.
    pub landed_on_jail: bool,
    /// The rent settled on the landing position, if any was due.
    pub rent: Option<RentCharge>,
}

impl fmt::Display for TurnReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rolls {}\nMoving from Posn {} to Posn ",
            self.mover, self.roll, self.from
        )?;

        if self.landed_on_jail {
            write!(f, "{} (JAIL)\nSent back to Posn ", JAIL_POSITION)?;
        }
        write!(f, "{}", self.to)?;

        if let Some(rent) = &self.rent {
            write!(
                f,
                "\nThis position is owned by {}, therefore {} is charged £{:.2} in rent.",
                rent.owner, rent.paid_by, rent.amount
            )?;
        }

        Ok(())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// What an improve action built.
pub enum ImprovementKind {
    House,
    Hotel,
}

impl ImprovementKind {
    fn noun(self) -> &'static str {
        match self {
            ImprovementKind::House => "house",
            ImprovementKind::Hotel => "hotel",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// The facts of one `interact_with_current_position` call.
pub enum TransactionReport {
    /// An unowned property was bought at its listed price.
    Purchase {
        buyer: PlayerToken,
        position: u8,
        name: String,
        price: f64,
    },
    /// A house or hotel was built on a monopolized property.
    Improvement {
        builder: PlayerToken,
        position: u8,
        kind: ImprovementKind,
        cost: f64,
    },
}

impl fmt::Display for TransactionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionReport::Purchase {
                buyer, name, price, ..
            } => write!(f, "{} has been bought by {} for £{:.2}", name, buyer, price),
            TransactionReport::Improvement {
                builder, kind, cost, ..
            } => write!(
                f,
                "{} pays £{:.2} to build a {} at the property.",
                builder,
                cost,
                kind.noun()
            ),
        }
    }
}
