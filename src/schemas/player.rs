//! Player endpoint schemas

use std::sync::OnceLock;

use crate::core::validate::ConstraintSet;
use crate::extract::{Operation, ValidatableSchema};
use crate::registry::{default_registry, optional, required};

pub struct Player;

impl Player {
    /// Body schema for `POST /guilds/{guild_id}/players` — the player id is
    /// the caller's Discord snowflake and must be supplied
    pub fn create() -> &'static ConstraintSet {
        static SET: OnceLock<ConstraintSet> = OnceLock::new();
        SET.get_or_init(|| {
            default_registry()
                .set()
                .field("id", required())
                .field("name", optional())
                .build()
                .expect("player create schema")
        })
    }

    /// Body schema for `PUT/PATCH /guilds/{guild_id}/players/{player_id}`
    pub fn update() -> &'static ConstraintSet {
        static SET: OnceLock<ConstraintSet> = OnceLock::new();
        SET.get_or_init(|| {
            default_registry()
                .set()
                .field("name", optional())
                .field("required_exp", optional())
                .build()
                .expect("player update schema")
        })
    }

    /// Path parameters of `/guilds/{guild_id}/players/{player_id}` routes
    pub fn params() -> &'static ConstraintSet {
        static SET: OnceLock<ConstraintSet> = OnceLock::new();
        SET.get_or_init(|| {
            default_registry()
                .set()
                .field("guild_id", required())
                .field("player_id", required())
                .build()
                .expect("player params schema")
        })
    }
}

impl ValidatableSchema for Player {
    fn constraint_set(operation: Operation) -> &'static ConstraintSet {
        match operation {
            Operation::Create => Self::create(),
            Operation::Update => Self::update(),
        }
    }
}
